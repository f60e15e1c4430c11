use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SeoFields;
use crate::utils::serde_helpers::{flexible_bool, nullable, opt_id};
use crate::utils::time::deserialize_opt_datetime;

pub const CATEGORIES: &[&str] = &[
    "file-management",
    "text-processing",
    "networking",
    "process-management",
    "system-info",
    "permissions",
    "package-management",
    "disk-management",
    "archiving",
    "other",
];

pub const PLATFORMS: &[&str] = &["linux", "macos", "windows", "cross-platform"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Command {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub syntax: String,
    #[serde(deserialize_with = "nullable")]
    pub examples: String,
    #[serde(deserialize_with = "nullable")]
    pub options: String,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub platform: String,
    #[serde(deserialize_with = "nullable")]
    pub icon: String,
    #[serde(deserialize_with = "nullable")]
    pub file_path: String,
    #[serde(deserialize_with = "flexible_bool")]
    pub published: bool,
    #[serde(flatten)]
    pub seo: SeoFields,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            syntax: String::new(),
            examples: String::new(),
            options: String::new(),
            notes: String::new(),
            category: CATEGORIES[0].to_string(),
            platform: PLATFORMS[0].to_string(),
            icon: String::new(),
            file_path: String::new(),
            published: false,
            seo: SeoFields::default(),
            created_at: None,
            updated_at: None,
        }
    }
}
