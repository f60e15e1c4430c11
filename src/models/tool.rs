use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SeoFields;
use crate::utils::serde_helpers::{flexible_bool, nullable, opt_id, opt_u32};
use crate::utils::time::deserialize_opt_datetime;

pub const CATEGORIES: &[&str] = &[
    "development",
    "networking",
    "security",
    "system",
    "text",
    "converters",
    "generators",
    "calculators",
    "other",
];

pub const PLATFORMS: &[&str] = &["web", "linux", "macos", "windows", "cross-platform"];

pub const POPULARITY_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub icon: String,
    #[serde(deserialize_with = "nullable")]
    pub file_path: String,
    #[serde(deserialize_with = "flexible_bool")]
    pub published: bool,
    #[serde(flatten)]
    pub seo: SeoFields,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub platform: String,
    #[serde(deserialize_with = "nullable")]
    pub license: String,
    #[serde(deserialize_with = "nullable")]
    pub official_url: String,
    #[serde(deserialize_with = "opt_u32")]
    pub popularity: Option<u32>,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Tool {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            icon: String::new(),
            file_path: String::new(),
            published: false,
            seo: SeoFields::default(),
            category: CATEGORIES[0].to_string(),
            platform: PLATFORMS[0].to_string(),
            license: String::new(),
            official_url: String::new(),
            popularity: Some(5),
            created_at: None,
            updated_at: None,
        }
    }
}
