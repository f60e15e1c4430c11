use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{flexible_bool, nullable, opt_id, opt_u32, stringly};
use crate::utils::time::deserialize_opt_datetime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub const NAMES: &'static [&'static str] = &["beginner", "intermediate", "advanced"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("unknown difficulty level: {}", s))
    }
}

/// Meta, Open Graph and Twitter fields edited on the lesson SEO form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonSeo {
    #[serde(deserialize_with = "nullable")]
    pub meta_title: String,
    #[serde(deserialize_with = "nullable")]
    pub meta_description: String,
    #[serde(deserialize_with = "nullable")]
    pub meta_keywords: String,
    #[serde(deserialize_with = "nullable")]
    pub canonical_url: String,
    #[serde(deserialize_with = "nullable")]
    pub og_title: String,
    #[serde(deserialize_with = "nullable")]
    pub og_description: String,
    #[serde(deserialize_with = "nullable")]
    pub og_image: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_title: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_description: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_image: String,
    /// Minutes.
    #[serde(deserialize_with = "opt_u32")]
    pub reading_time: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialLesson {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub excerpt: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "opt_id")]
    pub section_id: Option<String>,
    #[serde(deserialize_with = "stringly")]
    pub estimated_time: String,
    #[serde(deserialize_with = "nullable")]
    pub difficulty_level: Difficulty,
    #[serde(deserialize_with = "nullable")]
    pub order_index: i64,
    #[serde(deserialize_with = "flexible_bool")]
    pub is_active: bool,
    #[serde(flatten)]
    pub seo: LessonSeo,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing, deserialize_with = "deserialize_opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TutorialLesson {
    pub fn blank() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }
}
