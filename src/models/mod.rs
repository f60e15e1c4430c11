pub mod command;
pub mod lesson;
pub mod tool;
pub mod tutorial;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::serde_helpers::nullable;

pub use command::Command;
pub use lesson::{Difficulty, LessonSeo, TutorialLesson};
pub use tool::Tool;
pub use tutorial::{Tutorial, TutorialSection};

/// SEO columns shared by commands and tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoFields {
    #[serde(deserialize_with = "nullable")]
    pub seo_title: String,
    #[serde(deserialize_with = "nullable")]
    pub seo_description: String,
    #[serde(deserialize_with = "nullable")]
    pub seo_keywords: String,
    /// JSON-LD kept as a serialized string, the way the API stores it.
    #[serde(deserialize_with = "schema_string")]
    pub schema_json: String,
}

impl SeoFields {
    /// Overwrites every SEO column with the generated values.
    pub fn apply(&mut self, generated: AutoSeoResponse) {
        self.seo_title = generated.seo_title;
        self.seo_description = generated.seo_description;
        self.seo_keywords = generated.seo_keywords;
        self.schema_json = generated.schema_json;
    }
}

/// Body of `POST .../auto-generate-seo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoSeoRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutoSeoResponse {
    #[serde(deserialize_with = "nullable")]
    pub seo_title: String,
    #[serde(deserialize_with = "nullable")]
    pub seo_description: String,
    #[serde(deserialize_with = "nullable")]
    pub seo_keywords: String,
    #[serde(deserialize_with = "schema_string")]
    pub schema_json: String,
}

/// `schema_json` comes back either as a string or as the JSON-LD itself.
fn schema_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => serde_json::to_string_pretty(&other).map_err(serde::de::Error::custom)?,
    })
}
