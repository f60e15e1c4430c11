use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{nullable, opt_id};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tutorial {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialSection {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "opt_id")]
    pub tutorial_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub order_index: i64,
}
