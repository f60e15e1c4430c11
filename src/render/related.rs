use serde::Serialize;

use crate::models::Tool;
use crate::seo::text::{collapse_whitespace, strip_html, truncate_on_word};

pub const SUMMARY_LIMIT: usize = 120;

/// Gradient and accent pairs, rotated by card position.
pub const COLOR_SCHEMES: [(&str, &str); 6] = [
    ("from-blue-500 to-cyan-500", "blue"),
    ("from-purple-500 to-pink-500", "purple"),
    ("from-green-500 to-emerald-500", "green"),
    ("from-orange-500 to-red-500", "orange"),
    ("from-indigo-500 to-violet-500", "indigo"),
    ("from-teal-500 to-lime-500", "teal"),
];

const ICON_RULES: &[(&[&str], &str)] = &[
    (&["calculator"], "calculator"),
    (&["generator"], "sparkles"),
    (&["converter"], "arrows-right-left"),
    (&["formatter", "validator", "minifier"], "code-bracket"),
    (&["encoder", "decoder", "hash"], "lock-closed"),
    (&["checker", "lookup", "tester"], "magnifying-glass"),
];

pub const DEFAULT_ICON: &str = "wrench-screwdriver";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    pub icon: &'static str,
    pub gradient: &'static str,
    pub accent: &'static str,
}

pub fn icon_for(title: &str) -> &'static str {
    let title = title.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| title.contains(needle)))
        .map_or(DEFAULT_ICON, |(_, icon)| *icon)
}

pub fn card_style(title: &str, index: usize) -> CardStyle {
    let (gradient, accent) = COLOR_SCHEMES[index % COLOR_SCHEMES.len()];
    CardStyle {
        icon: icon_for(title),
        gradient,
        accent,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedCard {
    pub title: String,
    pub href: String,
    pub summary: String,
    #[serde(flatten)]
    pub style: CardStyle,
}

pub fn related_cards(tools: &[Tool], base_url: &str) -> Vec<RelatedCard> {
    tools
        .iter()
        .enumerate()
        .map(|(index, tool)| RelatedCard {
            title: tool.title.clone(),
            href: format!("{}/tools/{}", base_url, tool.slug),
            summary: truncate_on_word(&collapse_whitespace(&strip_html(&tool.description)), SUMMARY_LIMIT),
            style: card_style(&tool.title, index),
        })
        .collect()
}
