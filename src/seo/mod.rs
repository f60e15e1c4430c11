//! Lesson SEO: the score heuristic, JSON-LD assembly and field suggestions.
//!
//! Both the lesson create and edit flows go through this module.

pub mod schema;
pub mod score;
pub mod text;

use crate::models::TutorialLesson;

pub use schema::{structured_data, structured_data_json, LessonContext};
pub use score::{seo_report, seo_score, SeoReport};

/// Site-wide constants written into structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub base_url: String,
    pub organization: String,
}

/// Fills empty meta, Open Graph and Twitter fields from the lesson itself.
/// Fields the editor already set are left alone.
pub fn suggest_missing(lesson: &mut TutorialLesson, canonical_url: Option<String>) {
    let title = lesson.title.trim().to_string();
    let excerpt = text::collapse_whitespace(&text::strip_html(&lesson.excerpt));
    let seo = &mut lesson.seo;

    if seo.meta_title.trim().is_empty() && !title.is_empty() {
        seo.meta_title = text::truncate_on_word(&title, score::TITLE_LIMIT);
    }
    if seo.meta_description.trim().is_empty() && !excerpt.is_empty() {
        seo.meta_description = text::truncate_on_word(&excerpt, score::DESCRIPTION_LIMIT);
    }
    if seo.reading_time.unwrap_or(0) == 0 {
        let minutes = text::reading_time_minutes(&lesson.content);
        if minutes > 0 {
            seo.reading_time = Some(minutes);
        }
    }
    if seo.canonical_url.trim().is_empty() {
        if let Some(url) = canonical_url {
            seo.canonical_url = url;
        }
    }

    fill(&mut seo.og_title, &seo.meta_title);
    fill(&mut seo.og_description, &seo.meta_description);
    fill(&mut seo.twitter_title, &seo.og_title);
    fill(&mut seo.twitter_description, &seo.og_description);
    fill(&mut seo.twitter_image, &seo.og_image);
}

fn fill(target: &mut String, source: &str) {
    if target.trim().is_empty() && !source.trim().is_empty() {
        *target = source.to_string();
    }
}
