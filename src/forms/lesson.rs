use serde_json::Value;

use super::field::{parse_bool, FormField};
use super::{parse_optional_u32, EntityForm};
use crate::api::routes::{Resource, LESSONS};
use crate::error::FormError;
use crate::models::{Difficulty, Tutorial, TutorialLesson, TutorialSection};
use crate::seo::{self, LessonContext, SeoReport, SiteInfo};

/// Lesson editor state, including the parent section and tutorial used to
/// build canonical URLs and breadcrumbs.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonForm {
    pub record: TutorialLesson,
    pub section: Option<TutorialSection>,
    pub tutorial: Option<Tutorial>,
    pub site: SiteInfo,
}

impl LessonForm {
    pub fn new(site: SiteInfo) -> Self {
        Self::from_record(TutorialLesson::blank(), site)
    }

    pub fn from_record(record: TutorialLesson, site: SiteInfo) -> Self {
        Self {
            record,
            section: None,
            tutorial: None,
            site,
        }
    }

    /// Attaches the lesson's section and that section's tutorial, looked up
    /// from the given lists.
    pub fn resolve_parents(&mut self, sections: &[TutorialSection], tutorials: &[Tutorial]) {
        self.section = self
            .record
            .section_id
            .as_deref()
            .and_then(|id| sections.iter().find(|s| s.id.as_deref() == Some(id)))
            .cloned();
        self.tutorial = self
            .section
            .as_ref()
            .and_then(|s| s.tutorial_id.as_deref())
            .and_then(|id| tutorials.iter().find(|t| t.id.as_deref() == Some(id)))
            .cloned();
    }

    pub fn context(&self) -> LessonContext<'_> {
        LessonContext::new(&self.record, &self.site).with_parents(self.section.as_ref(), self.tutorial.as_ref())
    }

    pub fn seo_report(&self) -> SeoReport {
        seo::seo_report(&self.record.seo)
    }

    pub fn structured_data_json(&self) -> String {
        seo::structured_data_json(&self.context())
    }

    /// Fills empty SEO fields from title, excerpt and content.
    pub fn suggest_seo(&mut self) {
        let canonical = self
            .tutorial
            .as_ref()
            .map(|_| self.context().default_lesson_url());
        seo::suggest_missing(&mut self.record, canonical);
    }
}

impl EntityForm for LessonForm {
    fn resource(&self) -> &'static Resource {
        &LESSONS
    }

    fn title(&self) -> &str {
        &self.record.title
    }

    fn slug(&self) -> &str {
        &self.record.slug
    }

    fn set_slug(&mut self, slug: String) {
        self.record.slug = slug;
    }

    fn fields(&self) -> Vec<FormField> {
        let l = &self.record;
        let s = &l.seo;
        vec![
            FormField::line("title", "Title", &l.title),
            FormField::line("slug", "Slug", &l.slug),
            FormField::text("excerpt", "Excerpt", &l.excerpt),
            FormField::text("content", "Content", &l.content),
            FormField::line("section_id", "Section ID", l.section_id.clone().unwrap_or_default()),
            FormField::line("estimated_time", "Estimated Time", &l.estimated_time),
            FormField::choice("difficulty_level", "Difficulty", l.difficulty_level.as_str(), Difficulty::NAMES),
            FormField::signed("order_index", "Order", l.order_index),
            FormField::toggle("is_active", "Active", l.is_active),
            FormField::line("meta_title", "Meta Title", &s.meta_title),
            FormField::text("meta_description", "Meta Description", &s.meta_description),
            FormField::line("meta_keywords", "Meta Keywords", &s.meta_keywords),
            FormField::line("canonical_url", "Canonical URL", &s.canonical_url),
            FormField::line("og_title", "OG Title", &s.og_title),
            FormField::text("og_description", "OG Description", &s.og_description),
            FormField::line("og_image", "OG Image", &s.og_image),
            FormField::line("twitter_title", "Twitter Title", &s.twitter_title),
            FormField::text("twitter_description", "Twitter Description", &s.twitter_description),
            FormField::line("twitter_image", "Twitter Image", &s.twitter_image),
            FormField::number("reading_time", "Reading Time (min)", s.reading_time),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let l = &mut self.record;
        let target = match key {
            "title" => &mut l.title,
            "slug" => &mut l.slug,
            "excerpt" => &mut l.excerpt,
            "content" => &mut l.content,
            "estimated_time" => &mut l.estimated_time,
            "meta_title" => &mut l.seo.meta_title,
            "meta_description" => &mut l.seo.meta_description,
            "meta_keywords" => &mut l.seo.meta_keywords,
            "canonical_url" => &mut l.seo.canonical_url,
            "og_title" => &mut l.seo.og_title,
            "og_description" => &mut l.seo.og_description,
            "og_image" => &mut l.seo.og_image,
            "twitter_title" => &mut l.seo.twitter_title,
            "twitter_description" => &mut l.seo.twitter_description,
            "twitter_image" => &mut l.seo.twitter_image,
            "section_id" => {
                let id = value.trim();
                l.section_id = (!id.is_empty()).then(|| id.to_string());
                return Ok(());
            }
            "difficulty_level" => {
                l.difficulty_level = value
                    .parse()
                    .map_err(|e: anyhow::Error| FormError::invalid(key, e.to_string()))?;
                return Ok(());
            }
            "order_index" => {
                let trimmed = value.trim();
                l.order_index = if trimmed.is_empty() {
                    0
                } else {
                    trimmed
                        .parse()
                        .map_err(|_| FormError::invalid(key, format!("'{}' is not a number", trimmed)))?
                };
                return Ok(());
            }
            "is_active" => {
                l.is_active = parse_bool(value);
                return Ok(());
            }
            "reading_time" => {
                l.seo.reading_time = parse_optional_u32(key, value)?;
                return Ok(());
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *target = value.to_string();
        Ok(())
    }

    fn payload(&self) -> Result<Value, FormError> {
        serde_json::to_value(&self.record).map_err(|e| FormError::invalid("lesson", e.to_string()))
    }

    fn prepare(&mut self) {
        self.suggest_seo();
    }
}
