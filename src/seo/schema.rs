use serde_json::{json, Map, Value};

use super::text::{collapse_whitespace, headings, reading_time_minutes, strip_html, truncate_on_word, word_count};
use super::SiteInfo;
use crate::models::{Tutorial, TutorialLesson, TutorialSection};
use crate::utils::slug::generate_slug;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Everything the lesson JSON-LD is assembled from.
pub struct LessonContext<'a> {
    pub lesson: &'a TutorialLesson,
    pub section: Option<&'a TutorialSection>,
    pub tutorial: Option<&'a Tutorial>,
    pub site: &'a SiteInfo,
}

impl<'a> LessonContext<'a> {
    pub fn new(lesson: &'a TutorialLesson, site: &'a SiteInfo) -> Self {
        Self {
            lesson,
            section: None,
            tutorial: None,
            site,
        }
    }

    pub fn with_parents(mut self, section: Option<&'a TutorialSection>, tutorial: Option<&'a Tutorial>) -> Self {
        self.section = section;
        self.tutorial = tutorial;
        self
    }

    pub fn tutorial_url(&self) -> Option<String> {
        self.tutorial
            .filter(|t| !t.slug.is_empty())
            .map(|t| format!("{}/tutorials/{}", self.site.base_url, t.slug))
    }

    /// The canonical URL if one is set, otherwise the lesson's public path.
    pub fn lesson_url(&self) -> String {
        if !self.lesson.seo.canonical_url.trim().is_empty() {
            return self.lesson.seo.canonical_url.trim().to_string();
        }
        self.default_lesson_url()
    }

    pub fn default_lesson_url(&self) -> String {
        match self.tutorial_url() {
            Some(base) => format!("{}/{}", base, self.lesson.slug),
            None => format!("{}/tutorials/{}", self.site.base_url, self.lesson.slug),
        }
    }

    fn headline(&self) -> &str {
        first_non_empty(&[self.lesson.seo.meta_title.as_str(), self.lesson.title.as_str()])
    }

    fn description(&self) -> String {
        let text = first_non_empty(&[
            self.lesson.seo.meta_description.as_str(),
            self.lesson.excerpt.as_str(),
        ]);
        if !text.is_empty() {
            return text.to_string();
        }
        truncate_on_word(&collapse_whitespace(&strip_html(&self.lesson.content)), 160)
    }

    fn minutes(&self) -> u32 {
        self.lesson
            .seo
            .reading_time
            .filter(|m| *m > 0)
            .unwrap_or_else(|| reading_time_minutes(&self.lesson.content))
    }

    fn organization(&self) -> Value {
        json!({
            "@type": "Organization",
            "name": self.site.organization,
            "url": self.site.base_url,
        })
    }
}

fn first_non_empty<'s>(candidates: &[&'s str]) -> &'s str {
    candidates
        .iter()
        .copied()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

pub fn article(ctx: &LessonContext) -> Value {
    let lesson = ctx.lesson;
    let url = ctx.lesson_url();
    let mut article = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": ctx.headline(),
        "description": ctx.description(),
        "keywords": lesson.seo.meta_keywords,
        "author": ctx.organization(),
        "publisher": ctx.organization(),
        "mainEntityOfPage": { "@type": "WebPage", "@id": url },
        "url": url,
        "wordCount": word_count(&lesson.content),
        "timeRequired": format!("PT{}M", ctx.minutes()),
        "educationalLevel": lesson.difficulty_level.as_str(),
    });

    if let Value::Object(map) = &mut article {
        insert_if_present(map, "image", &lesson.seo.og_image);
        if let Some(section) = ctx.section {
            insert_if_present(map, "articleSection", &section.title);
        }
        if let Some(created) = lesson.created_at {
            map.insert("datePublished".into(), Value::String(created.to_rfc3339()));
        }
        if let Some(updated) = lesson.updated_at.or(lesson.created_at) {
            map.insert("dateModified".into(), Value::String(updated.to_rfc3339()));
        }
    }
    article
}

pub fn course(ctx: &LessonContext) -> Value {
    let (name, description) = match ctx.tutorial {
        Some(tutorial) if !tutorial.title.is_empty() => {
            let fallback = ctx.description();
            let description = first_non_empty(&[tutorial.description.as_str(), fallback.as_str()]);
            (tutorial.title.clone(), description.to_string())
        }
        _ => (ctx.headline().to_string(), ctx.description()),
    };
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Course",
        "name": name,
        "description": description,
        "provider": {
            "@type": "Organization",
            "name": ctx.site.organization,
            "sameAs": ctx.site.base_url,
        },
        "educationalLevel": ctx.lesson.difficulty_level.as_str(),
        "url": ctx.tutorial_url().unwrap_or_else(|| ctx.lesson_url()),
    })
}

pub fn breadcrumbs(ctx: &LessonContext) -> Value {
    let mut trail = vec![
        ("Home".to_string(), ctx.site.base_url.clone()),
        ("Tutorials".to_string(), format!("{}/tutorials", ctx.site.base_url)),
    ];
    if let (Some(tutorial), Some(url)) = (ctx.tutorial, ctx.tutorial_url()) {
        trail.push((tutorial.title.clone(), url));
    }
    trail.push((ctx.lesson.title.clone(), ctx.lesson_url()));

    let items: Vec<Value> = trail
        .into_iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// One step per `<h2>`/`<h3>` heading, or a single step for the whole lesson.
pub fn how_to(ctx: &LessonContext) -> Value {
    let url = ctx.lesson_url();
    let mut steps: Vec<Value> = headings(&ctx.lesson.content)
        .into_iter()
        .enumerate()
        .map(|(i, heading)| {
            json!({
                "@type": "HowToStep",
                "position": i + 1,
                "name": heading,
                "text": heading,
                "url": format!("{}#{}", url, generate_slug(&heading)),
            })
        })
        .collect();

    if steps.is_empty() {
        steps.push(json!({
            "@type": "HowToStep",
            "position": 1,
            "name": ctx.headline(),
            "text": ctx.description(),
            "url": url,
        }));
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "HowTo",
        "name": ctx.headline(),
        "description": ctx.description(),
        "totalTime": format!("PT{}M", ctx.minutes()),
        "step": steps,
    })
}

/// Article, Course, BreadcrumbList and HowTo, in that order.
pub fn structured_data(ctx: &LessonContext) -> Vec<Value> {
    vec![article(ctx), course(ctx), breadcrumbs(ctx), how_to(ctx)]
}

pub fn structured_data_json(ctx: &LessonContext) -> String {
    // A Vec<Value> always serializes
    serde_json::to_string_pretty(&structured_data(ctx)).unwrap_or_else(|_| "[]".to_string())
}

fn insert_if_present(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.trim().is_empty() {
        map.insert(key.to_string(), Value::String(value.trim().to_string()));
    }
}
