use serde_json::Value;

use super::field::{parse_bool, FormField};
use super::{check_schema_json, parse_optional_u32, EntityForm};
use crate::api::routes::{Resource, TOOLS};
use crate::error::FormError;
use crate::models::tool::{CATEGORIES, PLATFORMS, POPULARITY_RANGE};
use crate::models::{AutoSeoRequest, AutoSeoResponse, Tool};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolForm {
    pub record: Tool,
}

impl ToolForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: Tool) -> Self {
        Self { record }
    }
}

impl EntityForm for ToolForm {
    fn resource(&self) -> &'static Resource {
        &TOOLS
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
        let t = &self.record;
        vec![
            FormField::line("title", "Title", &t.title),
            FormField::line("slug", "Slug", &t.slug),
            FormField::text("description", "Description", &t.description),
            FormField::choice("category", "Category", &t.category, CATEGORIES),
            FormField::choice("platform", "Platform", &t.platform, PLATFORMS),
            FormField::line("license", "License", &t.license),
            FormField::line("official_url", "Official URL", &t.official_url),
            FormField::number("popularity", "Popularity (1-10)", t.popularity),
            FormField::line("icon", "Icon", &t.icon),
            FormField::line("file_path", "File Path", &t.file_path),
            FormField::toggle("published", "Published", t.published),
            FormField::line("seo_title", "SEO Title", &t.seo.seo_title),
            FormField::text("seo_description", "SEO Description", &t.seo.seo_description),
            FormField::line("seo_keywords", "SEO Keywords", &t.seo.seo_keywords),
            FormField::text("schema_json", "Schema JSON", &t.seo.schema_json),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let t = &mut self.record;
        let target = match key {
            "title" => &mut t.title,
            "slug" => &mut t.slug,
            "description" => &mut t.description,
            "category" => &mut t.category,
            "platform" => &mut t.platform,
            "license" => &mut t.license,
            "official_url" => &mut t.official_url,
            "icon" => &mut t.icon,
            "file_path" => &mut t.file_path,
            "seo_title" => &mut t.seo.seo_title,
            "seo_description" => &mut t.seo.seo_description,
            "seo_keywords" => &mut t.seo.seo_keywords,
            "schema_json" => &mut t.seo.schema_json,
            "published" => {
                t.published = parse_bool(value);
                return Ok(());
            }
            "popularity" => {
                let popularity = parse_optional_u32(key, value)?;
                if let Some(p) = popularity {
                    if !POPULARITY_RANGE.contains(&p) {
                        return Err(FormError::invalid(key, "must be between 1 and 10"));
                    }
                }
                t.popularity = popularity;
                return Ok(());
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *target = value.to_string();
        Ok(())
    }

    fn payload(&self) -> Result<Value, FormError> {
        check_schema_json(&self.record.seo.schema_json)?;
        serde_json::to_value(&self.record).map_err(|e| FormError::invalid("tool", e.to_string()))
    }

    fn auto_seo_request(&self) -> Option<AutoSeoRequest> {
        Some(AutoSeoRequest {
            title: self.record.title.clone(),
            description: self.record.description.clone(),
            category: self.record.category.clone(),
            platform: self.record.platform.clone(),
            kind: TOOLS.singular.to_string(),
        })
    }

    fn apply_seo(&mut self, generated: AutoSeoResponse) {
        self.record.seo.apply(generated);
    }
}
