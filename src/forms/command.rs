use serde_json::Value;

use super::field::{parse_bool, FormField};
use super::{check_schema_json, EntityForm};
use crate::api::routes::{Resource, COMMANDS};
use crate::error::FormError;
use crate::models::command::{CATEGORIES, PLATFORMS};
use crate::models::{AutoSeoRequest, AutoSeoResponse, Command};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandForm {
    pub record: Command,
}

impl CommandForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: Command) -> Self {
        Self { record }
    }
}

impl EntityForm for CommandForm {
    fn resource(&self) -> &'static Resource {
        &COMMANDS
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
        let c = &self.record;
        vec![
            FormField::line("title", "Title", &c.title),
            FormField::line("slug", "Slug", &c.slug),
            FormField::text("description", "Description", &c.description),
            FormField::line("syntax", "Syntax", &c.syntax),
            FormField::text("examples", "Examples", &c.examples),
            FormField::text("options", "Options", &c.options),
            FormField::text("notes", "Notes", &c.notes),
            FormField::choice("category", "Category", &c.category, CATEGORIES),
            FormField::choice("platform", "Platform", &c.platform, PLATFORMS),
            FormField::line("icon", "Icon", &c.icon),
            FormField::line("file_path", "File Path", &c.file_path),
            FormField::toggle("published", "Published", c.published),
            FormField::line("seo_title", "SEO Title", &c.seo.seo_title),
            FormField::text("seo_description", "SEO Description", &c.seo.seo_description),
            FormField::line("seo_keywords", "SEO Keywords", &c.seo.seo_keywords),
            FormField::text("schema_json", "Schema JSON", &c.seo.schema_json),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let c = &mut self.record;
        let target = match key {
            "title" => &mut c.title,
            "slug" => &mut c.slug,
            "description" => &mut c.description,
            "syntax" => &mut c.syntax,
            "examples" => &mut c.examples,
            "options" => &mut c.options,
            "notes" => &mut c.notes,
            "category" => &mut c.category,
            "platform" => &mut c.platform,
            "icon" => &mut c.icon,
            "file_path" => &mut c.file_path,
            "seo_title" => &mut c.seo.seo_title,
            "seo_description" => &mut c.seo.seo_description,
            "seo_keywords" => &mut c.seo.seo_keywords,
            "schema_json" => &mut c.seo.schema_json,
            "published" => {
                c.published = parse_bool(value);
                return Ok(());
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *target = value.to_string();
        Ok(())
    }

    fn payload(&self) -> Result<Value, FormError> {
        check_schema_json(&self.record.seo.schema_json)?;
        serde_json::to_value(&self.record).map_err(|e| FormError::invalid("command", e.to_string()))
    }

    fn auto_seo_request(&self) -> Option<AutoSeoRequest> {
        Some(AutoSeoRequest {
            title: self.record.title.clone(),
            description: self.record.description.clone(),
            category: self.record.category.clone(),
            platform: self.record.platform.clone(),
            kind: COMMANDS.singular.to_string(),
        })
    }

    fn apply_seo(&mut self, generated: AutoSeoResponse) {
        self.record.seo.apply(generated);
    }
}
