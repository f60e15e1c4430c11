//! Create/edit form state for commands, tools and lessons.
//!
//! A form owns the record being edited. The terminal editor reads
//! [`EntityForm::fields`] and writes back through [`EntityForm::set_field`];
//! [`submit`] validates and sends the record to the right endpoint.

pub mod command;
pub mod field;
pub mod lesson;
pub mod tool;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tracing::info;

use crate::api::{ApiClient, EntityId, Resource};
use crate::error::FormError;
use crate::models::{AutoSeoRequest, AutoSeoResponse};
use crate::utils::serde_helpers::value_to_string;
use crate::utils::slug::generate_slug;

pub use command::CommandForm;
pub use field::{FieldKind, FormField};
pub use lesson::LessonForm;
pub use tool::ToolForm;

/// Keys that are owned by the server and never set from a form.
const SERVER_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

pub trait EntityForm {
    fn resource(&self) -> &'static Resource;

    fn title(&self) -> &str;

    fn slug(&self) -> &str;

    fn set_slug(&mut self, slug: String);

    fn fields(&self) -> Vec<FormField>;

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError>;

    /// JSON body sent on submit.
    fn payload(&self) -> Result<Value, FormError>;

    /// Request body for Auto Generate SEO, if the entity supports it.
    fn auto_seo_request(&self) -> Option<AutoSeoRequest> {
        None
    }

    fn apply_seo(&mut self, _generated: AutoSeoResponse) {}

    /// Runs right before validation on submit.
    fn prepare(&mut self) {}

    fn validate(&self) -> Result<(), FormError> {
        if self.title().trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.slug().trim().is_empty() {
            return Err(FormError::MissingSlug);
        }
        Ok(())
    }

    /// Title blur: fills the slug only when it is still empty.
    fn derive_slug(&mut self) {
        if self.slug().trim().is_empty() {
            let slug = generate_slug(self.title());
            self.set_slug(slug);
        }
    }

    /// Explicit "generate slug" action: always overwrites.
    fn regenerate_slug(&mut self) {
        let slug = generate_slug(self.title());
        self.set_slug(slug);
    }

    /// Writes every field, even after one is rejected, and returns the
    /// first rejection. A rejected field keeps its previous value.
    fn apply_fields(&mut self, fields: &[FormField]) -> Result<(), FormError> {
        let mut first_error = None;
        for field in fields {
            if let Err(err) = self.set_field(field.key, &field.value) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Seeds the form from a JSON object. Server-owned and unknown keys are
    /// skipped, invalid values are errors.
    fn merge_json(&mut self, value: &Value) -> Result<(), FormError> {
        let object = value
            .as_object()
            .ok_or_else(|| FormError::invalid("input", "expected a JSON object"))?;
        for (key, value) in object {
            if SERVER_FIELDS.contains(&key.as_str()) {
                continue;
            }
            let text = value_to_string(value).unwrap_or_default();
            match self.set_field(key, &text) {
                Ok(()) | Err(FormError::UnknownField(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

/// Validates the form and issues POST (for `new`) or PUT/PATCH (for an id).
pub fn submit<F: EntityForm + ?Sized>(client: &ApiClient, form: &mut F, id: &EntityId) -> Result<Value> {
    form.prepare();
    form.validate()?;
    let payload = form.payload()?;
    let resource = form.resource();
    let saved = client.save(resource, id, &payload)?;
    info!(resource = resource.singular, id = %id, slug = form.slug(), "record saved");
    Ok(saved)
}

/// Calls the remote SEO generator and overwrites the form's SEO fields.
pub fn auto_generate_seo<F: EntityForm + ?Sized>(client: &ApiClient, form: &mut F) -> Result<()> {
    let request = form
        .auto_seo_request()
        .ok_or_else(|| anyhow!("Auto Generate SEO is not available for {}s", form.resource().singular))?;
    if request.title.trim().is_empty() {
        return Err(anyhow!("Please enter a title before generating SEO data"));
    }
    let generated = client.auto_generate_seo(form.resource(), &request)?;
    form.apply_seo(generated);
    info!(resource = form.resource().singular, "SEO fields generated");
    Ok(())
}

pub(crate) fn parse_optional_u32(field: &str, value: &str) -> Result<Option<u32>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| FormError::invalid(field, format!("'{}' is not a whole number", value)))
}

pub(crate) fn check_schema_json(schema_json: &str) -> Result<(), FormError> {
    if schema_json.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<Value>(schema_json)
        .map(|_| ())
        .map_err(|e| FormError::invalid("schema_json", e.to_string()))
}
