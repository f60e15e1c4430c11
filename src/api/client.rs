use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::routes::{EntityId, Resource, COMMANDS, LESSONS, PUBLIC_TOOLS, SECTIONS, TOOLS, TUTORIALS};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::{error_message, ApiError};
use crate::models::{AutoSeoRequest, AutoSeoResponse, Command, Tool, Tutorial, TutorialLesson, TutorialSection};

pub struct ApiClient {
    transport: Box<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    fn execute(&self, request: ApiRequest, fallback: &str) -> Result<Value, ApiError> {
        let response = self.transport.send(&request).map_err(|err| {
            warn!(method = %request.method, path = %request.path, error = %err, "request failed");
            err
        })?;
        check_status(&request, response, fallback)
    }

    fn fetch(&self, request: ApiRequest, what: &str) -> Result<Value, ApiError> {
        match self.execute(request, &format!("Failed to load {}", what)) {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound {
                what: capitalize(what),
            }),
            other => other,
        }
    }

    fn fetch_record<T: DeserializeOwned>(&self, resource: &Resource, id: &str) -> Result<T, ApiError> {
        let value = self.fetch(ApiRequest::new(Method::GET, resource.member(id)), resource.singular)?;
        decode(unwrap_record(value, resource.singular))
    }

    fn fetch_list<T: DeserializeOwned>(&self, resource: &Resource, request: ApiRequest) -> Result<Vec<T>, ApiError> {
        let value = self.fetch(request, resource.plural)?;
        decode(unwrap_collection(value, resource.plural))
    }

    /// Creates or updates a record depending on `id`, returning the body the
    /// server sent back.
    pub fn save<T: Serialize>(&self, resource: &Resource, id: &EntityId, record: &T) -> Result<Value, ApiError> {
        let (method, path) = resource.submit_target(id);
        let body = serde_json::to_value(record).map_err(|e| ApiError::Decode(e.to_string()))?;
        let fallback = format!("Failed to save {}", resource.singular);
        let value = self.execute(ApiRequest::new(method, path).json(body), &fallback)?;
        Ok(unwrap_record(value, resource.singular))
    }

    pub fn auto_generate_seo(&self, resource: &Resource, request: &AutoSeoRequest) -> Result<AutoSeoResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.execute(
            ApiRequest::new(Method::POST, resource.auto_seo_path()).json(body),
            "Failed to generate SEO data",
        )?;
        decode(unwrap_record(value, "seo"))
    }

    pub fn list_commands(&self) -> Result<Vec<Command>, ApiError> {
        self.fetch_list(&COMMANDS, ApiRequest::new(Method::GET, COMMANDS.collection))
    }

    pub fn get_command(&self, id: &str) -> Result<Command, ApiError> {
        self.fetch_record(&COMMANDS, id)
    }

    pub fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        self.fetch_list(&TOOLS, ApiRequest::new(Method::GET, TOOLS.collection))
    }

    pub fn get_tool(&self, id: &str) -> Result<Tool, ApiError> {
        self.fetch_record(&TOOLS, id)
    }

    pub fn set_tool_published(&self, id: &str, published: bool) -> Result<Value, ApiError> {
        let request = ApiRequest::new(Method::PATCH, TOOLS.member(id)).json(json!({ "published": published }));
        self.execute(request, "Failed to update tool")
    }

    pub fn list_tutorials(&self) -> Result<Vec<Tutorial>, ApiError> {
        self.fetch_list(&TUTORIALS, ApiRequest::new(Method::GET, TUTORIALS.collection))
    }

    pub fn list_sections(&self, tutorial_id: Option<&str>) -> Result<Vec<TutorialSection>, ApiError> {
        let mut request = ApiRequest::new(Method::GET, SECTIONS.collection);
        if let Some(id) = tutorial_id {
            request = request.query("tutorial_id", id);
        }
        self.fetch_list(&SECTIONS, request)
    }

    pub fn list_lessons(&self, section_id: Option<&str>) -> Result<Vec<TutorialLesson>, ApiError> {
        let mut request = ApiRequest::new(Method::GET, LESSONS.collection);
        if let Some(id) = section_id {
            request = request.query("section_id", id);
        }
        self.fetch_list(&LESSONS, request)
    }

    pub fn get_lesson(&self, id: &str) -> Result<TutorialLesson, ApiError> {
        self.fetch_record(&LESSONS, id)
    }

    /// Public tool page lookup by slug.
    pub fn public_tool(&self, slug: &str) -> Result<Tool, ApiError> {
        let value = self.fetch(
            ApiRequest::new(Method::GET, format!("{}/{}", PUBLIC_TOOLS, slug)),
            "tool",
        )?;
        decode(unwrap_record(value, "tool"))
    }

    pub fn related_tools(&self, limit: usize, exclude: &str) -> Result<Vec<Tool>, ApiError> {
        let request = ApiRequest::new(Method::GET, PUBLIC_TOOLS)
            .query("limit", limit)
            .query("exclude", exclude);
        self.fetch_list(&TOOLS, request)
    }
}

fn check_status(request: &ApiRequest, response: ApiResponse, fallback: &str) -> Result<Value, ApiError> {
    debug!(method = %request.method, path = %request.path, status = response.status, "api call");
    if !response.is_success() {
        let message = error_message(&response.body, fallback);
        warn!(status = response.status, %message, "api returned an error");
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Single records come back bare or wrapped in `data` / `{singular}`.
pub fn unwrap_record(value: Value, singular: &str) -> Value {
    match value {
        Value::Object(mut map) => {
            for key in ["data", singular] {
                if map.get(key).map_or(false, Value::is_object) {
                    return map.remove(key).unwrap_or(Value::Null);
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Collections come back as an array or wrapped in `data` / `{plural}`.
pub fn unwrap_collection(value: Value, plural: &str) -> Value {
    match value {
        Value::Array(_) => value,
        Value::Object(mut map) => ["data", plural]
            .iter()
            .find_map(|key| map.remove(*key).filter(Value::is_array))
            .unwrap_or_else(|| Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
