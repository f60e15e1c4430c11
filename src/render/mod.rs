//! Public tool page rendering.
//!
//! The tool's slug picks a dedicated widget from [`widgets::TOOL_WIDGETS`];
//! unknown slugs fall back to dumping the tool's description HTML.

pub mod related;
pub mod widgets;

use anyhow::Result;
use serde_json::Value;
use tera::{Context, Tera};
use tracing::{debug, warn};

use crate::models::Tool;
use crate::seo::text::{collapse_whitespace, strip_html, truncate_on_word};
use crate::seo::SiteInfo;

pub use related::{card_style, related_cards, CardStyle, RelatedCard};
pub use widgets::{dispatch, ToolBranch, ToolWidget, WidgetView};

const TOOL_PAGE: &str = "tool_page.html";
const TOOL_PAGE_TEMPLATE: &str = include_str!("../../templates/tool_page.html.tera");

pub struct ToolPageRenderer {
    tera: Tera,
}

impl ToolPageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TOOL_PAGE, TOOL_PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, tool: &Tool, related: &[Tool], site: &SiteInfo) -> Result<String> {
        let branch = dispatch(&tool.slug);
        let widget = match branch {
            ToolBranch::Widget(widget) => {
                debug!(slug = %tool.slug, component = widget.component, "rendering dedicated tool widget");
                Some(WidgetView::from(widget))
            }
            ToolBranch::Fallback => {
                debug!(slug = %tool.slug, "no dedicated widget, rendering description");
                None
            }
        };

        let page_title = if tool.seo.seo_title.trim().is_empty() {
            tool.title.clone()
        } else {
            tool.seo.seo_title.clone()
        };
        let meta_description = if tool.seo.seo_description.trim().is_empty() {
            truncate_on_word(&collapse_whitespace(&strip_html(&tool.description)), 160)
        } else {
            tool.seo.seo_description.clone()
        };

        let mut ctx = Context::new();
        ctx.insert("tool", tool);
        ctx.insert("widget", &widget);
        ctx.insert("page_title", &page_title);
        ctx.insert("meta_description", &meta_description);
        ctx.insert("keywords", &tool.seo.seo_keywords);
        ctx.insert("canonical_url", &format!("{}/tools/{}", site.base_url, tool.slug));
        ctx.insert("base_url", &site.base_url);
        ctx.insert("organization", &site.organization);
        ctx.insert("schema_json", &embeddable_schema(&tool.seo.schema_json, &tool.slug));
        ctx.insert("related", &related_cards(related, &site.base_url));

        Ok(self.tera.render(TOOL_PAGE, &ctx)?)
    }
}

/// Compact JSON-LD safe to place inside a `<script>` element, or an empty
/// string when the stored schema is missing or not JSON.
fn embeddable_schema(schema_json: &str, slug: &str) -> String {
    if schema_json.trim().is_empty() {
        return String::new();
    }
    match serde_json::from_str::<Value>(schema_json) {
        Ok(value) => value.to_string().replace("</", "<\\/"),
        Err(err) => {
            warn!(%slug, error = %err, "ignoring invalid schema_json");
            String::new()
        }
    }
}
