use std::collections::HashSet;

use anyhow::Result;
use devref::models::Tool;
use devref::render::related::{icon_for, COLOR_SCHEMES, DEFAULT_ICON};
use devref::render::widgets::TOOL_WIDGETS;
use devref::render::{card_style, dispatch, related_cards, ToolBranch, ToolPageRenderer};

use crate::test_utils::test_site;


fn tool(title: &str, slug: &str) -> Tool {
    Tool {
        title: title.to_string(),
        slug: slug.to_string(),
        ..Tool::default()
    }
}

#[test]
fn test_dispatch_exact_and_alias_slugs() {
    match dispatch("chmod-calculator") {
        ToolBranch::Widget(widget) => assert_eq!(widget.component, "ChmodCalculator"),
        ToolBranch::Fallback => panic!("Expected widget"),
    }
    match dispatch("chmod-permissions-calculator") {
        ToolBranch::Widget(widget) => {
            assert_eq!(widget.component, "ChmodCalculator");
            assert_eq!(widget.slug(), "chmod-calculator");
            assert_eq!(widget.info_component(), "ChmodCalculatorInfo");
        }
        ToolBranch::Fallback => panic!("Expected widget"),
    }
    assert_eq!(dispatch("epoch-converter"), dispatch("unix-timestamp-converter"));
}

#[test]
fn test_dispatch_unknown_slugs_fall_back() {
    assert_eq!(dispatch("not-a-real-tool"), ToolBranch::Fallback);
    assert_eq!(dispatch(""), ToolBranch::Fallback);
    assert_eq!(dispatch("Chmod-Calculator"), ToolBranch::Fallback);
}

#[test]
fn test_every_slug_selects_exactly_one_widget() {
    let mut seen = HashSet::new();
    for widget in TOOL_WIDGETS {
        for slug in widget.slugs {
            assert!(seen.insert(*slug), "slug {} is mapped twice", slug);
            match dispatch(slug) {
                ToolBranch::Widget(found) => assert_eq!(found.component, widget.component),
                ToolBranch::Fallback => panic!("{} fell back", slug),
            }
        }
    }
    assert!(TOOL_WIDGETS.len() >= 35);
}

#[test]
fn test_icon_rules() {
    assert_eq!(icon_for("Chmod Calculator"), "calculator");
    assert_eq!(icon_for("UUID Generator"), "sparkles");
    assert_eq!(icon_for("Hash Generator"), "sparkles");
    assert_eq!(icon_for("Color Converter"), "arrows-right-left");
    assert_eq!(icon_for("JSON Formatter"), "code-bracket");
    assert_eq!(icon_for("JWT Decoder"), "lock-closed");
    assert_eq!(icon_for("DNS Lookup"), "magnifying-glass");
    assert_eq!(icon_for("Port Reference"), DEFAULT_ICON);
}

#[test]
fn test_card_colors_rotate_every_six() {
    for index in 0..COLOR_SCHEMES.len() {
        let first = card_style("Tool", index);
        let again = card_style("Tool", index + COLOR_SCHEMES.len());
        assert_eq!(first, again);
    }
    assert_ne!(card_style("Tool", 0).gradient, card_style("Tool", 1).gradient);
}

#[test]
fn test_related_cards() {
    let mut uuid = tool("UUID Generator", "uuid-generator");
    uuid.description = "<p>Create   random <b>UUIDs</b></p>".to_string();
    let cards = related_cards(&[uuid, tool("DNS Lookup", "dns-lookup")], "https://devref.example");

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].href, "https://devref.example/tools/uuid-generator");
    assert_eq!(cards[0].summary, "Create random UUIDs");
    assert_eq!(cards[0].style.icon, "sparkles");
    assert_eq!(cards[1].style.icon, "magnifying-glass");
    assert_eq!(cards[1].style.accent, COLOR_SCHEMES[1].1);
}

#[test]
fn test_render_widget_page() -> Result<()> {
    let renderer = ToolPageRenderer::new()?;
    let mut chmod = tool("Chmod Calculator", "chmod-permissions-calculator");
    chmod.license = "MIT".to_string();
    let html = renderer.render(&chmod, &[], &test_site())?;

    assert!(html.contains(r#"data-component="ChmodCalculator""#));
    assert!(html.contains(r#"data-component="ChmodCalculatorInfo""#));
    assert!(html.contains("About Chmod Calculator"));
    assert!(html.contains("License: MIT"));
    assert!(!html.contains("tool-generic"));
    assert!(!html.contains("Related Tools"));
    Ok(())
}

#[test]
fn test_render_fallback_dumps_description() -> Result<()> {
    let renderer = ToolPageRenderer::new()?;
    let mut custom = tool("Custom Tool", "custom-tool");
    custom.description = "<p>Custom <b>tool</b></p>".to_string();
    let html = renderer.render(&custom, &[], &test_site())?;

    assert!(html.contains("tool-generic"));
    assert!(html.contains("<p>Custom <b>tool</b></p>"));
    assert!(html.contains(r#"<meta name="description" content="Custom tool">"#));
    assert!(!html.contains("tool-root"));
    Ok(())
}

#[test]
fn test_render_escapes_text() -> Result<()> {
    let renderer = ToolPageRenderer::new()?;
    let html = renderer.render(&tool("Find & Replace", "find-replace"), &[], &test_site())?;
    assert!(html.contains("<h1>Find &amp; Replace</h1>"));
    Ok(())
}

#[test]
fn test_render_related_grid() -> Result<()> {
    let renderer = ToolPageRenderer::new()?;
    let related: Vec<Tool> = (0..7)
        .map(|i| tool(&format!("Tool {}", i), &format!("tool-{}", i)))
        .collect();
    let html = renderer.render(&tool("Word Counter", "word-counter"), &related, &test_site())?;

    assert!(html.contains("Related Tools"));
    assert_eq!(html.matches("card accent-blue").count(), 2);
    assert_eq!(html.matches(r#"data-icon="wrench-screwdriver""#).count(), 7);
    Ok(())
}

#[test]
fn test_render_schema_json() -> Result<()> {
    let renderer = ToolPageRenderer::new()?;
    let mut with_schema = tool("Regex Tester", "regex-tester");
    with_schema.seo.schema_json = r#"{"@type": "WebApplication", "name": "</script>"}"#.to_string();
    let html = renderer.render(&with_schema, &[], &test_site())?;
    assert!(html.contains("application/ld+json"));
    assert!(html.contains(r#"<\/script>"#));
    assert_eq!(html.matches("</script>").count(), 1);

    with_schema.seo.schema_json = "{broken".to_string();
    let html = renderer.render(&with_schema, &[], &test_site())?;
    assert!(!html.contains("application/ld+json"));
    Ok(())
}
