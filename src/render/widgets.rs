use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A dedicated tool component and the slugs that select it.
#[derive(Debug, PartialEq, Eq)]
pub struct ToolWidget {
    /// Canonical slug first, aliases after.
    pub slugs: &'static [&'static str],
    pub component: &'static str,
    pub tagline: &'static str,
}

impl ToolWidget {
    pub fn slug(&self) -> &'static str {
        self.slugs[0]
    }

    pub fn info_component(&self) -> String {
        format!("{}Info", self.component)
    }
}

macro_rules! widget {
    ([$($slug:literal),+], $component:literal, $tagline:literal) => {
        ToolWidget {
            slugs: &[$($slug),+],
            component: $component,
            tagline: $tagline,
        }
    };
}

pub static TOOL_WIDGETS: &[ToolWidget] = &[
    widget!(["chmod-calculator", "chmod-permissions-calculator"], "ChmodCalculator", "Convert between symbolic and octal Unix file permissions."),
    widget!(["cron-expression-generator", "cron-generator"], "CronGenerator", "Build and explain cron schedules field by field."),
    widget!(["password-generator"], "PasswordGenerator", "Generate strong random passwords with configurable character sets."),
    widget!(["uuid-generator"], "UuidGenerator", "Create random v4 UUIDs in bulk."),
    widget!(["base64-encoder-decoder", "base64-encoder"], "Base64Tool", "Encode text to Base64 and decode it back."),
    widget!(["url-encoder-decoder"], "UrlEncoder", "Percent-encode and decode URL components."),
    widget!(["json-formatter", "json-validator"], "JsonFormatter", "Pretty-print, minify and validate JSON documents."),
    widget!(["yaml-to-json-converter"], "YamlJsonConverter", "Convert YAML documents to JSON and back."),
    widget!(["regex-tester"], "RegexTester", "Test regular expressions against sample text with live matches."),
    widget!(["jwt-decoder"], "JwtDecoder", "Inspect the header and payload of a JSON Web Token."),
    widget!(["hash-generator"], "HashGenerator", "Compute MD5, SHA-1 and SHA-256 digests of text."),
    widget!(["lorem-ipsum-generator"], "LoremIpsumGenerator", "Produce placeholder paragraphs, sentences or words."),
    widget!(["color-converter"], "ColorConverter", "Convert colors between HEX, RGB and HSL."),
    widget!(["unix-timestamp-converter", "epoch-converter"], "TimestampConverter", "Convert Unix timestamps to readable dates and back."),
    widget!(["subnet-calculator", "cidr-calculator"], "SubnetCalculator", "Work out network ranges, masks and host counts from CIDR notation."),
    widget!(["ip-address-lookup"], "IpLookup", "Look up location and network details for an IP address."),
    widget!(["dns-lookup"], "DnsLookup", "Query A, AAAA, MX, TXT and other DNS records."),
    widget!(["http-status-codes"], "HttpStatusReference", "Browse HTTP status codes and what they mean."),
    widget!(["html-entity-encoder"], "HtmlEntityEncoder", "Escape and unescape HTML entities."),
    widget!(["markdown-previewer"], "MarkdownPreviewer", "Write Markdown and preview the rendered HTML."),
    widget!(["diff-checker"], "DiffChecker", "Compare two texts and highlight the differences."),
    widget!(["case-converter"], "CaseConverter", "Switch text between camelCase, snake_case, kebab-case and more."),
    widget!(["word-counter"], "WordCounter", "Count words, characters, sentences and reading time."),
    widget!(["qr-code-generator"], "QrCodeGenerator", "Turn text or URLs into downloadable QR codes."),
    widget!(["ssh-key-generator"], "SshKeyGenerator", "Generate the ssh-keygen command for a new key pair."),
    widget!(["htaccess-generator"], "HtaccessGenerator", "Assemble common Apache .htaccess rules."),
    widget!(["byte-converter"], "ByteConverter", "Convert between bytes, KB, MB, GB and their binary variants."),
    widget!(["number-base-converter"], "NumberBaseConverter", "Convert numbers between binary, octal, decimal and hex."),
    widget!(["sql-formatter"], "SqlFormatter", "Format SQL queries for readability."),
    widget!(["css-minifier"], "CssMinifier", "Minify stylesheets by stripping whitespace and comments."),
    widget!(["js-minifier"], "JsMinifier", "Compress JavaScript source for production."),
    widget!(["xml-formatter"], "XmlFormatter", "Indent and validate XML documents."),
    widget!(["user-agent-parser"], "UserAgentParser", "Break a user agent string into browser, OS and device."),
    widget!(["port-reference"], "PortReference", "Look up well-known TCP and UDP port numbers."),
    widget!(["tar-command-generator"], "TarCommandGenerator", "Build tar commands for creating and extracting archives."),
    widget!(["find-command-generator"], "FindCommandGenerator", "Compose find commands from search criteria."),
];

static WIDGET_INDEX: Lazy<HashMap<&'static str, &'static ToolWidget>> = Lazy::new(|| {
    TOOL_WIDGETS
        .iter()
        .flat_map(|widget| widget.slugs.iter().map(move |slug| (*slug, widget)))
        .collect()
});

/// What the tool page renders for a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBranch {
    Widget(&'static ToolWidget),
    /// Unknown slug: the description HTML is emitted as-is.
    Fallback,
}

pub fn dispatch(slug: &str) -> ToolBranch {
    WIDGET_INDEX
        .get(slug)
        .map_or(ToolBranch::Fallback, |widget| ToolBranch::Widget(*widget))
}

/// Template-facing view of a matched widget.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub slug: &'static str,
    pub component: &'static str,
    pub info_component: String,
    pub tagline: &'static str,
}

impl From<&ToolWidget> for WidgetView {
    fn from(widget: &ToolWidget) -> Self {
        Self {
            slug: widget.slug(),
            component: widget.component,
            info_component: widget.info_component(),
            tagline: widget.tagline,
        }
    }
}
