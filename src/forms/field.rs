#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Line,
    /// Multi-line rich text, carried as HTML.
    Text,
    Toggle,
    /// Non-negative whole number.
    Number,
    /// Whole number that may start with `-`.
    Signed,
    Choice(Vec<String>),
}

/// One editable value on an entity form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn line(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
            kind: FieldKind::Line,
        }
    }

    pub fn text(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn toggle(key: &'static str, label: &'static str, value: bool) -> Self {
        Self {
            key,
            label,
            value: value.to_string(),
            kind: FieldKind::Toggle,
        }
    }

    pub fn number(key: &'static str, label: &'static str, value: Option<impl ToString>) -> Self {
        Self {
            key,
            label,
            value: value.map(|v| v.to_string()).unwrap_or_default(),
            kind: FieldKind::Number,
        }
    }

    pub fn signed(key: &'static str, label: &'static str, value: i64) -> Self {
        Self {
            key,
            label,
            value: value.to_string(),
            kind: FieldKind::Signed,
        }
    }

    pub fn choice(key: &'static str, label: &'static str, value: impl Into<String>, options: &[&str]) -> Self {
        Self {
            key,
            label,
            value: value.into(),
            kind: FieldKind::Choice(options.iter().map(|o| o.to_string()).collect()),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Text
    }
}

pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
