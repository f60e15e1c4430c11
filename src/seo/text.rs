use once_cell::sync::Lazy;
use regex::Regex;

pub const WORDS_PER_MINUTE: usize = 200;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h[23][^>]*>(.*?)</h[23]>").unwrap());

/// Removes HTML tags, leaving the text between them as-is.
pub fn strip_html(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Whitespace-separated token count of the plain text.
pub fn word_count(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

/// Reading time in whole minutes, never less than one for non-empty content.
pub fn reading_time_minutes(html: &str) -> u32 {
    let words = word_count(html);
    if words == 0 {
        return 0;
    }
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Cuts `text` to at most `max` characters, backing off to the last word
/// boundary when the cut lands inside a word.
pub fn truncate_on_word(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let next_is_space = text.chars().nth(max).map_or(true, char::is_whitespace);
    if next_is_space {
        return cut.trim_end().to_string();
    }
    match cut.rfind(char::is_whitespace) {
        Some(pos) => cut[..pos].trim_end().to_string(),
        None => cut,
    }
}

/// Plain-text `<h2>`/`<h3>` headings in document order.
pub fn headings(html: &str) -> Vec<String> {
    HEADING
        .captures_iter(html)
        .map(|cap| collapse_whitespace(&strip_html(&cap[1])))
        .filter(|heading| !heading.is_empty())
        .collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
