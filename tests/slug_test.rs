use devref::utils::slug::{generate_slug, is_valid_slug};

#[test]
fn test_generate_slug_basic() {
    assert_eq!(generate_slug("What is Linux?"), "what-is-linux");
    assert_eq!(generate_slug("Hello World"), "hello-world");
}

#[test]
fn test_generate_slug_collapses_whitespace_and_hyphens() {
    assert_eq!(generate_slug("  Hello   World  "), "hello-world");
    assert_eq!(generate_slug("C++ & Rust -- Guide!"), "c-rust-guide");
    assert_eq!(generate_slug("a - b"), "a-b");
}

#[test]
fn test_generate_slug_underscores_become_hyphens() {
    assert_eq!(generate_slug("snake_case title"), "snake-case-title");
}

#[test]
fn test_generate_slug_trims_hyphens() {
    assert_eq!(generate_slug("-leading and trailing-"), "leading-and-trailing");
    assert_eq!(generate_slug("---"), "");
    assert_eq!(generate_slug(""), "");
}

#[test]
fn test_generate_slug_keeps_digits() {
    assert_eq!(generate_slug("Top 10 Commands for 2024"), "top-10-commands-for-2024");
}

#[test]
fn test_generated_slugs_are_valid() {
    let titles = [
        "What is Linux?",
        "chmod 755: What Does It Mean?",
        "  --Spaces__and__underscores--  ",
        "Ünïcode Café Guide",
        "tabs\tand\nnewlines",
        "!!!",
    ];
    for title in titles {
        let slug = generate_slug(title);
        if !slug.is_empty() {
            assert!(is_valid_slug(&slug), "invalid slug {:?} for {:?}", slug, title);
        }
    }
}

#[test]
fn test_is_valid_slug() {
    assert!(is_valid_slug("what-is-linux"));
    assert!(!is_valid_slug(""));
    assert!(!is_valid_slug("-leading"));
    assert!(!is_valid_slug("trailing-"));
    assert!(!is_valid_slug("double--hyphen"));
    assert!(!is_valid_slug("Upper-Case"));
}
