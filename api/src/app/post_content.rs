//! Derived blog post fields
//!
//! Everything here is recomputed from the submitted form on every save:
//! excerpt, read time and cover fallback from the content, the slug from the
//! title, and list fields from comma separated text.

use std::sync::OnceLock;

use regex::Regex;

/// Characters kept in an excerpt before the ellipsis
pub const EXCERPT_CHARS: usize = 150;
/// Reading speed used for the read time estimate
pub const WORDS_PER_MINUTE: usize = 200;
/// Tags kept from the tag field
pub const MAX_TAGS: usize = 5;

fn markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid markup regex"))
}

fn img_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("valid img regex"))
}

fn json_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""src"\s*:\s*"([^"]+)""#).expect("valid src regex"))
}

fn slug_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn hyphens_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid hyphen regex"))
}

/// Remove every `<...>` tag, keeping the text between them
pub fn strip_markup(content: &str) -> String {
    markup_re().replace_all(content, "").into_owned()
}

/// First 150 characters of the text content followed by `...`
pub fn excerpt(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let text: String = strip_markup(content).chars().take(EXCERPT_CHARS).collect();
    format!("{}...", text)
}

pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

/// Minutes to read, never less than one
pub fn read_time_minutes(content: &str) -> usize {
    word_count(content).div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn read_time(content: &str) -> String {
    format!("{} min read", read_time_minutes(content))
}

/// Best-effort cover image lookup: the first `<img src>`, then the first
/// JSON `"src"` value left behind by the editor.
pub fn extract_cover_image(content: &str) -> Option<String> {
    img_src_re()
        .captures(content)
        .or_else(|| json_src_re().captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// URL key for a title: lowercase ASCII word characters joined by single hyphens
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = slug_strip_re().replace_all(&lowered, "");
    let hyphenated = whitespace_re().replace_all(&stripped, "-");
    let collapsed = hyphens_re().replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Split free text on `sep`, trimming items and dropping empty ones
pub fn split_list(input: &str, sep: char) -> Vec<String> {
    input
        .split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma separated tags, capped at five. Duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags = split_list(input, ',');
    tags.truncate(MAX_TAGS);
    tags
}

/// Fields computed from the content on every save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub excerpt: String,
    pub read_time: String,
    /// Explicit cover, else the first image in the content, else empty
    pub image_url: String,
}

impl DerivedFields {
    pub fn compute(content: Option<&str>, explicit_cover: Option<&str>) -> Self {
        let content = content.unwrap_or_default();
        let image_url = explicit_cover
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| extract_cover_image(content))
            .unwrap_or_default();

        Self {
            excerpt: excerpt(content),
            read_time: read_time(content),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn slug_from_title_with_punctuation() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn slug_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Rust   --  in   Production "), "rust-in-production");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn slug_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Ünïcode"), "caf-ncode");
    }

    #[test]
    fn slug_is_idempotent() {
        for title in [
            "Hello, World! 2024",
            "  Leading and trailing  ",
            "snake_case stays",
            "-- dashes everywhere --",
            "Tips & Tricks: 10 ways",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "{}", title);
            assert!(!once.contains(char::is_whitespace));
            assert!(once
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn read_time_for_410_words_is_three_minutes() {
        let content = format!("<p>{}</p>", words(410));
        assert_eq!(read_time(&content), "3 min read");
    }

    #[test]
    fn read_time_rounds_up_with_minimum_of_one() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes(&words(1)), 1);
        assert_eq!(read_time_minutes(&words(200)), 1);
        assert_eq!(read_time_minutes(&words(201)), 2);
        assert_eq!(read_time_minutes(&words(400)), 2);
    }

    #[test]
    fn markup_does_not_count_as_words() {
        let content = "<p>one</p>\n<img src=\"a.png\"/>\n<p>two three</p>";
        assert_eq!(word_count(content), 3);
        // Adjacent tags glue their text together
        assert_eq!(word_count("<p>one</p><p>two</p>"), 1);
    }

    #[test]
    fn excerpt_truncates_to_150_chars_and_appends_ellipsis() {
        let long = format!("<h1>Title</h1><p>{}</p>", "a".repeat(300));
        let result = excerpt(&long);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), EXCERPT_CHARS + 3);
        assert!(result.starts_with("Titleaaa"));
    }

    #[test]
    fn excerpt_of_short_content_still_gets_ellipsis() {
        assert_eq!(excerpt("<p>Short</p>"), "Short...");
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(200);
        let result = excerpt(&content);
        assert_eq!(result.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn cover_prefers_html_img_tag() {
        let content = r#"{"src": "json.png"} <img class="x" src="https://cdn/a.png" alt="">"#;
        assert_eq!(
            extract_cover_image(content).as_deref(),
            Some("https://cdn/a.png")
        );
    }

    #[test]
    fn cover_falls_back_to_json_src() {
        let content = r#"{"type":"image","attrs":{"src" : "https://cdn/b.jpg"}}"#;
        assert_eq!(
            extract_cover_image(content).as_deref(),
            Some("https://cdn/b.jpg")
        );
    }

    #[test]
    fn cover_missing_is_none() {
        assert_eq!(extract_cover_image("<p>No images here</p>"), None);
    }

    #[test]
    fn derived_fields_keep_explicit_cover() {
        let fields = DerivedFields::compute(
            Some(r#"<img src="inline.png">"#),
            Some("https://cdn/cover.png"),
        );
        assert_eq!(fields.image_url, "https://cdn/cover.png");
    }

    #[test]
    fn derived_fields_fall_back_to_content_image() {
        let fields = DerivedFields::compute(Some(r#"<p>x</p><img src='inline.png'>"#), Some("  "));
        assert_eq!(fields.image_url, "inline.png");
        assert_eq!(fields.read_time, "1 min read");
    }

    #[test]
    fn derived_fields_without_content() {
        let fields = DerivedFields::compute(None, None);
        assert_eq!(fields.excerpt, "");
        assert_eq!(fields.read_time, "1 min read");
        assert_eq!(fields.image_url, "");
    }

    #[test]
    fn tags_are_trimmed_and_capped() {
        assert_eq!(
            parse_tags(" Tech, Design ,, AI,Tech, Cloud, Rust, Extra"),
            vec!["Tech", "Design", "AI", "Tech", "Cloud"]
        );
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn split_list_on_newlines() {
        assert_eq!(
            split_list("Faster builds\n\n  Fewer bugs \n", '\n'),
            vec!["Faster builds", "Fewer bugs"]
        );
    }
}
