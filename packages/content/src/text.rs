//! Conversions between editor text fields and list values.

/// One entry per non-blank line, trimmed
pub fn lines_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn text_from_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Same as [`lines_from_text`], but empty input clears the field (`None`)
pub fn optional_lines_from_text(text: &str) -> Option<Vec<String>> {
    let lines = lines_from_text(text);
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// Comma-separated tags, trimmed, blanks dropped
pub fn tags_from_text(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn text_from_tags(tags: &[String]) -> String {
    tags.join(", ")
}
