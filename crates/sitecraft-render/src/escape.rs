//! Context-keyed escaping.
//!
//! Every text interpolation point in a rendered fragment goes through
//! exactly one of these functions, keyed by where the value lands: a text
//! node, an attribute value, or a URL-valued attribute.

/// Escape a value for interpolation into an HTML text node.
pub fn text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for interpolation into a double- or single-quoted
/// attribute value.
pub fn attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a URL-valued attribute (`href`, `src`).
///
/// Script-capable schemes are rejected outright and replaced with `#` so
/// stored content cannot smuggle executable URLs into the document.
pub fn url(value: &str) -> String {
    let trimmed = value.trim();
    let scheme: String = trimmed
        .chars()
        .take_while(|c| *c != ':')
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if trimmed.contains(':') && matches!(scheme.as_str(), "javascript" | "data" | "vbscript") {
        return "#".to_string();
    }

    attr(trimmed)
}
