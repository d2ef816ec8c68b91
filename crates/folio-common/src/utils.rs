//! Shared string helpers.

/// Escapes text for use in HTML element content.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attribute(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Last `/`-separated segment of a URL, e.g. the handle of a profile link.
///
/// Returns `None` when the segment is empty (`https://github.com/`).
#[must_use]
pub fn last_path_segment(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|segment| !segment.is_empty())
}

/// Joins the non-empty parts with `separator`.
#[must_use]
pub fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("Tom & Jerry <script>"),
            "Tom &amp; Jerry &lt;script&gt;"
        );
        assert_eq!(escape_html("Kỹ năng"), "Kỹ năng");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("https://github.com/octocat"), Some("octocat"));
        assert_eq!(last_path_segment("https://github.com/"), None);
        assert_eq!(last_path_segment("plain"), Some("plain"));
    }

    #[test]
    fn test_join_non_empty() {
        assert_eq!(join_non_empty(&["a", "", "b"], " - "), "a - b");
        assert_eq!(join_non_empty(&["", ""], " - "), "");
    }
}
