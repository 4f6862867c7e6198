//! Plain-text rendering of the status markup for non-browser pages

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*/?\s*br\s*/?\s*>").expect("line break pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Turn status markup into terminal text: `<br>` variants (including the
/// `</br>` the status messages use) become newlines, other tags are dropped
/// and the common entities are decoded.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(html, "\n");
    let without_tags = TAG.replace_all(&with_breaks, "");
    without_tags
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_breaks() {
        assert_eq!(
            html_to_text("Your Login is Successful!</br>Welcome</br>Redirecting..."),
            "Your Login is Successful!\nWelcome\nRedirecting..."
        );
        assert_eq!(html_to_text("a<br>b<BR />c"), "a\nb\nc");
    }

    #[test]
    fn test_server_markup_is_flattened() {
        let html = r#"<h2>Welcome, Ada!</h2><img src="/p.png" alt="avatar">"#;
        assert_eq!(html_to_text(html), "Welcome, Ada!");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(html_to_text("Tom &amp; Jerry &lt;3"), "Tom & Jerry <3");
    }
}
