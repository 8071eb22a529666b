//! Display helpers. Stored content is kept verbatim; it is sanitized here, on the
//! way out to whatever renders it.

use chrono::{DateTime, Utc};

/// Strip scripts, event-handler attributes and dangerous URLs from an HTML fragment.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

/// Human-readable creation timestamp.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_plain_markup_survives() {
        assert_eq!(sanitize_html("<p>Hi</p>"), "<p>Hi</p>");
        assert_eq!(
            sanitize_html("<p><strong>bold</strong> and <em>em</em></p>"),
            "<p><strong>bold</strong> and <em>em</em></p>"
        );
    }

    #[test]
    fn test_script_and_handlers_are_removed() {
        let cleaned = sanitize_html(
            r#"<p>ok</p><script>alert(1)</script><img src="x.png" onerror="alert(2)"><a href="javascript:alert(3)">x</a>"#,
        );

        assert!(cleaned.contains("<p>ok</p>"));
        assert!(!cleaned.contains("<script"));
        assert!(!cleaned.contains("onerror"));
        assert!(!cleaned.contains("javascript:"));
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap();
        assert_eq!(format_timestamp(&at), "2024-05-01 09:03:07 UTC");
    }
}
