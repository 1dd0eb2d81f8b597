use chrono::{DateTime, Local};

/// Format a raw modification timestamp for the grid.
///
/// Parseable values render as `YYYY-MM-DD HH:MM` in local time; anything
/// the origin produced that does not parse is shown unchanged, and an
/// absent value renders empty.
pub fn format_modified_at(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| {
                ts.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|_| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_timestamp_renders_empty() {
        assert_eq!(format_modified_at(None), "");
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_modified_at(Some("sometime in 2019")), "sometime in 2019");
    }

    #[test]
    fn parseable_timestamp_uses_the_grid_shape() {
        let formatted = format_modified_at(Some("2026-01-01T10:00:00Z"));

        // The exact value depends on the local timezone; the shape does not.
        assert_eq!(formatted.len(), 16);
        let bytes = formatted.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
    }
}
