/// Utilities for date and time formatting
///
/// The backend reports ISO 8601 timestamps; everything user-facing goes
/// through these helpers so the whole app renders dates the same way.

/// First five characters of the time part (HH:MM). Timestamps come from
/// the server unvalidated, so the cut must stay on a char boundary instead
/// of slicing by byte index.
fn hhmm(time_part: &str) -> &str {
    time_part.get(..5).unwrap_or(time_part)
}

/// Format an ISO datetime string as DD.MM.YYYY HH:MM
/// Example: "2026-03-15T14:02:26.123Z" -> "15.03.2026 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{} {}", day, month, year, hhmm(time_part));
            }
        }
    }
    datetime_str.to_string()
}

/// Format an ISO date or datetime string as DD.MM.YYYY
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Just the HH:MM part, used for chat bubbles.
pub fn format_time(datetime_str: &str) -> String {
    match datetime_str.split_once('T') {
        Some((_, time_part)) => hhmm(time_part).to_string(),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-03-15T14:02:26.123Z"),
            "15.03.2026 14:02"
        );
        assert_eq!(format_datetime("2026-12-31T23:59:59Z"), "31.12.2026 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15.03.2026");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "15.03.2026");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-03-15T14:02:26Z"), "14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_time("invalid"), "invalid");
        // A multi-byte character straddling the HH:MM cut must not panic.
        assert_eq!(format_time("2026-03-15T14:0\u{e9}"), "14:0\u{e9}");
        assert_eq!(
            format_datetime("2026-03-15T14:0\u{e9}"),
            "15.03.2026 14:0\u{e9}"
        );
    }
}
