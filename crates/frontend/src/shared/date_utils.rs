/// Utilities for date and time formatting
///
/// Dates travel as ISO strings ("2025-06-01", RFC 3339 timestamps) and are
/// shown as DD.MM.YYYY.
use chrono::NaiveDate;

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let (date_part, time_part) = match datetime_str.split_once('T') {
        Some(parts) => parts,
        None => match datetime_str.split_once(' ') {
            Some(parts) => parts,
            None => return datetime_str.to_string(),
        },
    };
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            let time = time_part.split('.').next().unwrap_or(time_part);
            let time = time.trim_end_matches('Z');
            let time = time.split('+').next().unwrap_or(time);
            return format!("{}.{}.{} {}", day, month, year, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Value of an `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "15.03.2024 - 18.03.2024 (3 nights)"
pub fn format_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    let nights = (check_out - check_in).num_days().max(0);
    let unit = if nights == 1 { "night" } else { "nights" };
    format!(
        "{} - {} ({} {})",
        format_naive_date(check_in),
        format_naive_date(check_out),
        nights,
        unit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+00:00"),
            "31.12.2024 23:59:59"
        );
        // system_log timestamps use a space separator
        assert_eq!(
            format_datetime("2025-01-02 08:15:00.250"),
            "02.01.2025 08:15:00"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_input_values() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(to_input_value(d), "2025-06-01");
        assert_eq!(parse_input_value(" 2025-06-01 "), Some(d));
        assert_eq!(parse_input_value(""), None);
    }

    #[test]
    fn test_format_stay() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        assert_eq!(format_stay(a, b), "15.03.2024 - 18.03.2024 (3 nights)");
        let c = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert_eq!(format_stay(a, c), "15.03.2024 - 16.03.2024 (1 night)");
    }
}
