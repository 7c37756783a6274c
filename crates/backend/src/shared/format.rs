/// Format a number with `.` as thousands separator
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Short duration label for the request log: "850ms", "2.4s"
pub fn format_duration(duration: std::time::Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}

/// Sequential business code: `sequence_code("RES", 7)` is "RES-007"
pub fn sequence_code(prefix: &str, n: u64) -> String {
    format!("{}-{:03}", prefix, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_sequence_code() {
        assert_eq!(sequence_code("PRP", 1), "PRP-001");
        assert_eq!(sequence_code("RES", 1234), "RES-1234");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(5)), "5ms");
        assert_eq!(format_duration(Duration::from_millis(2400)), "2.4s");
    }
}
