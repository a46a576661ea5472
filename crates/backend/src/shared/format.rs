/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Время `HH:MM:SS` для строки лога запроса (UTC+3, как у остальных логов)
pub fn log_time(now: chrono::DateTime<chrono::Utc>) -> String {
    (now + chrono::Duration::hours(3)).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(12345), "12.345");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_log_time() {
        let t = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 22, 5, 9).unwrap();
        assert_eq!(log_time(t), "01:05:09");
    }
}
