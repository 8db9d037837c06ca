//! 时间类型模块
//!
//! 服务端以 ISO 8601 字符串返回 `createdAt`，可能带时区（RFC 3339），
//! 也可能是不带时区的本地写法。这里统一解析为 UTC。

use chrono::{DateTime, NaiveDateTime, Utc};

/// 列表中展示用的格式
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 解析服务端时间字符串
///
/// 返回 None 如果解析失败
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// 格式化为展示文本；无法解析时原样返回
pub fn display_timestamp(s: &str) -> String {
    match parse_timestamp(s) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2025-03-01T10:00:00+02:00").unwrap();
        assert_eq!(dt.format(DISPLAY_FORMAT).to_string(), "2025-03-01 08:00");
    }

    #[test]
    fn parses_naive_iso_with_fraction() {
        let dt = parse_timestamp("2025-03-01T10:15:30.123456").unwrap();
        assert_eq!(dt.format(DISPLAY_FORMAT).to_string(), "2025-03-01 10:15");
    }

    #[test]
    fn parses_space_separated_form() {
        assert!(parse_timestamp("2025-03-01 10:15:30").is_some());
    }

    #[test]
    fn garbage_is_displayed_verbatim() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(display_timestamp("yesterday"), "yesterday");
    }
}
