//! Lenient timestamp parsing
//!
//! The backend emits either RFC 3339 strings or naive ISO datetimes without an
//! offset. Naive values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a backend timestamp, returning `None` for anything unrecognised
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for optional timestamps
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_rfc3339() {
        let dt = parse("2025-03-01T10:20:30Z").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_naive_is_utc() {
        let dt = parse("2025-03-01T10:20:30.123456").unwrap();
        assert_eq!(dt.minute(), 20);
        assert_eq!(dt.second(), 30);
    }

    #[test]
    fn test_garbage() {
        assert!(parse("yesterday").is_none());
    }
}
