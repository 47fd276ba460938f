use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer};

// Prismic sends "2021-03-25T19:25:28+0000", which is not valid RFC 3339.
const PRISMIC_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn parse_prismic_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(raw, PRISMIC_DATE_FORMAT))
        .map(|date| date.with_timezone(&Utc))
        .ok()
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_prismic_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid publication date: {raw}"))),
    }
}

/// Empty text fields come back as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_prismic_offset_without_colon() {
        let date = parse_prismic_date("2021-03-25T19:25:28+0000").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2021, 3, 25, 19, 25, 28).unwrap());
    }

    #[test]
    fn parses_rfc3339_and_normalizes_to_utc() {
        let date = parse_prismic_date("2021-03-25T16:25:28-03:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2021, 3, 25, 19, 25, 28).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_prismic_date("yesterday").is_none());
    }
}
