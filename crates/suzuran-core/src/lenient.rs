//! Deserializers for fields the admin UI stores as raw form values.
//!
//! Form posts reach storage unconverted, so a numeric field may hold `"5"`,
//! and an unchosen select may hold `""` or `null`. These helpers accept those
//! shapes on read; writes always go out in the typed form.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an integer stored as a number or a numeric string.
///
/// `null` and blank strings read as `0`.
pub fn int_from_form<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| D::Error::custom(format!("integer out of range: {n}"))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("expected an integer, found {s:?}")))
        }
        Some(other) => Err(D::Error::custom(format!(
            "expected an integer, found {other}"
        ))),
    }
}

/// Reads an optional value where `""` means "not chosen".
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

/// Reads a required value where `null` or `""` means the default.
pub fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(blank_as_none(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Shade {
        #[default]
        Light,
        Dark,
    }

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "int_from_form")]
        count: i64,
        #[serde(default, deserialize_with = "blank_as_none")]
        choice: Option<Shade>,
        #[serde(default, deserialize_with = "blank_as_default")]
        shade: Shade,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"count": 5}"#).count, 5);
        assert_eq!(parse(r#"{"count": "5"}"#).count, 5);
        assert_eq!(parse(r#"{"count": " -2 "}"#).count, -2);
        assert_eq!(parse(r#"{"count": 3.0}"#).count, 3);
    }

    #[test]
    fn test_int_null_blank_or_absent_is_zero() {
        assert_eq!(parse(r#"{"count": null}"#).count, 0);
        assert_eq!(parse(r#"{"count": ""}"#).count, 0);
        assert_eq!(parse("{}").count, 0);
    }

    #[test]
    fn test_int_rejects_words() {
        assert!(serde_json::from_str::<Form>(r#"{"count": "five"}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"count": true}"#).is_err());
    }

    #[test]
    fn test_blank_choice_is_none() {
        assert_eq!(parse(r#"{"choice": ""}"#).choice, None);
        assert_eq!(parse(r#"{"choice": null}"#).choice, None);
        assert_eq!(parse("{}").choice, None);
        assert_eq!(parse(r#"{"choice": "dark"}"#).choice, Some(Shade::Dark));
    }

    #[test]
    fn test_unknown_choice_is_still_rejected() {
        assert!(serde_json::from_str::<Form>(r#"{"choice": "grey"}"#).is_err());
    }

    #[test]
    fn test_blank_required_is_default() {
        assert_eq!(parse(r#"{"shade": null}"#).shade, Shade::Light);
        assert_eq!(parse(r#"{"shade": ""}"#).shade, Shade::Light);
        assert_eq!(parse(r#"{"shade": "dark"}"#).shade, Shade::Dark);
    }
}
