//! Partial-update primitives shared by every entity kind.
//!
//! One convention applies to all update requests:
//!
//! | field kind        | absent | `null` | value   |
//! |-------------------|--------|--------|---------|
//! | optional (`Patch`) | keep   | clear  | replace |
//! | required (`Option`) | keep | keep   | replace |
//! | list (`Option<Vec>`) | keep | keep  | replace |
//!
//! Update request fields of type [`Patch`] must be annotated with
//! `#[serde(default, skip_serializing_if = "Patch::is_keep")]` so that an
//! absent field deserializes as [`Patch::Keep`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tri-state update for an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value unchanged.
    Keep,
    /// Remove the stored value.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    /// Returns true when this patch leaves the field untouched.
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Applies this patch to an optional stored field.
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            Patch::Keep => {}
            Patch::Clear => *target = None,
            Patch::Set(value) => *target = Some(value.clone()),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Reached only when the field is present; absence is handled by `default`.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
        }
    }
}

/// Replaces a required field when the update carries a value.
pub fn replace<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Patch::is_keep")]
        icon: Patch<String>,
    }

    #[test]
    fn test_absent_field_is_keep() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.icon, Patch::Keep);
    }

    #[test]
    fn test_null_field_is_clear() {
        let probe: Probe = serde_json::from_str(r#"{"icon": null}"#).unwrap();
        assert_eq!(probe.icon, Patch::Clear);
    }

    #[test]
    fn test_value_field_is_set() {
        let probe: Probe = serde_json::from_str(r#"{"icon": "/uploads/a.png"}"#).unwrap();
        assert_eq!(probe.icon, Patch::Set("/uploads/a.png".to_string()));
    }

    #[test]
    fn test_serialize_skips_keep_and_writes_null_for_clear() {
        assert_eq!(serde_json::to_string(&Probe::default()).unwrap(), "{}");
        let clear = Probe { icon: Patch::Clear };
        assert_eq!(serde_json::to_string(&clear).unwrap(), r#"{"icon":null}"#);
    }

    #[test]
    fn test_apply_to() {
        let mut stored = Some("old".to_string());
        Patch::Keep.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("old"));

        Patch::Set("new".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("new"));

        Patch::Clear.apply_to(&mut stored);
        assert_eq!(stored, None);
    }

    #[test]
    fn test_replace_required() {
        let mut name = "SSR".to_string();
        replace(&mut name, &None);
        assert_eq!(name, "SSR");
        replace(&mut name, &Some("UR".to_string()));
        assert_eq!(name, "UR");
    }
}
