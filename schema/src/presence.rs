//! Serde adapters for field presence and nullability.
//!
//! Serde's derive treats every `Option<T>` field as "may be absent or null". Discord schemas
//! distinguish more cases than that, so fields opt into one of these adapters:
//!
//! - [`nullable`] - the key is required, the value may be `null`
//! - [`non_null`] - the key may be absent, but `null` is rejected
//! - [`patch`] - the key may be absent (leave unchanged) or `null` (clear), kept apart as
//!   `Option<Option<T>>`

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Required key with a nullable value.
///
/// ```rust,ignore
/// #[serde(with = "crate::presence::nullable")]
/// pub topic: Option<String>,
/// ```
pub mod nullable {
    use super::*;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer)
    }
}

/// Optional key whose value must not be `null`.
///
/// ```rust,ignore
/// #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::presence::non_null::deserialize")]
/// pub nick: Option<String>,
/// ```
pub mod non_null {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }
}

/// Optional, nullable key of a PATCH body.
///
/// ```rust,ignore
/// #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::presence::patch")]
/// pub topic: Option<Option<String>>,
/// ```
pub mod patch {
    use super::*;

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Shape {
        #[serde(with = "super::nullable")]
        required_nullable: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "super::non_null::deserialize"
        )]
        optional: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::patch"
        )]
        patched: Option<Option<String>>,
    }

    /// Tests that a required nullable key must be present.
    ///
    /// Expected: `null` accepted, missing key rejected
    #[test]
    fn nullable_requires_key() {
        let shape: Shape = serde_json::from_value(json!({ "required_nullable": null })).unwrap();
        assert_eq!(shape.required_nullable, None);

        assert!(serde_json::from_value::<Shape>(json!({})).is_err());
    }

    /// Tests that an optional non-null key refuses `null`.
    ///
    /// Expected: absent accepted, `null` rejected
    #[test]
    fn non_null_rejects_null() {
        let shape: Shape = serde_json::from_value(json!({ "required_nullable": "a" })).unwrap();
        assert_eq!(shape.optional, None);

        let result = serde_json::from_value::<Shape>(json!({
            "required_nullable": "a",
            "optional": null
        }));
        assert!(result.is_err());
    }

    /// Tests the three states of a PATCH field.
    ///
    /// Expected: absent -> None, null -> Some(None), value -> Some(Some(value)), and the
    /// distinction survives serialization
    #[test]
    fn patch_keeps_absent_and_null_apart() {
        let absent: Shape = serde_json::from_value(json!({ "required_nullable": null })).unwrap();
        assert_eq!(absent.patched, None);

        let cleared: Shape =
            serde_json::from_value(json!({ "required_nullable": null, "patched": null })).unwrap();
        assert_eq!(cleared.patched, Some(None));
        assert_eq!(
            serde_json::to_value(&cleared).unwrap(),
            json!({ "required_nullable": null, "patched": null })
        );

        let set: Shape =
            serde_json::from_value(json!({ "required_nullable": null, "patched": "x" })).unwrap();
        assert_eq!(set.patched, Some(Some("x".to_string())));
    }
}
