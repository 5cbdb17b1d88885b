//! Snowflake identifiers.
//!
//! Discord identifiers are 64-bit integers transported as decimal strings. On the wire a
//! snowflake must match `^(0|[1-9][0-9]*)$`: no sign, no leading zeros, digits only. The pattern
//! is checked before parsing so that inputs such as `"01"` or `"+1"`, which `u64::from_str`
//! would accept, are rejected.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::RefOr;

/// Pattern every snowflake string must match.
pub const SNOWFLAKE_PATTERN: &str = r"^(0|[1-9][0-9]*)$";

static SNOWFLAKE_REGEX: OnceLock<Regex> = OnceLock::new();

fn snowflake_regex() -> &'static Regex {
    SNOWFLAKE_REGEX.get_or_init(|| Regex::new(SNOWFLAKE_PATTERN).expect("valid regex pattern"))
}

/// Reasons a string is not a snowflake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnowflakeError {
    /// The string does not match [`SNOWFLAKE_PATTERN`].
    #[error("'{0}' is not a valid snowflake")]
    Pattern(String),

    /// The string matches the pattern but does not fit in 64 bits.
    #[error("'{0}' is out of range for a snowflake")]
    Overflow(String),
}

/// A Discord snowflake identifier (`SnowflakeType` in the published document).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

impl Snowflake {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Checks a string against the snowflake pattern without parsing it.
    pub fn is_valid(value: &str) -> bool {
        snowflake_regex().is_match(value)
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(SnowflakeError::Pattern(s.to_string()));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| SnowflakeError::Overflow(s.to_string()))
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Cow::<'de, str>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl utoipa::PartialSchema for Snowflake {
    fn schema() -> RefOr<Schema> {
        let object = ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::Custom("snowflake".to_string())))
            .pattern(Some(SNOWFLAKE_PATTERN))
            .build();

        RefOr::T(Schema::Object(object))
    }
}

impl utoipa::ToSchema for Snowflake {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("SnowflakeType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the canonical accepted forms.
    ///
    /// Expected: `"0"` and `"123"` parse to their numeric values
    #[test]
    fn accepts_canonical_decimal_strings() {
        assert_eq!("0".parse::<Snowflake>(), Ok(Snowflake::new(0)));
        assert_eq!("123".parse::<Snowflake>(), Ok(Snowflake::new(123)));
        assert_eq!(
            "1234567890123456789".parse::<Snowflake>(),
            Ok(Snowflake::new(1234567890123456789))
        );
    }

    /// Tests inputs rejected by the pattern.
    ///
    /// Verifies that leading zeros, signs, whitespace and the empty string fail even where
    /// `u64::from_str` would succeed.
    ///
    /// Expected: Err(SnowflakeError::Pattern) for each input
    #[test]
    fn rejects_non_canonical_strings() {
        for input in ["01", "-1", "+1", "", " 1", "1a", "00"] {
            assert_eq!(
                input.parse::<Snowflake>(),
                Err(SnowflakeError::Pattern(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    /// Tests a value matching the pattern but exceeding 64 bits.
    ///
    /// Expected: Err(SnowflakeError::Overflow)
    #[test]
    fn rejects_overflowing_values() {
        let input = "18446744073709551616";
        assert_eq!(
            input.parse::<Snowflake>(),
            Err(SnowflakeError::Overflow(input.to_string()))
        );
    }

    /// Tests JSON transport as a string.
    ///
    /// Verifies that snowflakes serialize to strings and that bare JSON numbers are refused.
    ///
    /// Expected: string round trip succeeds, number fails
    #[test]
    fn uses_string_transport() {
        let id: Snowflake = serde_json::from_str("\"41771983423143937\"").unwrap();
        assert_eq!(id.get(), 41771983423143937);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"41771983423143937\"");

        assert!(serde_json::from_str::<Snowflake>("41771983423143937").is_err());
        assert!(serde_json::from_str::<Snowflake>("\"01\"").is_err());
    }
}
