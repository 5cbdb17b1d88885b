//! The `X-RateLimit-*` headers carried on every response.
//!
//! Only the header shape is modelled here; bucket accounting stays with Discord.

use thiserror::Error;

pub const LIMIT: &str = "X-RateLimit-Limit";
pub const REMAINING: &str = "X-RateLimit-Remaining";
pub const RESET: &str = "X-RateLimit-Reset";
pub const RESET_AFTER: &str = "X-RateLimit-Reset-After";
pub const BUCKET: &str = "X-RateLimit-Bucket";

/// JSON type of a header value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderKind {
    Integer,
    Number,
    String,
}

/// Documentation entry for one rate-limit header.
#[derive(Clone, Copy, Debug)]
pub struct HeaderSpec {
    pub name: &'static str,
    pub kind: HeaderKind,
    pub description: &'static str,
}

/// Every rate-limit header, in the order they are rendered.
pub const HEADERS: &[HeaderSpec] = &[
    HeaderSpec {
        name: LIMIT,
        kind: HeaderKind::Integer,
        description: "The number of requests that can be made",
    },
    HeaderSpec {
        name: REMAINING,
        kind: HeaderKind::Integer,
        description: "The number of remaining requests that can be made",
    },
    HeaderSpec {
        name: RESET,
        kind: HeaderKind::Number,
        description: "Epoch time (seconds since 00:00:00 UTC on January 1, 1970) at which the rate limit resets",
    },
    HeaderSpec {
        name: RESET_AFTER,
        kind: HeaderKind::Number,
        description: "Total time (in seconds) of when the current rate limit bucket will reset",
    },
    HeaderSpec {
        name: BUCKET,
        kind: HeaderKind::String,
        description: "A unique string denoting the rate limit being encountered",
    },
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateLimitHeaderError {
    #[error("Missing header {0}")]
    Missing(&'static str),

    #[error("Malformed header {header}: '{value}'")]
    Malformed { header: &'static str, value: String },
}

/// Parsed rate-limit headers of a single response.
#[derive(Clone, Debug, PartialEq)]
pub struct RateLimitHeaders {
    pub limit: u32,
    pub remaining: u32,
    /// Epoch seconds, usually with millisecond precision.
    pub reset: f64,
    pub reset_after: f64,
    pub bucket: String,
}

impl RateLimitHeaders {
    /// Reads the headers from name/value pairs, matching names case-insensitively.
    ///
    /// # Arguments
    /// - `headers` - Response header pairs, in any order
    ///
    /// # Returns
    /// - `Ok(RateLimitHeaders)` - All five headers present and well-formed
    /// - `Err(RateLimitHeaderError::Missing)` - A header is absent
    /// - `Err(RateLimitHeaderError::Malformed)` - A header value has the wrong type
    pub fn parse<'a, I>(headers: I) -> Result<Self, RateLimitHeaderError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let headers: Vec<(&str, &str)> = headers.into_iter().collect();

        let find = |name: &'static str| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.trim())
                .ok_or(RateLimitHeaderError::Missing(name))
        };

        Ok(Self {
            limit: parse_value(LIMIT, find(LIMIT)?)?,
            remaining: parse_value(REMAINING, find(REMAINING)?)?,
            reset: parse_seconds(RESET, find(RESET)?)?,
            reset_after: parse_seconds(RESET_AFTER, find(RESET_AFTER)?)?,
            bucket: find(BUCKET)?.to_string(),
        })
    }

    /// Renders the headers back to name/value pairs.
    pub fn to_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (LIMIT, self.limit.to_string()),
            (REMAINING, self.remaining.to_string()),
            (RESET, self.reset.to_string()),
            (RESET_AFTER, self.reset_after.to_string()),
            (BUCKET, self.bucket.clone()),
        ]
    }
}

fn parse_value<T: std::str::FromStr>(
    header: &'static str,
    value: &str,
) -> Result<T, RateLimitHeaderError> {
    value.parse().map_err(|_| RateLimitHeaderError::Malformed {
        header,
        value: value.to_string(),
    })
}

fn parse_seconds(header: &'static str, value: &str) -> Result<f64, RateLimitHeaderError> {
    let seconds: f64 = parse_value(header, value)?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(RateLimitHeaderError::Malformed {
            header,
            value: value.to_string(),
        });
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, &'static str)> {
        vec![
            ("x-ratelimit-limit", "5"),
            ("X-RATELIMIT-REMAINING", "1"),
            ("X-RateLimit-Reset", "1470173023.123"),
            ("X-RateLimit-Reset-After", "1"),
            ("X-RateLimit-Bucket", "abcd1234"),
        ]
    }

    /// Tests case-insensitive header lookup.
    ///
    /// Expected: Ok with every value parsed
    #[test]
    fn parses_headers_in_any_case() {
        let headers = RateLimitHeaders::parse(sample()).unwrap();

        assert_eq!(headers.limit, 5);
        assert_eq!(headers.remaining, 1);
        assert_eq!(headers.reset, 1470173023.123);
        assert_eq!(headers.reset_after, 1.0);
        assert_eq!(headers.bucket, "abcd1234");
    }

    /// Tests that a missing header is named in the error.
    ///
    /// Expected: Err(Missing("X-RateLimit-Bucket"))
    #[test]
    fn missing_header_is_named() {
        let mut headers = sample();
        headers.pop();

        assert_eq!(
            RateLimitHeaders::parse(headers),
            Err(RateLimitHeaderError::Missing(BUCKET))
        );
    }

    /// Tests that non-numeric and negative values are rejected.
    ///
    /// Expected: Err(Malformed) for both
    #[test]
    fn malformed_values_are_rejected() {
        let mut headers = sample();
        headers[0] = ("X-RateLimit-Limit", "five");
        assert!(matches!(
            RateLimitHeaders::parse(headers),
            Err(RateLimitHeaderError::Malformed { header: LIMIT, .. })
        ));

        let mut headers = sample();
        headers[3] = ("X-RateLimit-Reset-After", "-1");
        assert!(matches!(
            RateLimitHeaders::parse(headers),
            Err(RateLimitHeaderError::Malformed { header: RESET_AFTER, .. })
        ));
    }

    /// Tests that rendered headers parse back to the same values.
    ///
    /// Verifies sub-millisecond digits survive rendering.
    ///
    /// Expected: parse(to_headers(h)) == h
    #[test]
    fn rendered_headers_parse_back() {
        let mut pairs = sample();
        pairs[3] = ("X-RateLimit-Reset-After", "1.2345");
        let headers = RateLimitHeaders::parse(pairs).unwrap();
        let rendered = headers.to_headers();

        assert!(rendered.contains(&(RESET_AFTER, "1.2345".to_string())));
        let reparsed =
            RateLimitHeaders::parse(rendered.iter().map(|(k, v)| (*k, v.as_str()))).unwrap();
        assert_eq!(reparsed, headers);
    }
}
