//! Value records exchanged between the pipeline stages.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a JSON number or a numeric string.
///
/// Public geolocation providers disagree on how they encode coordinates
/// (`49.2767` vs `"49.27670"`), so both are tolerated here.
fn f64_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// An approximate geographic position, as resolved from an IP address.
///
/// The canonical in-memory representation is `f64` regardless of whether the
/// remote service encoded the fields as numbers or numeric strings. No range
/// validation is performed on the values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    #[serde(deserialize_with = "f64_or_numeric_string")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(deserialize_with = "f64_or_numeric_string")]
    pub longitude: f64,
}

/// A time interval during which the ISS is predicted to be visible from a
/// given location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverpassWindow {
    /// Start of the window, Unix epoch seconds.
    pub risetime: i64,
    /// Length of the window in seconds.
    pub duration: i64,
}
