//! Pass resolver: fetches upcoming ISS overpass windows for a location.

use log::debug;
use serde::Deserialize;

use crate::error_handling::LookupError;
use crate::fetch::{fetch_json, Stage};
use crate::models::{Coordinates, OverpassWindow};

/// Success body shape of the pass-prediction service.
#[derive(Debug, Deserialize)]
struct PassResponse {
    response: Vec<OverpassWindow>,
}

/// Builds the pass-prediction request URL: `<endpoint>?lat=<lat>&lon=<lon>`.
///
/// Coordinates are rendered with Rust's shortest-roundtrip `f64` formatting,
/// so `"49.27670"` from the geo stage becomes `lat=49.2767` here.
fn request_url(endpoint: &str, coords: &Coordinates) -> Result<reqwest::Url, url::ParseError> {
    reqwest::Url::parse_with_params(
        endpoint,
        &[
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
        ],
    )
}

/// Fetches the upcoming ISS flyover times for the given coordinates.
///
/// On success the `response` field of the JSON body is returned as an ordered
/// sequence of [`OverpassWindow`] records. No filtering, sorting, or limiting
/// is applied; whatever order and count the remote service returns is passed
/// through unchanged.
///
/// # Errors
///
/// Returns a [`LookupError`] on transport failure, on a non-200 status
/// (carrying the status code and raw body), or if the `response` field is
/// absent or malformed.
pub async fn fetch_pass_times(
    client: &reqwest::Client,
    endpoint: &str,
    coords: &Coordinates,
) -> Result<Vec<OverpassWindow>, LookupError> {
    let url = request_url(endpoint, coords)?;
    let value = fetch_json(client, url, Stage::PassPrediction).await?;
    let PassResponse { response } = serde_json::from_value(value)?;
    debug!("Resolved {} upcoming ISS passes", response.len());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_interpolates_coordinates() {
        let coords = Coordinates {
            latitude: 49.2767,
            longitude: -123.13,
        };
        let url = request_url("http://passes.example/json", &coords).unwrap();
        assert_eq!(
            url.as_str(),
            "http://passes.example/json?lat=49.2767&lon=-123.13"
        );
    }

    #[test]
    fn test_request_url_preserves_existing_query() {
        let coords = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };
        let url = request_url("http://passes.example/json?n=5", &coords).unwrap();
        assert_eq!(url.as_str(), "http://passes.example/json?n=5&lat=0&lon=0");
    }

    #[test]
    fn test_pass_response_extracts_response_field() {
        let parsed: PassResponse = serde_json::from_str(
            r#"{"message": "success", "response": [{"risetime": 134564234, "duration": 600}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.response.len(), 1);
        assert_eq!(parsed.response[0].risetime, 134564234);
    }

    #[test]
    fn test_pass_response_missing_field_is_error() {
        assert!(serde_json::from_str::<PassResponse>(r#"{"message": "success"}"#).is_err());
    }
}
