//! Geo resolver: fetches approximate coordinates for an IP address.

use log::debug;

use crate::error_handling::LookupError;
use crate::fetch::{fetch_json, Stage};
use crate::models::Coordinates;

/// Builds the geolocation request URL: `<endpoint>/<ip>`.
fn request_url(endpoint: &str, ip: &str) -> Result<reqwest::Url, url::ParseError> {
    reqwest::Url::parse(&format!("{}/{}", endpoint.trim_end_matches('/'), ip))
}

/// Fetches the approximate latitude/longitude for the given IPv4 address.
///
/// The IP address is interpolated into the request path. On success the
/// `latitude` and `longitude` fields of the JSON body are extracted into a
/// [`Coordinates`] record; numeric strings and numbers are both accepted, and
/// no range validation is applied to the values.
///
/// # Errors
///
/// Returns a [`LookupError`] on transport failure, on a non-200 status
/// (carrying the status code and raw body), or if either coordinate field is
/// absent or non-numeric.
pub async fn fetch_coords_by_ip(
    client: &reqwest::Client,
    endpoint: &str,
    ip: &str,
) -> Result<Coordinates, LookupError> {
    let url = request_url(endpoint, ip)?;
    let value = fetch_json(client, url, Stage::Geolocation).await?;
    let coords: Coordinates = serde_json::from_value(value)?;
    debug!(
        "Resolved coordinates for {ip}: {}, {}",
        coords.latitude, coords.longitude
    );
    Ok(coords)
}
