//! IP resolver: fetches the caller's public IPv4 address.

use log::debug;
use serde::Deserialize;

use crate::error_handling::LookupError;
use crate::fetch::{fetch_json, Stage};

/// Success body shape of the IP-lookup service.
#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Fetches the caller's public IPv4 address from the IP-lookup service.
///
/// Returns the `ip` field of the JSON response as a string, e.g.
/// `"93.28.202.218"`. No validation is performed beyond what the remote
/// service returns.
///
/// # Errors
///
/// Returns a [`LookupError`] on transport failure, on a non-200 status
/// (carrying the status code and raw body), or if the body lacks an `ip`
/// field.
pub async fn fetch_my_ip(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<String, LookupError> {
    let url = reqwest::Url::parse(endpoint)?;
    let value = fetch_json(client, url, Stage::IpLookup).await?;
    let IpResponse { ip } = serde_json::from_value(value)?;
    debug!("Resolved public IP: {ip}");
    Ok(ip)
}
