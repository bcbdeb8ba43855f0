//! Shared "perform HTTP GET and classify outcome" helper.
//!
//! All three lookup stages have the same three-outcome shape: the request
//! fails at the transport level, the remote answers with a non-200 status, or
//! the 200 body is parsed as JSON. [`fetch_json`] factors that shape out so
//! the stages only differ in URL construction and field extraction.

use log::debug;
use reqwest::StatusCode;

use crate::error_handling::LookupError;

/// One of the three sequential network-call steps in the pipeline.
///
/// Carried inside [`LookupError::Remote`] so a non-200 failure names the
/// stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Public IP address lookup.
    IpLookup,
    /// IP-to-coordinates geolocation.
    Geolocation,
    /// ISS overpass prediction.
    PassPrediction,
}

impl Stage {
    /// Returns the label used in error messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::IpLookup => "IP",
            Stage::Geolocation => "coordinates for IP",
            Stage::PassPrediction => "ISS pass times",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performs one HTTP GET and classifies the outcome.
///
/// Exactly `200 OK` counts as success; any other status becomes a
/// [`LookupError::Remote`] carrying the status code and the raw body.
/// Transport failures (including body-read failures) propagate as
/// [`LookupError::Transport`] with the `reqwest` cause unwrapped, and a
/// malformed body as [`LookupError::Parse`].
pub async fn fetch_json(
    client: &reqwest::Client,
    url: reqwest::Url,
    stage: Stage,
) -> Result<serde_json::Value, LookupError> {
    debug!("GET {url} ({stage})");

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(LookupError::Remote {
            stage,
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
