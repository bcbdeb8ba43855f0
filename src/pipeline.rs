//! The lookup pipeline: IP, then location, then pass times.

use log::info;

use crate::config::Config;
use crate::error_handling::LookupError;
use crate::geo::fetch_coords_by_ip;
use crate::ip::fetch_my_ip;
use crate::models::OverpassWindow;
use crate::passes::fetch_pass_times;

/// Determines the next upcoming ISS flyovers for the caller's current
/// location.
///
/// Sequences the three lookup stages: resolve the public IP, resolve
/// coordinates from that IP, resolve pass times from those coordinates. Each
/// stage's request is only issued after the previous stage succeeded; the
/// first error short-circuits the pipeline and is returned unchanged, with no
/// added context and no subsequent requests. Exactly one of {error, result}
/// is produced per invocation.
///
/// The pipeline holds no state across invocations; concurrent invocations
/// with a shared client are safe.
pub async fn next_passes(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<OverpassWindow>, LookupError> {
    let ip = fetch_my_ip(client, &config.ip_endpoint).await?;
    info!("Public IP address: {ip}");

    let coords = fetch_coords_by_ip(client, &config.geo_endpoint, &ip).await?;
    info!(
        "Approximate location: {}, {}",
        coords.latitude, coords.longitude
    );

    let passes = fetch_pass_times(client, &config.pass_endpoint, &coords).await?;
    info!("Found {} upcoming passes", passes.len());

    Ok(passes)
}
