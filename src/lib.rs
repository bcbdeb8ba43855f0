//! iss_spotter library: ISS pass lookup pipeline
//!
//! This library determines the next upcoming passes of the International
//! Space Station over the caller's current location by sequentially calling
//! three public HTTP APIs: public-IP lookup, IP geolocation, and overpass
//! prediction. Each stage's success is a precondition for the next; the
//! first error short-circuits the pipeline.
//!
//! # Example
//!
//! ```no_run
//! use iss_spotter::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_lookup(Config::default()).await?;
//! for pass in &report.passes {
//!     println!("risetime {} duration {}s", pass.risetime, pass.duration);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
mod geo;
pub mod initialization;
mod ip;
mod models;
mod passes;
mod pipeline;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{classify, ErrorType, InitializationError, LookupError};
pub use fetch::Stage;
pub use geo::fetch_coords_by_ip;
pub use ip::fetch_my_ip;
pub use models::{Coordinates, OverpassWindow};
pub use passes::fetch_pass_times;
pub use pipeline::next_passes;
pub use run::{run_lookup, PassReport};

// Internal run module (application-level wrapper around the pipeline)
mod run {
    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::error_handling::log_lookup_failure;
    use crate::initialization::init_client;
    use crate::models::OverpassWindow;

    /// Results of a completed pass lookup.
    #[derive(Debug, Clone)]
    pub struct PassReport {
        /// Upcoming overpass windows, in the order the remote service
        /// returned them.
        pub passes: Vec<OverpassWindow>,
        /// Elapsed time for the whole pipeline in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs the full lookup pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the
    /// configuration, builds the shared HTTP client, and runs the three
    /// lookup stages in sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be built, or any pipeline stage fails. Pipeline errors are
    /// logged with their category and forwarded without added context.
    pub async fn run_lookup(config: Config) -> Result<PassReport> {
        config.validate().context("Invalid configuration")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let start = std::time::Instant::now();
        let passes = match crate::pipeline::next_passes(&client, &config).await {
            Ok(passes) => passes,
            Err(e) => {
                log_lookup_failure(&e);
                return Err(e.into());
            }
        };

        Ok(PassReport {
            passes,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
