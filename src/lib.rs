//! request_trust library: inbound request enrichment
//!
//! This library enriches each inbound HTTP request with a composite
//! identity/risk profile derived from the client's address and request
//! headers: geolocation against MaxMind databases, secondary location signals
//! from headers, a parsed client signature, datacenter/VPN heuristics, and a
//! fused ordinal trust classification.
//!
//! # Example
//!
//! ```no_run
//! use request_trust::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     geoip_city: Some(std::path::PathBuf::from("GeoLite2-City.mmdb")),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
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

pub mod analysis;
pub mod config;
pub mod datacenter;
pub mod enrichment;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod server;
pub mod signals;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::run_server;

// Internal run module (startup choreography)
mod run {
    use anyhow::{Context, Result};
    use std::sync::Arc;

    use crate::analysis::VpnHeuristic;
    use crate::config::Config;
    use crate::datacenter::DatacenterBlocklist;
    use crate::enrichment::EnrichmentPipeline;
    use crate::geoip::{GeoDatabases, GeoPaths};
    use crate::server::start_server;
    use crate::signals::HeaderExtractor;

    /// Runs the enrichment service with the provided configuration.
    ///
    /// Loads every configured dataset before binding the listener; a
    /// configured geolocation database or blocklist file that cannot be
    /// opened is fatal, and the process never starts serving traffic.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A configured geolocation database cannot be read or parsed
    /// - A configured datacenter blocklist cannot be read or parsed
    /// - The listener cannot bind the configured port
    pub async fn run_server(config: Config) -> Result<()> {
        let geo_paths = GeoPaths {
            country: config.geoip_country.clone(),
            city: config.geoip_city.clone(),
            asn: config.geoip_asn.clone(),
        };
        let databases = GeoDatabases::open(&geo_paths)
            .await
            .context("Failed to load geolocation databases")?;
        log::info!("Geolocation databases loaded");

        let blocklist = match &config.datacenter_blocks {
            Some(path) => DatacenterBlocklist::from_file(path)
                .await
                .context("Failed to load datacenter blocklist")?,
            None => DatacenterBlocklist::builtin(),
        };
        log::info!("Datacenter blocklist ready ({} blocks)", blocklist.len());

        let pipeline = EnrichmentPipeline::new(
            Arc::new(databases),
            blocklist,
            HeaderExtractor::default(),
            VpnHeuristic::with_defaults(config.vpn_accuracy_threshold),
        );

        start_server(config.port, Arc::new(pipeline)).await
    }
}
