pub mod components;
pub mod config;
pub mod error;
pub mod systems;
pub mod world;

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use tracing_subscriber::{fmt::time::UtcTime, EnvFilter};

pub use components::geo::{CartesianPoint, GeoCoordinate};
pub use config::TrackerConfig;
pub use error::{FetchFailure, LocationFetchError};
pub use systems::{
    geospatial::coordinates::{CoordinatesSystem, MARKER_RADIUS},
    location::LocationFetcher,
    polling::{ErrorReporter, PollingSession, PollingSystem, PositionSink, TracingErrorReporter},
    transport::{HttpTransport, Transport},
};
use world::World;

/// NORAD catalog number of the International Space Station.
pub const ISS_CATALOG_ID: u32 = 25544;

/// Installs logging and tracks the ISS with the default configuration
/// until Ctrl-C.
pub async fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .init();

    run_with_config(TrackerConfig::default()).await
}

pub async fn run_with_config(config: TrackerConfig) -> anyhow::Result<()> {
    let transport =
        HttpTransport::new(config.request_timeout).context("failed to build HTTP client")?;
    let fetcher = Arc::new(LocationFetcher::new(transport, config.location_url()));

    // the scene outlives individual fetch failures; it keeps the last good position
    let scene = Arc::new(Mutex::new(World::new()));
    let session = PollingSystem::start(fetcher, Arc::clone(&scene), TracingErrorReporter, &config);
    let mut updates = session.subscribe();

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl-C")?;
                tracing::info!("shutting down");
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                let scene = scene.lock().unwrap_or_else(PoisonError::into_inner);
                if let (Some(coordinate), Some(transform)) = (state.coordinate, scene.iss_transform()) {
                    tracing::info!(
                        latitude = coordinate.latitude,
                        longitude = coordinate.longitude,
                        x = transform.translation.x,
                        y = transform.translation.y,
                        z = transform.translation.z,
                        failures = state.failures,
                        "ISS marker"
                    );
                }
            }
        }
    }

    session.stop();
    session.join().await;
    Ok(())
}
