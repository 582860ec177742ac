use serde::Deserialize;

use crate::{
    components::geo::GeoCoordinate,
    error::{FetchFailure, LocationFetchError},
};

use super::transport::Transport;

// Only the subpoint is read; the rest of the payload (altitude, velocity,
// footprint, timestamp, ...) is ignored by serde.
#[derive(Debug, Deserialize)]
struct SatellitePositionDto {
    latitude: f64,
    longitude: f64,
}

/// Fetches the current subpoint of one satellite from a fixed URL.
pub struct LocationFetcher<T> {
    transport: T,
    url: String,
}

impl<T: Transport> LocationFetcher<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Makes one request. Never retries; the next polling tick is the retry.
    pub async fn fetch_location(&self) -> Result<GeoCoordinate, LocationFetchError> {
        tracing::debug!(url = %self.url, "fetching satellite location");

        let response = self
            .transport
            .get(&self.url)
            .await
            .map_err(FetchFailure::Network)?;

        if !response.is_success() {
            return Err(FetchFailure::HttpStatus {
                status: response.status,
            }
            .into());
        }

        let coordinate = Self::parse_body(&response.body)?;
        tracing::trace!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "parsed satellite location"
        );
        Ok(coordinate)
    }

    fn parse_body(body: &[u8]) -> Result<GeoCoordinate, FetchFailure> {
        let dto: SatellitePositionDto = serde_json::from_slice(body)?;
        let coordinate = GeoCoordinate::new(dto.latitude, dto.longitude);
        if !coordinate.is_valid() {
            return Err(FetchFailure::OutOfRange {
                latitude: dto.latitude,
                longitude: dto.longitude,
            });
        }
        Ok(coordinate)
    }
}
