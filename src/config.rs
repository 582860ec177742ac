use std::time::Duration;

use crate::{systems::geospatial::coordinates::MARKER_RADIUS, ISS_CATALOG_ID};

pub const DEFAULT_API_BASE_URL: &str = "https://api.wheretheiss.at/v1";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub api_base_url: String,
    /// NORAD catalog number of the tracked satellite.
    pub satellite_id: u32,
    pub poll_interval: Duration,
    pub marker_radius: f64,
    pub request_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            satellite_id: ISS_CATALOG_ID,
            poll_interval: DEFAULT_POLL_INTERVAL,
            marker_radius: MARKER_RADIUS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl TrackerConfig {
    pub fn location_url(&self) -> String {
        format!(
            "{}/satellites/{}",
            self.api_base_url.trim_end_matches('/'),
            self.satellite_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_iss() {
        let config = TrackerConfig::default();
        assert_eq!(
            config.location_url(),
            "https://api.wheretheiss.at/v1/satellites/25544"
        );
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.marker_radius, 1.1);
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let config = TrackerConfig {
            api_base_url: "http://127.0.0.1:8080/v1/".to_string(),
            ..TrackerConfig::default()
        };
        assert_eq!(config.location_url(), "http://127.0.0.1:8080/v1/satellites/25544");
    }
}
