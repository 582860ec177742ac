use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::systems::transport::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a location fetch failed.
#[derive(Error, Debug)]
pub enum FetchFailure {
    /// DNS, connect, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[source] TransportError),
    #[error("unexpected HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
    /// Body parsed but the subpoint is not a valid latitude/longitude.
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// The single error the location fetcher hands back to its caller.
#[derive(Error, Debug)]
#[error("An error occurred while trying to get the current ISS location: {cause}")]
pub struct LocationFetchError {
    #[source]
    cause: FetchFailure,
}

impl LocationFetchError {
    pub fn cause(&self) -> &FetchFailure {
        &self.cause
    }

    pub fn into_cause(self) -> FetchFailure {
        self.cause
    }
}

impl From<FetchFailure> for LocationFetchError {
    fn from(cause: FetchFailure) -> Self {
        Self { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_keeps_original_cause() {
        let error = LocationFetchError::from(FetchFailure::HttpStatus { status: 503 });
        assert_eq!(
            error.to_string(),
            "An error occurred while trying to get the current ISS location: unexpected HTTP status 503"
        );
        let source = error.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("unexpected HTTP status 503"));
    }
}
