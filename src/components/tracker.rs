use chrono::{DateTime, Utc};

use super::geo::{CartesianPoint, GeoCoordinate};

/// Everything the polling loop knows about the tracked object.
///
/// `coordinate` and `point` are only ever written together, so `point` is
/// always the projection of `coordinate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub coordinate: Option<GeoCoordinate>,
    pub point: Option<CartesianPoint>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fetches_completed: u64,
    pub failures: u64,
}

impl TrackerState {
    pub fn record_success(&mut self, coordinate: GeoCoordinate, point: CartesianPoint) {
        self.coordinate = Some(coordinate);
        self.point = Some(point);
        self.updated_at = Some(Utc::now());
        self.fetches_completed += 1;
    }

    pub fn record_failure(&mut self) {
        self.fetches_completed += 1;
        self.failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_last_position() {
        let mut state = TrackerState::default();
        let coordinate = GeoCoordinate::new(10.0, 20.0);
        let point = CartesianPoint::new(1.0, 0.5, -0.2);

        state.record_success(coordinate, point);
        state.record_failure();

        assert_eq!(state.coordinate, Some(coordinate));
        assert_eq!(state.point, Some(point));
        assert!(state.updated_at.is_some());
        assert_eq!(state.fetches_completed, 2);
        assert_eq!(state.failures, 1);
    }
}
