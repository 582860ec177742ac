use std::f64::consts::PI;

use crate::components::geo::{CartesianPoint, GeoCoordinate};

/// Radius the marker is projected onto; sits just above the unit globe so
/// the surface does not hide it.
pub const MARKER_RADIUS: f64 = 1.1;

pub struct CoordinatesSystem {}

impl CoordinatesSystem {
    /// Maps a subpoint onto a sphere of `radius`.
    ///
    /// (latitude 0, longitude -180) lands on the -X axis and the poles on
    /// ±Y. Longitude is not wrapped, callers pass it in `[-180, 180]`.
    pub fn project(coord: GeoCoordinate, radius: f64) -> CartesianPoint {
        // polar angle from the north pole, azimuth from the texture seam
        let phi = (90.0 - coord.latitude) * (PI / 180.0);
        let theta = (coord.longitude + 180.0) * (PI / 180.0);

        let x = -(radius * phi.sin() * theta.cos());
        let y = radius * phi.cos();
        let z = radius * phi.sin() * theta.sin();

        CartesianPoint::new(x, y, z)
    }

    pub fn project_marker(coord: GeoCoordinate) -> CartesianPoint {
        CoordinatesSystem::project(coord, MARKER_RADIUS)
    }
}
