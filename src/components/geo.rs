/// Subpoint of a tracked object, in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Values are superseded on every poll, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Position of a point on the marker sphere, in scene units (Y-up, right-handed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<CartesianPoint> for cgmath::Vector3<f64> {
    fn from(point: CartesianPoint) -> Self {
        cgmath::Vector3::new(point.x, point.y, point.z)
    }
}

impl From<cgmath::Vector3<f64>> for CartesianPoint {
    fn from(vector: cgmath::Vector3<f64>) -> Self {
        CartesianPoint::new(vector.x, vector.y, vector.z)
    }
}
