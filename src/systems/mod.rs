pub mod geospatial;
pub mod location;
pub mod polling;
pub mod scene;
pub mod transport;
