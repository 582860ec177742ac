pub mod geo;
pub mod iss;
pub mod tracker;
