use bevy_ecs::component::Component;
use cgmath::{One, Quaternion, Vector3, Zero};

/// Marks the entity that represents the space station.
#[derive(Component, Debug, Clone)]
pub struct IssComponent {
    pub label: String,
}

impl Default for IssComponent {
    fn default() -> Self {
        Self {
            label: String::from("ISS"),
        }
    }
}

/// Placement of an entity relative to the globe centre.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
    pub translation: Vector3<f64>,
    pub rotation: Quaternion<f64>,
}

impl Default for TransformComponent {
    // the marker sits at the origin until the first successful fetch
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Quaternion::one(),
        }
    }
}
