use bevy_ecs::{query::With, world::World as EcsWorld};
use cgmath::{InnerSpace, Matrix3, One, Quaternion, Rad, Rotation3, Vector3};

use crate::components::{
    geo::CartesianPoint,
    iss::{IssComponent, TransformComponent},
};

/// Extra roll applied about the marker's local X axis once it faces the
/// globe, so the model's solar arrays sit level with the surface.
pub const ISS_TILT: Rad<f64> = Rad(-1.5);

pub struct SceneSystem {}

impl SceneSystem {
    /// Moves every ISS marker in `world` to `point` and turns it toward the
    /// globe centre.
    pub fn place_markers(world: &mut EcsWorld, point: CartesianPoint) -> usize {
        let translation: Vector3<f64> = point.into();
        let rotation = SceneSystem::orient_marker(translation);

        let mut query = world.query_filtered::<&mut TransformComponent, With<IssComponent>>();
        let mut moved = 0;
        for mut transform in query.iter_mut(world) {
            transform.translation = translation;
            transform.rotation = rotation;
            moved += 1;
        }
        moved
    }

    pub fn orient_marker(translation: Vector3<f64>) -> Quaternion<f64> {
        SceneSystem::facing_origin(translation) * Quaternion::from_angle_x(ISS_TILT)
    }

    /// Rotation that points the local +Z axis from `translation` to the
    /// origin, keeping +Y as close to world up as possible.
    pub fn facing_origin(translation: Vector3<f64>) -> Quaternion<f64> {
        if translation.magnitude2() == 0.0 {
            return Quaternion::one();
        }

        let forward = (-translation).normalize();
        let mut up = Vector3::unit_y();
        // over a pole world up is parallel to forward
        if up.cross(forward).magnitude2() < 1e-12 {
            up = Vector3::unit_z();
        }
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        Quaternion::from(Matrix3::from_cols(right, up, forward))
    }
}
