use bevy_ecs::{component::Component, entity::Entity};

use crate::{
    components::{
        geo::CartesianPoint,
        iss::{IssComponent, TransformComponent},
    },
    systems::{polling::PositionSink, scene::SceneSystem},
};

/// Headless scene holding the globe's tracked markers.
///
/// Stands in for the renderer: it accepts positions from the polling loop
/// and keeps the marker transforms that a drawing backend would read.
pub struct World {
    ecs: bevy_ecs::world::World,
    iss: Entity,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        let mut ecs = bevy_ecs::world::World::new();
        let iss = ecs
            .spawn((IssComponent::default(), TransformComponent::default()))
            .id();
        Self { ecs, iss }
    }

    pub fn iss_entity(&self) -> Entity {
        self.iss
    }

    pub fn new_entity(&mut self) -> Entity {
        self.ecs.spawn_empty().id()
    }

    pub fn add_component_to_entity<ComponentType: Component>(
        &mut self,
        entity: Entity,
        component: ComponentType,
    ) {
        if let Some(mut entity) = self.ecs.get_entity_mut(entity) {
            entity.insert(component);
        }
    }

    pub fn get_component<ComponentType: Component>(
        &self,
        entity: Entity,
    ) -> Option<&ComponentType> {
        self.ecs.get::<ComponentType>(entity)
    }

    pub fn iss_transform(&self) -> Option<&TransformComponent> {
        self.get_component::<TransformComponent>(self.iss)
    }
}

impl PositionSink for World {
    fn set_position(&mut self, point: CartesianPoint) {
        let moved = SceneSystem::place_markers(&mut self.ecs, point);
        tracing::trace!(moved, x = point.x, y = point.y, z = point.z, "repositioned markers");
    }
}
