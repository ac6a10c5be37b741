use bevy::prelude::*;

/// Fired globally whenever a new draggable enters the world.
#[derive(Event, Debug, Clone)]
pub struct DraggableCreated {
    pub draggable: Entity,
}

/// Triggered on a draggable when the drag system releases it.
#[derive(EntityEvent, Debug, Clone)]
pub struct DragEnded {
    /// The draggable that was dropped.
    #[event_target]
    pub entity: Entity,
}

/// Delivered to each listener registered on a dropped draggable.
#[derive(EntityEvent, Debug, Clone)]
pub struct IngredientDropped {
    /// The listening station.
    #[event_target]
    pub entity: Entity,
    pub ingredient: Entity,
}
