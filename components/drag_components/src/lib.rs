//! Components describing draggable ingredient pieces.

use bevy::prelude::*;

pub struct DragComponentsPlugin;

impl Plugin for DragComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Draggable>()
            .register_type::<Ingredient>()
            .register_type::<DragEndListeners>();
    }
}

/// An entity the drag system is allowed to move around.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform, DragEndListeners)]
pub struct Draggable {
    /// False once the piece has been locked into place.
    pub enabled: bool,
}

impl Default for Draggable {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Draggable {
    pub fn disable_dragging(&mut self) {
        self.enabled = false;
    }
}

/// Ingredient category carried by a draggable (e.g. "tortilla", "meat").
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Component)]
pub struct Ingredient {
    pub category: String,
}

impl Ingredient {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

/// Entities notified when the drag of this draggable ends, in registration order.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct DragEndListeners(Vec<Entity>);

impl DragEndListeners {
    /// Returns false if the listener was already registered.
    pub fn subscribe(&mut self, listener: Entity) -> bool {
        if self.0.contains(&listener) {
            return false;
        }
        self.0.push(listener);
        true
    }

    pub fn unsubscribe(&mut self, listener: Entity) -> bool {
        let before = self.0.len();
        self.0.retain(|&e| e != listener);
        self.0.len() != before
    }

    pub fn contains(&self, listener: Entity) -> bool {
        self.0.contains(&listener)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
