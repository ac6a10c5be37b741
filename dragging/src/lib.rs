//! Drag notification source.
//!
//! Announces new draggables, fans "drag ended" out to every registered
//! listener and bridges engine pointer drags onto [`Draggable`] entities.

use {bevy::prelude::*, drag_components::DragComponentsPlugin};

pub mod systems;

#[cfg(test)]
mod tests;

pub use drag_components::{DragEndListeners, Draggable, Ingredient};

pub struct DraggingPlugin;

impl Plugin for DraggingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DragComponentsPlugin)
            .add_observer(systems::announce_new_draggable)
            .add_observer(systems::notify_drag_listeners)
            .add_observer(systems::follow_pointer_drag)
            .add_observer(systems::release_pointer_drag);
    }
}
