use {bevy::prelude::*, station_components::StationComponentsPlugin};

pub mod systems;


// Re-export for convenience
pub use station_components::{
    CraftingStation, CraftingStats, DragSubscriptions, ItemHolder, Product, ProductTemplate,
    SnapPoint, StationEnabled,
};

/// Snaps dropped ingredients into crafting stations and runs production.
/// Expects a drag notification source (e.g. `DraggingPlugin`) to be installed.
pub struct CraftingStationPlugin;

impl Plugin for CraftingStationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(StationComponentsPlugin)
            .add_observer(systems::subscribe_enabled_station)
            .add_observer(systems::unsubscribe_disabled_station)
            .add_observer(systems::register_new_draggable)
            .add_observer(systems::forget_removed_draggable)
            .add_observer(systems::snap_dropped_ingredient);
    }
}
