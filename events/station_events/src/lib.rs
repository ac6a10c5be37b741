use bevy::prelude::*;

/// Triggered on a station when an ingredient is locked into one of its snap points.
#[derive(EntityEvent, Debug, Clone)]
pub struct IngredientSnapped {
    #[event_target]
    pub entity: Entity,
    pub ingredient: Entity,
    pub snap_point: usize,
}

/// Triggered on a station for every product instance handed to a holder.
#[derive(EntityEvent, Debug, Clone)]
pub struct ProductCrafted {
    #[event_target]
    pub entity: Entity,
    pub product: Entity,
    pub holder: Entity,
}

/// Triggered on a station when production found no holder with free capacity.
/// The ingredients are consumed regardless.
#[derive(EntityEvent, Debug, Clone)]
pub struct HolderCapacityExhausted {
    #[event_target]
    pub entity: Entity,
    pub product_id: String,
}
