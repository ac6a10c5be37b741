//! Crafting station asset definitions.
//!
//! Stations are loaded from `.station.ron` files and describe the snap points,
//! the product and the holders a station fills.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
    station_components::{CraftingStation, ItemHolder, ProductTemplate, SnapPoint, StationEnabled},
    thiserror::Error,
};

pub struct StationAssetsPlugin;

impl Plugin for StationAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<StationDefinition>::new(&["station.ron"]));
    }
}

/// Station definition loaded from `.station.ron` asset files.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct StationDefinition {
    /// Unique identifier (e.g., "sunlight_can")
    pub id: String,
    pub display_name: String,
    /// Maximum distance at which a dropped ingredient snaps into place
    #[serde(default = "default_snap_range")]
    pub snap_range: f32,
    /// Products attempted each time every snap point is filled
    #[serde(default = "default_spawn_count")]
    pub spawn_count: u32,
    pub slots: Vec<SlotDefinition>,
    pub product: ProductDefinition,
    /// Holders in the order they are searched for free capacity
    #[serde(default)]
    pub holders: Vec<HolderDefinition>,
}

fn default_snap_range() -> f32 {
    0.5
}

fn default_spawn_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotDefinition {
    pub position: [f32; 3],
    pub required_ingredient: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDefinition {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolderDefinition {
    pub position: [f32; 3],
    pub capacity: usize,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StationDefinitionError {
    #[error("station '{0}' has no snap points")]
    NoSlots(String),
    #[error("station '{id}' has invalid snap range {range}")]
    InvalidSnapRange { id: String, range: f32 },
    #[error("station '{0}' has a spawn count of zero")]
    ZeroSpawnCount(String),
    #[error("station '{id}' slot {slot} has no required ingredient")]
    MissingIngredient { id: String, slot: usize },
    #[error("station '{0}' has a product without an id")]
    MissingProductId(String),
}

impl StationDefinition {
    pub fn validate(&self) -> Result<(), StationDefinitionError> {
        if self.slots.is_empty() {
            return Err(StationDefinitionError::NoSlots(self.id.clone()));
        }

        if !self.snap_range.is_finite() || self.snap_range <= 0.0 {
            return Err(StationDefinitionError::InvalidSnapRange {
                id: self.id.clone(),
                range: self.snap_range,
            });
        }

        if self.spawn_count == 0 {
            return Err(StationDefinitionError::ZeroSpawnCount(self.id.clone()));
        }

        if let Some(slot) = self
            .slots
            .iter()
            .position(|s| s.required_ingredient.trim().is_empty())
        {
            return Err(StationDefinitionError::MissingIngredient {
                id: self.id.clone(),
                slot,
            });
        }

        if self.product.id.trim().is_empty() {
            return Err(StationDefinitionError::MissingProductId(self.id.clone()));
        }

        Ok(())
    }
}

/// Spawns the holders and the enabled station described by `def`.
/// Returns the station entity.
pub fn spawn_station(
    commands: &mut Commands,
    def: &StationDefinition,
) -> Result<Entity, StationDefinitionError> {
    def.validate()?;

    let holders = def
        .holders
        .iter()
        .enumerate()
        .map(|(index, holder)| {
            commands
                .spawn((
                    ItemHolder::new(holder.capacity),
                    Name::new(format!("{} holder {}", def.display_name, index)),
                    Transform::from_translation(Vec3::from_array(holder.position)),
                ))
                .id()
        })
        .collect();

    let station = CraftingStation {
        snap_points: def
            .slots
            .iter()
            .map(|slot| {
                SnapPoint::new(
                    Vec3::from_array(slot.position),
                    slot.required_ingredient.clone(),
                )
            })
            .collect(),
        snap_range: def.snap_range,
        product: ProductTemplate {
            id: def.product.id.clone(),
            display_name: def.product.display_name.clone(),
        },
        spawn_count: def.spawn_count,
        holders,
    };

    let entity = commands
        .spawn((station, StationEnabled, Name::new(def.display_name.clone())))
        .id();

    debug!("Spawned station '{}' -> {:?}", def.id, entity);
    Ok(entity)
}
