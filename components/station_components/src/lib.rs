//! Components for crafting stations, their snap points and inventory holders.

use bevy::prelude::*;

pub struct StationComponentsPlugin;

impl Plugin for StationComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CraftingStation>()
            .register_type::<SnapPoint>()
            .register_type::<ProductTemplate>()
            .register_type::<StationEnabled>()
            .register_type::<DragSubscriptions>()
            .register_type::<CraftingStats>()
            .register_type::<ItemHolder>()
            .register_type::<Product>();
    }
}

/// A fixed position that accepts a single ingredient of one category.
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct SnapPoint {
    pub position: Vec3,
    pub required_ingredient: String,
    /// Ingredient currently locked into this point. Occupied iff `Some`.
    pub snapped: Option<Entity>,
}

impl SnapPoint {
    pub fn new(position: Vec3, required_ingredient: impl Into<String>) -> Self {
        Self {
            position,
            required_ingredient: required_ingredient.into(),
            snapped: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.snapped.is_some()
    }
}

/// Blueprint for the item produced when every snap point is filled.
#[derive(Reflect, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTemplate {
    pub id: String,
    pub display_name: String,
}

/// A station that consumes snapped ingredients and produces items into holders.
///
/// Configured once at spawn time; only the snap point occupancy changes afterwards.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
#[require(DragSubscriptions, CraftingStats)]
pub struct CraftingStation {
    pub snap_points: Vec<SnapPoint>,
    /// Drops must land strictly closer than this to a snap point.
    pub snap_range: f32,
    pub product: ProductTemplate,
    /// Product instances attempted per completion.
    pub spawn_count: u32,
    /// Holders searched in order for free capacity.
    pub holders: Vec<Entity>,
}

impl CraftingStation {
    /// Index of the closest free snap point of `category` within snap range.
    /// Ties keep the first point in configured order.
    pub fn find_snap_target(&self, category: &str, position: Vec3) -> Option<usize> {
        let mut closest: Option<(usize, f32)> = None;

        for (index, point) in self.snap_points.iter().enumerate() {
            if point.is_occupied() || point.required_ingredient != category {
                continue;
            }

            let distance = position.distance(point.position);
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }

        closest
            .filter(|&(_, distance)| distance < self.snap_range)
            .map(|(index, _)| index)
    }

    /// Locks `ingredient` into the snap point at `index` and returns its position.
    pub fn occupy(&mut self, index: usize, ingredient: Entity) -> Option<Vec3> {
        let point = self.snap_points.get_mut(index)?;
        if point.is_occupied() {
            return None;
        }
        point.snapped = Some(ingredient);
        Some(point.position)
    }

    pub fn is_complete(&self) -> bool {
        self.snap_points.iter().all(SnapPoint::is_occupied)
    }

    pub fn occupied_count(&self) -> usize {
        self.snap_points.iter().filter(|p| p.is_occupied()).count()
    }

    /// Empties every snap point, returning the ingredients that were held.
    pub fn clear_slots(&mut self) -> Vec<Entity> {
        self.snap_points
            .iter_mut()
            .filter_map(|point| point.snapped.take())
            .collect()
    }
}

/// Marker for a station that is subscribed to the drag lifecycle.
/// Adding it subscribes, removing it unsubscribes.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component, Default)]
pub struct StationEnabled;

/// Draggables a station has registered itself with.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
pub struct DragSubscriptions {
    pub draggables: Vec<Entity>,
}

impl DragSubscriptions {
    /// Returns false if the draggable is already known.
    pub fn register(&mut self, draggable: Entity) -> bool {
        if self.draggables.contains(&draggable) {
            return false;
        }
        self.draggables.push(draggable);
        true
    }

    pub fn forget(&mut self, draggable: Entity) {
        self.draggables.retain(|&e| e != draggable);
    }
}

#[derive(Component, Reflect, Debug, Clone, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CraftingStats {
    pub crafted: u32,
    pub capacity_warnings: u32,
}

/// Capacity-bounded container that takes ownership of produced items.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
#[require(Transform)]
pub struct ItemHolder {
    pub capacity: usize,
    pub items: Vec<Entity>,
}

impl ItemHolder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn can_add_item(&self) -> bool {
        self.items.len() < self.capacity
    }

    pub fn add_item(&mut self, item: Entity) -> bool {
        if !self.can_add_item() {
            return false;
        }
        self.items.push(item);
        true
    }
}

/// A finished item produced by a station.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Component)]
#[require(Transform)]
pub struct Product {
    pub id: String,
}

/// Instantiates `template` at `position` with no rotation.
pub fn spawn_product(commands: &mut Commands, template: &ProductTemplate, position: Vec3) -> Entity {
    commands
        .spawn((
            Product {
                id: template.id.clone(),
            },
            Name::new(template.display_name.clone()),
            Transform::from_translation(position),
        ))
        .id()
}
