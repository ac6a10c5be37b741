use {
    crate::WorkshopAssets,
    bevy::{picking::Pickable, prelude::*},
    drag_components::{Draggable, Ingredient},
    station_assets::{StationDefinition, spawn_station},
    station_components::CraftingStation,
    station_events::{HolderCapacityExhausted, ProductCrafted},
};

const PIECE_SIZE: f32 = 48.0;
const INGREDIENT_OFFSET: Vec3 = Vec3::new(0.0, 160.0, 1.0);
const SLOT_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 0.6);
const HOLDER_COLOR: Color = Color::srgba(0.2, 0.25, 0.4, 0.8);
const PRODUCT_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// Spawns the station from its definition along with one loose ingredient per snap point.
pub fn spawn_workshop(
    mut commands: Commands,
    workshop_assets: Res<WorkshopAssets>,
    definitions: Res<Assets<StationDefinition>>,
) {
    let Some(def) = definitions.get(&workshop_assets.station) else {
        warn!("Station definition not loaded");
        return;
    };

    let station = match spawn_station(&mut commands, def) {
        Ok(station) => station,
        Err(err) => {
            error!("Failed to spawn station: {err}");
            return;
        }
    };
    info!("spawned workshop '{}' -> {:?}", def.display_name, station);

    for slot in &def.slots {
        let position = Vec3::from_array(slot.position);

        commands.spawn((
            Sprite::from_color(SLOT_COLOR, Vec2::splat(PIECE_SIZE + 8.0)),
            Transform::from_translation(position - Vec3::Z),
            Pickable::IGNORE,
        ));

        commands.spawn((
            Draggable::default(),
            Ingredient::new(slot.required_ingredient.clone()),
            Name::new(slot.required_ingredient.clone()),
            Sprite::from_color(ingredient_color(&slot.required_ingredient), Vec2::splat(PIECE_SIZE)),
            Transform::from_translation(position + INGREDIENT_OFFSET),
        ));
    }

    for holder in &def.holders {
        commands.spawn((
            Sprite::from_color(HOLDER_COLOR, Vec2::splat(PIECE_SIZE + 16.0)),
            Transform::from_translation(Vec3::from_array(holder.position) - Vec3::Z),
            Pickable::IGNORE,
        ));
    }
}

fn ingredient_color(category: &str) -> Color {
    match category {
        "tortilla" => Color::srgb(0.93, 0.82, 0.6),
        "meat" => Color::srgb(0.6, 0.2, 0.15),
        "cheese" => Color::srgb(1.0, 0.75, 0.1),
        _ => Color::srgb(0.7, 0.7, 0.7),
    }
}

/// Observer: gives crafted products a sprite so they show up in their holder.
pub fn on_product_crafted(trigger: On<ProductCrafted>, mut commands: Commands) {
    commands.entity(trigger.event().product).insert((
        Sprite::from_color(PRODUCT_COLOR, Vec2::splat(PIECE_SIZE * 0.75)),
        Pickable::IGNORE,
    ));
}

pub fn on_holders_full(trigger: On<HolderCapacityExhausted>, stations: Query<&Name, With<CraftingStation>>) {
    let event = trigger.event();
    let name = stations
        .get(event.entity)
        .map(|n| n.as_str().to_string())
        .unwrap_or_else(|_| format!("{:?}", event.entity));
    warn!("{} discarded a '{}': every holder is full", name, event.product_id);
}
