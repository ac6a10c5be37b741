use {
    crate::{CraftingStation, CraftingStats, DragSubscriptions, ItemHolder, StationEnabled},
    bevy::{picking::Pickable, prelude::*},
    drag_components::{DragEndListeners, Draggable, Ingredient},
    drag_events::{DraggableCreated, IngredientDropped},
    station_components::spawn_product,
    station_events::{HolderCapacityExhausted, IngredientSnapped, ProductCrafted},
};

type HolderQuery<'w, 's> = Query<'w, 's, (&'static mut ItemHolder, &'static Transform), Without<Draggable>>;

/// Observer: an enabled station subscribes to every draggable already in the world.
pub fn subscribe_enabled_station(
    trigger: On<Add, StationEnabled>,
    mut stations: Query<&mut DragSubscriptions>,
    mut draggables: Query<(Entity, &mut DragEndListeners), With<Draggable>>,
) {
    let station = trigger.event().entity;
    let Ok(mut subscriptions) = stations.get_mut(station) else {
        return;
    };

    for (draggable, mut listeners) in draggables.iter_mut() {
        subscribe(station, &mut subscriptions, draggable, &mut listeners);
    }

    debug!(
        "Station {:?} enabled with {} draggables",
        station,
        subscriptions.draggables.len()
    );
}

/// Observer: a disabled (or despawned) station leaves every listener list it joined.
pub fn unsubscribe_disabled_station(
    trigger: On<Remove, StationEnabled>,
    mut stations: Query<&mut DragSubscriptions>,
    mut listeners: Query<&mut DragEndListeners>,
) {
    let station = trigger.event().entity;
    let Ok(mut subscriptions) = stations.get_mut(station) else {
        return;
    };

    for draggable in subscriptions.draggables.drain(..) {
        if let Ok(mut listeners) = listeners.get_mut(draggable) {
            listeners.unsubscribe(station);
        }
    }

    debug!("Station {:?} disabled", station);
}

/// Observer: every enabled station subscribes to a newly created draggable.
pub fn register_new_draggable(
    trigger: On<DraggableCreated>,
    mut stations: Query<(Entity, &mut DragSubscriptions), With<StationEnabled>>,
    mut listeners: Query<&mut DragEndListeners>,
) {
    let draggable = trigger.event().draggable;
    let Ok(mut draggable_listeners) = listeners.get_mut(draggable) else {
        return;
    };

    for (station, mut subscriptions) in stations.iter_mut() {
        subscribe(station, &mut subscriptions, draggable, &mut draggable_listeners);
    }
}

/// Observer: a despawned (or no longer draggable) entity leaves every station registry.
pub fn forget_removed_draggable(
    trigger: On<Remove, Draggable>,
    mut stations: Query<&mut DragSubscriptions>,
) {
    let draggable = trigger.event().entity;
    for mut subscriptions in stations.iter_mut() {
        subscriptions.forget(draggable);
    }
}

fn subscribe(
    station: Entity,
    subscriptions: &mut DragSubscriptions,
    draggable: Entity,
    listeners: &mut DragEndListeners,
) {
    if subscriptions.register(draggable) {
        listeners.subscribe(station);
    }
}

/// Observer: locks a dropped ingredient into the closest compatible free snap point,
/// then produces once every point is filled.
pub fn snap_dropped_ingredient(
    trigger: On<IngredientDropped>,
    mut commands: Commands,
    mut stations: Query<
        (&mut CraftingStation, &mut CraftingStats, &mut DragSubscriptions),
        With<StationEnabled>,
    >,
    mut ingredients: Query<(&mut Transform, &mut Draggable, Option<&Ingredient>)>,
    mut holders: HolderQuery<'_, '_>,
) {
    let event = trigger.event();
    let (station_entity, ingredient) = (event.entity, event.ingredient);

    let Ok((mut station, mut stats, mut subscriptions)) = stations.get_mut(station_entity) else {
        return;
    };

    let Ok((mut transform, mut draggable, category)) = ingredients.get_mut(ingredient) else {
        return;
    };

    // Another station may already have claimed it.
    if !draggable.enabled {
        return;
    }

    let Some(category) = category else {
        debug!("Dropped {:?} has no ingredient category", ingredient);
        return;
    };

    let Some(index) = station.find_snap_target(&category.category, transform.translation) else {
        debug!(
            "No free '{}' snap point in range of {:?}",
            category.category, station_entity
        );
        return;
    };

    let Some(position) = station.occupy(index, ingredient) else {
        return;
    };

    transform.translation = position;
    draggable.disable_dragging();
    commands.entity(ingredient).insert(Pickable::IGNORE);

    debug!(
        "Snapped '{}' {:?} into point {} of {:?}",
        category.category, ingredient, index, station_entity
    );
    commands.trigger(IngredientSnapped {
        entity: station_entity,
        ingredient,
        snap_point: index,
    });

    if station.is_complete() {
        info!("All ingredients in place for '{}'", station.product.id);
        produce(
            &mut commands,
            station_entity,
            &mut station,
            &mut stats,
            &mut subscriptions,
            &mut holders,
        );
    }
}

/// Spawns up to `spawn_count` products, one per holder with capacity.
///
/// Slots are cleared after every produced unit, and once more when no holder
/// has room, so only the first unit of a batch consumes ingredients.
fn produce(
    commands: &mut Commands,
    station_entity: Entity,
    station: &mut CraftingStation,
    stats: &mut CraftingStats,
    subscriptions: &mut DragSubscriptions,
    holders: &mut HolderQuery<'_, '_>,
) {
    for _ in 0..station.spawn_count {
        let Some((holder_entity, position)) = find_available_holder(&station.holders, holders)
        else {
            consume_ingredients(commands, station, subscriptions);
            stats.capacity_warnings += 1;
            warn!("No available holders for new '{}'", station.product.id);
            commands.trigger(HolderCapacityExhausted {
                entity: station_entity,
                product_id: station.product.id.clone(),
            });
            break;
        };

        let product = spawn_product(commands, &station.product, position);
        if let Ok((mut holder, _)) = holders.get_mut(holder_entity) {
            holder.add_item(product);
        }
        stats.crafted += 1;

        info!(
            "Crafted '{}' {:?} into holder {:?}",
            station.product.id, product, holder_entity
        );
        commands.trigger(ProductCrafted {
            entity: station_entity,
            product,
            holder: holder_entity,
        });

        consume_ingredients(commands, station, subscriptions);
    }
}

fn find_available_holder(candidates: &[Entity], holders: &HolderQuery<'_, '_>) -> Option<(Entity, Vec3)> {
    candidates.iter().find_map(|&entity| {
        let (holder, transform) = holders.get(entity).ok()?;
        holder
            .can_add_item()
            .then_some((entity, transform.translation))
    })
}

/// Empties every snap point and despawns the ingredients that were held.
pub fn consume_ingredients(
    commands: &mut Commands,
    station: &mut CraftingStation,
    subscriptions: &mut DragSubscriptions,
) {
    for ingredient in station.clear_slots() {
        subscriptions.forget(ingredient);
        if let Ok(mut entity) = commands.get_entity(ingredient) {
            entity.despawn();
        }
    }
}
