use {
    crate::{DragEndListeners, Draggable},
    bevy::prelude::*,
    drag_events::{DragEnded, DraggableCreated, IngredientDropped},
};

/// Observer: every new Draggable is announced so stations can subscribe to it.
pub fn announce_new_draggable(trigger: On<Add, Draggable>, mut commands: Commands) {
    let draggable = trigger.event().entity;
    debug!("Draggable {:?} created", draggable);
    commands.trigger(DraggableCreated { draggable });
}

/// Observer: forwards a finished drag to each registered listener, in order.
pub fn notify_drag_listeners(
    trigger: On<DragEnded>,
    mut commands: Commands,
    query: Query<(&Draggable, &DragEndListeners)>,
) {
    let ingredient = trigger.event().entity;

    let Ok((draggable, listeners)) = query.get(ingredient) else {
        debug!("Drag ended on {:?} which is not a draggable", ingredient);
        return;
    };

    if !draggable.enabled {
        return;
    }

    for listener in listeners.iter() {
        commands.trigger(IngredientDropped {
            entity: listener,
            ingredient,
        });
    }
}

/// Observer: moves an enabled draggable along with the pointer.
pub fn follow_pointer_drag(trigger: On<Pointer<Drag>>, mut query: Query<(&Draggable, &mut Transform)>) {
    let Ok((draggable, mut transform)) = query.get_mut(trigger.entity) else {
        return;
    };

    if draggable.enabled {
        // Screen space grows downwards, world space upwards.
        transform.translation.x += trigger.delta.x;
        transform.translation.y -= trigger.delta.y;
    }
}

/// Observer: a released pointer drag ends the drag of the draggable under it.
pub fn release_pointer_drag(
    trigger: On<Pointer<DragEnd>>,
    mut commands: Commands,
    query: Query<(), With<Draggable>>,
) {
    if query.contains(trigger.entity) {
        commands.trigger(DragEnded {
            entity: trigger.entity,
        });
    }
}
