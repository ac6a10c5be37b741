use {
    crate::*,
    bevy::prelude::*,
    drag_events::{DragEnded, DraggableCreated, IngredientDropped},
};

#[derive(Resource, Default)]
struct Seen {
    created: Vec<Entity>,
    dropped: Vec<(Entity, Entity)>,
}

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(DraggingPlugin)
        .init_resource::<Seen>()
        .add_observer(|trigger: On<DraggableCreated>, mut seen: ResMut<Seen>| {
            seen.created.push(trigger.event().draggable);
        })
        .add_observer(|trigger: On<IngredientDropped>, mut seen: ResMut<Seen>| {
            let event = trigger.event();
            seen.dropped.push((event.entity, event.ingredient));
        });
    app.update();
    app
}

#[test]
fn test_new_draggable_is_announced() {
    let mut app = setup_app();

    let draggable = app.world_mut().spawn(Draggable::default()).id();
    app.update();

    let seen = app.world().resource::<Seen>();
    assert_eq!(seen.created, vec![draggable]);
    assert!(app.world().get::<DragEndListeners>(draggable).is_some());
}

#[test]
fn test_drag_end_reaches_every_listener() {
    let mut app = setup_app();

    let first = app.world_mut().spawn_empty().id();
    let second = app.world_mut().spawn_empty().id();

    let mut listeners = DragEndListeners::default();
    listeners.subscribe(first);
    listeners.subscribe(second);
    let draggable = app
        .world_mut()
        .spawn((Draggable::default(), listeners))
        .id();

    app.world_mut().trigger(DragEnded { entity: draggable });
    app.update();

    let seen = app.world().resource::<Seen>();
    assert_eq!(seen.dropped, vec![(first, draggable), (second, draggable)]);
}

#[test]
fn test_locked_draggable_is_not_forwarded() {
    let mut app = setup_app();

    let listener = app.world_mut().spawn_empty().id();
    let mut listeners = DragEndListeners::default();
    listeners.subscribe(listener);
    let draggable = app
        .world_mut()
        .spawn((Draggable { enabled: false }, listeners))
        .id();

    app.world_mut().trigger(DragEnded { entity: draggable });
    app.update();

    assert!(app.world().resource::<Seen>().dropped.is_empty());
}

#[test]
fn test_drag_end_on_plain_entity_is_ignored() {
    let mut app = setup_app();

    let plain = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().trigger(DragEnded { entity: plain });
    app.update();

    assert!(app.world().resource::<Seen>().dropped.is_empty());
}
