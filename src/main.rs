use {
    bevy::{log::LogPlugin, prelude::*},
    core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,core=debug,\
                    dragging=debug,\
                    crafting_station=debug,\
                    station_assets=debug"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .run();
}
