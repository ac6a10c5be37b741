use {
    bevy::prelude::*,
    crafting_station::CraftingStationPlugin,
    dragging::DraggingPlugin,
    states::GameState,
    station_assets::{StationAssetsPlugin, StationDefinition},
};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<WorkshopAssets>()
            .add_plugins((StationAssetsPlugin, DraggingPlugin, CraftingStationPlugin))
            .add_observer(systems::on_product_crafted)
            .add_observer(systems::on_holders_full)
            .add_systems(Startup, (setup_camera, start_loading))
            .add_systems(Update, check_assets.run_if(in_state(GameState::Loading)))
            .add_systems(OnEnter(GameState::Running), systems::spawn_workshop);
    }
}

#[derive(Resource, Default)]
pub struct WorkshopAssets {
    pub station: Handle<StationDefinition>,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn start_loading(mut assets: ResMut<WorkshopAssets>, asset_server: Res<AssetServer>) {
    info!("started loading assets");
    assets.station = asset_server.load("stations/sunlight_can.station.ron");
}

fn check_assets(
    mut next_state: ResMut<NextState<GameState>>,
    workshop_assets: Res<WorkshopAssets>,
    asset_server: Res<AssetServer>,
) {
    if asset_server.is_loaded_with_dependencies(&workshop_assets.station) {
        info!("assets loaded");
        next_state.set(GameState::Running);
    }
}
