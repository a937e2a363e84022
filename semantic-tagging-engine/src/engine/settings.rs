use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::path::{ASSET_ROOT_SEGMENT, RELATIVE_SETTINGS_PATH};

/// Runtime tagger settings as a Bevy asset. Mirrors the JSON file exactly;
/// omitted fields fall back to their defaults.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
#[serde(default)]
pub struct TaggerSettings {
    /// Root segment prepended when canonicalising asset paths.
    pub asset_root: String,
    /// Emit a per-surface log line for every swept component.
    pub debug_log: bool,
}

impl Default for TaggerSettings {
    fn default() -> Self {
        Self {
            asset_root: ASSET_ROOT_SEGMENT.to_string(),
            debug_log: false,
        }
    }
}

/// Tracks the in-flight settings load so it is applied exactly once.
#[derive(Resource, Default)]
pub struct SettingsLoader {
    pub handle: Option<Handle<TaggerSettings>>,
    pub resolved: bool,
}

/// Starts loading the settings file from the asset root.
pub fn start_settings_load(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(RELATIVE_SETTINGS_PATH));
}

/// Applies the settings once loaded. A missing or unreadable file keeps
/// the defaults; either way the sweep is unblocked.
pub fn apply_loaded_settings(
    mut loader: ResMut<SettingsLoader>,
    settings_assets: Res<Assets<TaggerSettings>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loader.resolved {
        return;
    }

    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(settings) = settings_assets.get(&handle) {
        info!("✓ Tagger settings loaded");
        commands.insert_resource(settings.clone());
        loader.resolved = true;
    } else if matches!(asset_server.load_state(handle.id()), LoadState::Failed(_)) {
        warn!("Tagger settings not found, using defaults");
        loader.resolved = true;
    }
}
