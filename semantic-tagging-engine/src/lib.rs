//! Semantic scene tagging for segmentation rendering.
//!
//! Derives a semantic class for every renderable surface from its asset's
//! storage path and writes the class code into a per-surface stencil
//! channel. A downstream render pass turns those codes into a flat-colour
//! segmentation image alongside the normal render; this crate only owns
//! the classification and annotation side.

pub mod engine;

pub use engine::settings::TaggerSettings;
pub use engine::stencil::SemanticStencil;
pub use engine::tagger::TagSweepState;

use bevy::prelude::*;
use bevy::render::extract_component::ExtractComponentPlugin;
use bevy_common_assets::json::JsonAssetPlugin;

use engine::settings::{SettingsLoader, apply_loaded_settings, start_settings_load};
use engine::stencil::ensure_stencil_channels;
use engine::tagger::{
    request_startup_sweep, run_tag_sweep, tag_trigger_system, trigger_sweep_on_new_surfaces,
};

/// Adds the tag sweep systems, settings loading, and the stencil channel
/// extraction used by the segmentation render pass.
pub struct SemanticTaggingPlugin;

impl Plugin for SemanticTaggingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<TaggerSettings>::new(&["settings.json"]))
            .add_plugins(ExtractComponentPlugin::<SemanticStencil>::default())
            .init_resource::<TagSweepState>()
            .init_resource::<TaggerSettings>()
            .init_resource::<SettingsLoader>()
            .add_systems(Startup, (start_settings_load, request_startup_sweep))
            .add_systems(
                Update,
                (
                    apply_loaded_settings,
                    ensure_stencil_channels,
                    trigger_sweep_on_new_surfaces,
                    tag_trigger_system,
                    run_tag_sweep,
                )
                    .chain(),
            );
    }
}
