use bevy::prelude::*;
use bevy::render::extract_component::ExtractComponent;
use bevy::render::mesh::skinning::SkinnedMesh;
use constants::class::SemanticClass;

/// Per-surface annotation channel consumed by the segmentation render pass.
///
/// `value` holds the class code of the owning surface; `enabled` marks the
/// surface as participating in the segmentation output. Channels start
/// disabled and are only ever written by the tag sweep.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, ExtractComponent)]
pub struct SemanticStencil {
    pub enabled: bool,
    pub value: u8,
}

impl SemanticStencil {
    /// Writes `class` into the channel. `None` leaves the channel
    /// untouched: surfaces the classifier cannot place keep whatever
    /// annotation they already carry.
    pub fn apply(&mut self, class: SemanticClass) {
        if class != SemanticClass::None {
            self.enabled = true;
            self.value = class.stencil_value();
        }
    }
}

/// Attaches a disabled stencil channel to renderable entities that lack
/// one. Runs ahead of the sweep so tagging only ever mutates a channel
/// that already exists.
pub fn ensure_stencil_channels(
    mut commands: Commands,
    static_surfaces: Query<Entity, (With<Mesh3d>, Without<SemanticStencil>)>,
    skinned_surfaces: Query<Entity, (With<SkinnedMesh>, Without<SemanticStencil>)>,
) {
    for entity in static_surfaces.iter().chain(skinned_surfaces.iter()) {
        commands.entity(entity).insert(SemanticStencil::default());
    }
}
