use bevy::prelude::*;
use bevy::render::mesh::skinning::SkinnedMesh;

use constants::class::SemanticClass;
use constants::path::classify_path;

use crate::engine::settings::{SettingsLoader, TaggerSettings};
use crate::engine::stencil::SemanticStencil;

/// Shared flag between the trigger systems and the sweep: triggers set
/// `requested`, the sweep consumes it.
#[derive(Resource, Default)]
pub struct TagSweepState {
    pub requested: bool,
}

/// Requests the initial sweep when the scene comes up.
pub fn request_startup_sweep(mut state: ResMut<TagSweepState>) {
    state.requested = true;
}

/// Re-runs the sweep whenever new annotatable surfaces appear, so
/// asynchronously loaded scene content is tagged without user input.
pub fn trigger_sweep_on_new_surfaces(
    mut state: ResMut<TagSweepState>,
    new_surfaces: Query<Entity, Added<SemanticStencil>>,
) {
    if !new_surfaces.is_empty() {
        state.requested = true;
    }
}

/// Keyboard trigger for a full re-sweep.
pub fn tag_trigger_system(mut state: ResMut<TagSweepState>, keyboard: Res<ButtonInput<KeyCode>>) {
    if keyboard.just_pressed(KeyCode::KeyT) {
        state.requested = true;
        info!("Semantic tag sweep requested");
    }
}

/// Canonical root-relative form of an engine asset path:
/// `/<asset root>/<relative path>`.
pub fn canonical_asset_path(asset_root: &str, relative: &str) -> String {
    format!("/{}/{}", asset_root, relative)
}

/// Classifies one surface from its canonical asset path and writes its
/// stencil channel. The whole sweep is this per-surface function applied
/// independently to every surface: order-free and idempotent. Returns the
/// resolved class for logging.
pub fn tag_surface(path: &str, stencil: &mut SemanticStencil) -> SemanticClass {
    let class = classify_path(path);
    stencil.apply(class);
    class
}

/// Sweeps every annotatable surface in the scene once a sweep has been
/// requested and the settings load has resolved.
///
/// Static surfaces classify by their mesh asset's path; articulated
/// surfaces by their skeleton binding asset's path. Surfaces whose handle
/// resolves to no path (procedural geometry) are skipped.
pub fn run_tag_sweep(
    mut state: ResMut<TagSweepState>,
    loader: Res<SettingsLoader>,
    settings: Res<TaggerSettings>,
    asset_server: Res<AssetServer>,
    mut static_surfaces: Query<
        (Option<&Name>, &Mesh3d, &mut SemanticStencil),
        Without<SkinnedMesh>,
    >,
    mut skinned_surfaces: Query<(Option<&Name>, &SkinnedMesh, &mut SemanticStencil)>,
) {
    if !state.requested || !loader.resolved {
        return;
    }
    state.requested = false;

    let mut swept = 0usize;

    for (name, mesh, mut stencil) in static_surfaces.iter_mut() {
        let Some(path) = asset_server.get_path(mesh.0.id()) else {
            continue;
        };
        let canonical =
            canonical_asset_path(&settings.asset_root, &path.path().to_string_lossy());
        let class = tag_surface(&canonical, &mut stencil);
        swept += 1;

        if settings.debug_log {
            info!(
                "  + static surface {}: {}",
                surface_name(name),
                class.name()
            );
        }
    }

    for (name, skinned, mut stencil) in skinned_surfaces.iter_mut() {
        let Some(path) = asset_server.get_path(skinned.inverse_bindposes.id()) else {
            continue;
        };
        let canonical =
            canonical_asset_path(&settings.asset_root, &path.path().to_string_lossy());
        let class = tag_surface(&canonical, &mut stencil);
        swept += 1;

        if settings.debug_log {
            info!(
                "  + skinned surface {}: {}",
                surface_name(name),
                class.name()
            );
        }
    }

    info!("Semantic tag sweep complete ({} surfaces)", swept);
}

fn surface_name(name: Option<&Name>) -> &str {
    name.map(|n| n.as_str()).unwrap_or("<unnamed>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_surface_classifiable_path() {
        let mut stencil = SemanticStencil::default();
        let class = tag_surface("/Game/Static/Buildings/SM_Wall01", &mut stencil);
        assert_eq!(class, SemanticClass::Buildings);
        assert!(stencil.enabled);
        assert_eq!(stencil.value, 1);
    }

    #[test]
    fn test_tag_surface_shallow_path_leaves_channel_unchanged() {
        let mut stencil = SemanticStencil::default();
        tag_surface("/Game/Foo", &mut stencil);
        assert_eq!(stencil, SemanticStencil::default());

        // Prior annotation also survives a shallow path.
        let before = SemanticStencil {
            enabled: true,
            value: 9,
        };
        let mut stencil = before;
        tag_surface("/Game/Foo", &mut stencil);
        assert_eq!(stencil, before);
    }

    #[test]
    fn test_tag_surface_unknown_keyword_leaves_channel_unchanged() {
        let before = SemanticStencil {
            enabled: true,
            value: 4,
        };
        let mut stencil = before;
        let class = tag_surface("/Game/Static/Misc/SM_Unknown", &mut stencil);
        assert_eq!(class, SemanticClass::None);
        assert_eq!(stencil, before);
    }

    #[test]
    fn test_tag_surface_skeleton_asset_path() {
        let mut stencil = SemanticStencil::default();
        let class = tag_surface("/Game/Characters/Pedestrians/Ped_Asset", &mut stencil);
        assert_eq!(class, SemanticClass::Pedestrians);
        assert!(stencil.enabled);
        assert_eq!(stencil.value, 4);
    }

    #[test]
    fn test_tag_surface_is_idempotent() {
        let mut stencil = SemanticStencil::default();
        tag_surface("/assets/Static/Roads/Road_Straight.glb", &mut stencil);
        let after_first = stencil;
        tag_surface("/assets/Static/Roads/Road_Straight.glb", &mut stencil);
        assert_eq!(stencil, after_first);
    }

    #[test]
    fn test_retag_updates_value_in_place() {
        // Swapping a surface's asset between classifiable paths retags it
        // without the channel ever being disabled first.
        let mut stencil = SemanticStencil::default();
        tag_surface("/assets/Static/Roads/Road_01.glb", &mut stencil);
        assert_eq!(stencil.value, SemanticClass::Roads.stencil_value());

        tag_surface("/assets/Static/Vehicles/Car_01.glb", &mut stencil);
        assert!(stencil.enabled);
        assert_eq!(stencil.value, SemanticClass::Vehicles.stencil_value());
    }

    #[test]
    fn test_canonical_asset_path() {
        assert_eq!(
            canonical_asset_path("assets", "Static/Buildings/SM_Wall01.glb"),
            "/assets/Static/Buildings/SM_Wall01.glb"
        );
        // The keyword lands on the classified segment.
        let canonical = canonical_asset_path("assets", "Static/Buildings/SM_Wall01.glb");
        assert_eq!(classify_path(&canonical), SemanticClass::Buildings);
    }
}
