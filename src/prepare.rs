//! Single entry point running every import heuristic over one scene

use crate::{
    classifier,
    clips::{self, ClipDescriptor},
    config::ImportConfig,
    lod::{self, LodGroup},
    mesh_class,
    prep_error::PrepError,
    rig::{self, RigPlan, RigRequest},
    scene_import::Scene,
    types::{RigGeneration, RigOverride},
    util::icontains,
};
use log::info;
use serde::{Deserialize, Serialize};

/// Inputs that come from outside the scene file
#[derive(Clone, Debug, Default)]
pub struct PrepareRequest<'a> {
    /// Project path of the asset, used to recognize LOD exports
    pub asset_path: &'a str,
    /// Generation key from the exporter's metadata, if any
    pub generation_key: Option<&'a str>,
    pub has_metadata: bool,
    pub rig_override: Option<RigOverride>,
}

/// What kind of prefab to build for the character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PrefabPlan {
    /// Animation-only exports get no prefab
    None,
    Single,
    LodGroup(LodGroup),
}

/// Everything decided about one character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreparedCharacter {
    pub name: String,
    pub generation: RigGeneration,
    pub rig: RigPlan,
    pub prefab: PrefabPlan,
    /// True if normalization changed any clip settings
    pub clips_changed: bool,
    pub controller_clips: Vec<String>,
    pub body_meshes: Vec<String>,
    pub hair_meshes: Vec<String>,
}

impl PreparedCharacter {
    /// Serializes to a YAML report
    ///
    /// # Errors
    /// May return `PrepError`
    pub fn to_yaml(&self) -> Result<String, PrepError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn clip_names(clips: &[&ClipDescriptor]) -> Vec<String> {
    clips.iter().map(|c| c.name.clone()).collect()
}

/// Runs classification, rig planning, prefab planning, clip normalization
/// and mesh classification over `scene`. Clip settings are normalized in
/// place, everything else is read only. Running it again on the same scene
/// gives the same result except that `clips_changed` is false.
#[must_use]
pub fn prepare(
    scene: &mut Scene,
    request: &PrepareRequest,
    config: &ImportConfig,
) -> PreparedCharacter {
    let generation = classifier::classify(
        request.generation_key,
        Some(&scene.skeleton),
        Some(scene.renderers.as_slice()),
    );

    let rig_request = RigRequest {
        character_name: &scene.name,
        has_metadata: request.has_metadata,
        rig_override: request.rig_override,
    };
    let rig = rig::plan_rig(generation, &scene.skeleton, &rig_request, config);

    let prefab = if icontains(&scene.name, &config.motion_marker) {
        PrefabPlan::None
    } else if lod::wants_lod_group(
        request.asset_path,
        &scene.renderers,
        config,
    ) {
        PrefabPlan::LodGroup(lod::group_lods(&scene.renderers))
    } else {
        PrefabPlan::Single
    };

    let clips_changed = clips::normalize(&mut scene.clips);
    let controller_clips =
        clip_names(&clips::controller_clips(&scene.clips, config));

    let body_meshes = scene
        .renderers
        .iter()
        .filter(|r| mesh_class::is_body_mesh(r, config))
        .map(|r| r.name.clone())
        .collect();
    let hair_meshes = scene
        .renderers
        .iter()
        .filter(|r| mesh_class::is_hair_mesh(r, config))
        .map(|r| r.name.clone())
        .collect();

    info!(
        "prepared {:?}: {:?}, {:?}, clips_changed={}",
        scene.name, generation, rig.animation_type, clips_changed
    );
    PreparedCharacter {
        name: scene.name.clone(),
        generation,
        rig,
        prefab,
        clips_changed,
        controller_clips,
        body_meshes,
        hair_meshes,
    }
}
