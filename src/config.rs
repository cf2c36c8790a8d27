use crate::{prep_error::PrepError, types::RigOverride};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Name markers used by the import heuristics. Fields missing from a YAML
/// document keep their default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Character names containing this are animation-only exports
    pub motion_marker: String,
    /// Asset paths containing this (ignoring case) are LOD exports
    pub lod_path_marker: String,
    /// Rig mode used when the generation is unknown
    pub rig_override: RigOverride,
    /// Clips with names containing any of these are left out of the animator
    /// controller
    pub controller_clip_excludes: Vec<String>,
    pub body_mesh_names: Vec<String>,
    pub body_material_marker: String,
    /// A hair material name contains all of these
    pub hair_material_markers: Vec<String>,
    pub head_shader: String,
    pub skin_shader: String,
    pub hair_shader: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            motion_marker: "_Motion".to_string(),
            lod_path_marker: "_lod".to_string(),
            rig_override: RigOverride::Generic,
            controller_clip_excludes: vec![
                "__preview__".to_string(),
                "t-pose".to_string(),
            ],
            body_mesh_names: vec![
                "CC_Base_Body".to_string(),
                "CC_Game_Body".to_string(),
            ],
            body_material_marker: "Std_Skin_".to_string(),
            hair_material_markers: vec![
                "Hair".to_string(),
                "Transparency".to_string(),
            ],
            head_shader: "RL_HeadShader".to_string(),
            skin_shader: "RL_SkinShader".to_string(),
            hair_shader: "RL_HairShader".to_string(),
        }
    }
}

impl ImportConfig {
    /// Parses a YAML document
    ///
    /// # Errors
    /// May return `PrepError`
    pub fn from_yaml(yaml: &str) -> Result<Self, PrepError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a YAML file
    ///
    /// # Errors
    /// May return `PrepError`
    pub fn load(path: &Path) -> Result<Self, PrepError> {
        let yaml = fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)?;
        info!("loaded import config from {:?}", path);
        Ok(config)
    }

    /// Serializes to a YAML document
    ///
    /// # Errors
    /// May return `PrepError`
    pub fn to_yaml(&self) -> Result<String, PrepError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
