//! Chooses how a character is rigged once its generation is known

use crate::{
    config::ImportConfig,
    retarget::{self, HumanDescription},
    skeleton::Skeleton,
    types::{RigGeneration, RigOverride},
    util::icontains,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Animation rig type requested from the runtime importer
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AnimationType {
    None,
    Human,
    Generic,
}

impl From<RigOverride> for AnimationType {
    fn from(rig_override: RigOverride) -> Self {
        match rig_override {
            RigOverride::None => Self::None,
            RigOverride::Humanoid => Self::Human,
            RigOverride::Generic => Self::Generic,
        }
    }
}

/// Per character inputs besides the scene itself
#[derive(Clone, Debug, Default)]
pub struct RigRequest<'a> {
    pub character_name: &'a str,
    /// The exporter's character metadata was found alongside the asset
    pub has_metadata: bool,
    /// Replaces the configured rig override when set
    pub rig_override: Option<RigOverride>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigPlan {
    pub animation_type: AnimationType,
    /// Humanoid avatar description, only present when retargeting
    pub human: Option<HumanDescription>,
}

/// Plan for characters that can't be retargeted. Animation-only exports keep
/// the humanoid type so their clips still import as humanoid motion.
fn fallback(request: &RigRequest, config: &ImportConfig) -> RigPlan {
    let is_motion = request.character_name.contains(&config.motion_marker);
    let animation_type = if is_motion {
        AnimationType::Human
    } else {
        request.rig_override.unwrap_or(config.rig_override).into()
    };
    info!(
        "{:?} is not retargeted, animation type {:?}",
        request.character_name, animation_type
    );
    RigPlan {
        animation_type,
        human: None,
    }
}

/// Decides the rig for a character of the given generation
#[must_use]
pub fn plan_rig(
    generation: RigGeneration,
    skeleton: &Skeleton,
    request: &RigRequest,
    config: &ImportConfig,
) -> RigPlan {
    let Some(mut human) = retarget::build_mapping(generation, skeleton) else {
        return fallback(request, config);
    };
    if human.bones.is_empty() {
        warn!(
            "no {:?} bones found in {:?}",
            generation, request.character_name
        );
        return fallback(request, config);
    }

    // Motion exports without metadata only carry animation, the avatar is
    // built from the character they are applied to
    if !request.has_metadata
        && icontains(request.character_name, &config.motion_marker)
    {
        human.skeleton.clear();
    }

    RigPlan {
        animation_type: AnimationType::Human,
        human: Some(human),
    }
}
