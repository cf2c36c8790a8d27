use crate::types::LocalTransform;
use serde::{Deserialize, Serialize};

/// Static table entry mapping a canonical humanoid bone onto the bone name a
/// rig family uses for it
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoneMapping {
    pub canonical: &'static str,
    pub source: &'static str,
}

/// Joint rotation limits. Only the runtime defaults are currently used.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JointLimit {
    pub use_default_values: bool,
}

impl Default for JointLimit {
    fn default() -> Self {
        Self {
            use_default_values: true,
        }
    }
}

/// A mapped bone that exists in the character's skeleton
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanBone {
    pub canonical: String,
    pub source: String,
    pub limit: JointLimit,
}

/// Rest pose of one node of the character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkeletonBone {
    pub name: String,
    pub transform: LocalTransform,
}

/// Humanoid muscle settings applied to every retargeted character
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HumanoidTuning {
    pub upper_arm_twist: f32,
    pub lower_arm_twist: f32,
    pub upper_leg_twist: f32,
    pub lower_leg_twist: f32,
    pub arm_stretch: f32,
    pub leg_stretch: f32,
    pub feet_spacing: f32,
    pub has_translation_dof: bool,
}

pub const HUMANOID_TUNING: HumanoidTuning = HumanoidTuning {
    upper_arm_twist: 0.5,
    lower_arm_twist: 0.5,
    upper_leg_twist: 0.5,
    lower_leg_twist: 0.5,
    arm_stretch: 0.05,
    leg_stretch: 0.05,
    feet_spacing: 0.0,
    has_translation_dof: false,
};

impl Default for HumanoidTuning {
    fn default() -> Self {
        HUMANOID_TUNING
    }
}

/// Everything the runtime needs to build a humanoid avatar for a character.
///
/// `bones` keeps the order of the rig family's table. `skeleton` holds every
/// node of the character, mapped or not, in pre-order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanDescription {
    pub bones: Vec<HumanBone>,
    pub skeleton: Vec<SkeletonBone>,
    pub tuning: HumanoidTuning,
}
