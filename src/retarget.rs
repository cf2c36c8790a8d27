pub mod mapping;
pub mod tables;
mod types;

// Re-exports
pub use {
    mapping::{active_bones, build_mapping, snapshot, table_for},
    types::{
        BoneMapping, HumanBone, HumanDescription, HumanoidTuning, JointLimit,
        SkeletonBone, HUMANOID_TUNING,
    },
};
