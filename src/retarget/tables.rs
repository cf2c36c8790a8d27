//! Bone mapping tables, one per rig family. Canonical names are unique
//! within a table and the order of entries is the order of the output.

use super::types::BoneMapping;
use crate::types::RigGeneration;

const fn bone(canonical: &'static str, source: &'static str) -> BoneMapping {
    BoneMapping { canonical, source }
}

/// Shared by G3, G3Plus, ActorCore and ActorBuild rigs
pub const HUMANOID_G3: &[BoneMapping] = &[
    bone("Chest", "CC_Base_Spine01"),
    bone("Head", "CC_Base_Head"),
    bone("Hips", "CC_Base_Hip"),
    bone("Jaw", "CC_Base_JawRoot"),
    bone("Left Index Distal", "CC_Base_L_Index3"),
    bone("Left Index Intermediate", "CC_Base_L_Index2"),
    bone("Left Index Proximal", "CC_Base_L_Index1"),
    bone("Left Little Distal", "CC_Base_L_Pinky3"),
    bone("Left Little Intermediate", "CC_Base_L_Pinky2"),
    bone("Left Little Proximal", "CC_Base_L_Pinky1"),
    bone("Left Middle Distal", "CC_Base_L_Mid3"),
    bone("Left Middle Intermediate", "CC_Base_L_Mid2"),
    bone("Left Middle Proximal", "CC_Base_L_Mid1"),
    bone("Left Ring Distal", "CC_Base_L_Ring3"),
    bone("Left Ring Intermediate", "CC_Base_L_Ring2"),
    bone("Left Ring Proximal", "CC_Base_L_Ring1"),
    bone("Left Thumb Distal", "CC_Base_L_Thumb3"),
    bone("Left Thumb Intermediate", "CC_Base_L_Thumb2"),
    bone("Left Thumb Proximal", "CC_Base_L_Thumb1"),
    bone("LeftEye", "CC_Base_L_Eye"),
    bone("LeftFoot", "CC_Base_L_Foot"),
    bone("LeftHand", "CC_Base_L_Hand"),
    bone("LeftLowerArm", "CC_Base_L_Forearm"),
    bone("LeftLowerLeg", "CC_Base_L_Calf"),
    bone("LeftShoulder", "CC_Base_L_Clavicle"),
    bone("LeftToes", "CC_Base_L_ToeBase"),
    bone("LeftUpperArm", "CC_Base_L_Upperarm"),
    bone("LeftUpperLeg", "CC_Base_L_Thigh"),
    bone("Neck", "CC_Base_NeckTwist01"),
    bone("Right Index Distal", "CC_Base_R_Index3"),
    bone("Right Index Intermediate", "CC_Base_R_Index2"),
    bone("Right Index Proximal", "CC_Base_R_Index1"),
    bone("Right Little Distal", "CC_Base_R_Pinky3"),
    bone("Right Little Intermediate", "CC_Base_R_Pinky2"),
    bone("Right Little Proximal", "CC_Base_R_Pinky1"),
    bone("Right Middle Distal", "CC_Base_R_Mid3"),
    bone("Right Middle Intermediate", "CC_Base_R_Mid2"),
    bone("Right Middle Proximal", "CC_Base_R_Mid1"),
    bone("Right Ring Distal", "CC_Base_R_Ring3"),
    bone("Right Ring Intermediate", "CC_Base_R_Ring2"),
    bone("Right Ring Proximal", "CC_Base_R_Ring1"),
    bone("Right Thumb Distal", "CC_Base_R_Thumb3"),
    bone("Right Thumb Intermediate", "CC_Base_R_Thumb2"),
    bone("Right Thumb Proximal", "CC_Base_R_Thumb1"),
    bone("RightEye", "CC_Base_R_Eye"),
    bone("RightFoot", "CC_Base_R_Foot"),
    bone("RightHand", "CC_Base_R_Hand"),
    bone("RightLowerArm", "CC_Base_R_Forearm"),
    bone("RightLowerLeg", "CC_Base_R_Calf"),
    bone("RightShoulder", "CC_Base_R_Clavicle"),
    bone("RightToes", "CC_Base_R_ToeBase"),
    bone("RightUpperArm", "CC_Base_R_Upperarm"),
    bone("RightUpperLeg", "CC_Base_R_Thigh"),
    bone("Spine", "CC_Base_Waist"),
    bone("UpperChest", "CC_Base_Spine02"),
];

/// G1 rigs number fingers from thumb (0) to little finger (4)
pub const HUMANOID_G1: &[BoneMapping] = &[
    bone("Chest", "CC_Base_Spine01"),
    bone("Head", "CC_Base_Head"),
    bone("Hips", "CC_Base_Hip"),
    bone("Jaw", "CC_Base_JawRoot"),
    bone("Left Index Distal", "CC_Base_L_Finger12"),
    bone("Left Index Intermediate", "CC_Base_L_Finger11"),
    bone("Left Index Proximal", "CC_Base_L_Finger10"),
    bone("Left Little Distal", "CC_Base_L_Finger42"),
    bone("Left Little Intermediate", "CC_Base_L_Finger41"),
    bone("Left Little Proximal", "CC_Base_L_Finger40"),
    bone("Left Middle Distal", "CC_Base_L_Finger22"),
    bone("Left Middle Intermediate", "CC_Base_L_Finger21"),
    bone("Left Middle Proximal", "CC_Base_L_Finger20"),
    bone("Left Ring Distal", "CC_Base_L_Finger32"),
    bone("Left Ring Intermediate", "CC_Base_L_Finger31"),
    bone("Left Ring Proximal", "CC_Base_L_Finger30"),
    bone("Left Thumb Distal", "CC_Base_L_Finger02"),
    bone("Left Thumb Intermediate", "CC_Base_L_Finger01"),
    bone("Left Thumb Proximal", "CC_Base_L_Finger00"),
    bone("LeftEye", "CC_Base_L_Eye"),
    bone("LeftFoot", "CC_Base_L_Foot"),
    bone("LeftHand", "CC_Base_L_Hand"),
    bone("LeftLowerArm", "CC_Base_L_Forearm"),
    bone("LeftLowerLeg", "CC_Base_L_Calf"),
    bone("LeftShoulder", "CC_Base_L_Clavicle"),
    bone("LeftToes", "CC_Base_L_ToeBase"),
    bone("LeftUpperArm", "CC_Base_L_Upperarm"),
    bone("LeftUpperLeg", "CC_Base_L_Thigh"),
    bone("Neck", "CC_Base_NeckTwist01"),
    bone("Right Index Distal", "CC_Base_R_Finger12"),
    bone("Right Index Intermediate", "CC_Base_R_Finger11"),
    bone("Right Index Proximal", "CC_Base_R_Finger10"),
    bone("Right Little Distal", "CC_Base_R_Finger42"),
    bone("Right Little Intermediate", "CC_Base_R_Finger41"),
    bone("Right Little Proximal", "CC_Base_R_Finger40"),
    bone("Right Middle Distal", "CC_Base_R_Finger22"),
    bone("Right Middle Intermediate", "CC_Base_R_Finger21"),
    bone("Right Middle Proximal", "CC_Base_R_Finger20"),
    bone("Right Ring Distal", "CC_Base_R_Finger32"),
    bone("Right Ring Intermediate", "CC_Base_R_Finger31"),
    bone("Right Ring Proximal", "CC_Base_R_Finger30"),
    bone("Right Thumb Distal", "CC_Base_R_Finger02"),
    bone("Right Thumb Intermediate", "CC_Base_R_Finger01"),
    bone("Right Thumb Proximal", "CC_Base_R_Finger00"),
    bone("RightEye", "CC_Base_R_Eye"),
    bone("RightFoot", "CC_Base_R_Foot"),
    bone("RightHand", "CC_Base_R_Hand"),
    bone("RightLowerArm", "CC_Base_R_Forearm"),
    bone("RightLowerLeg", "CC_Base_R_Calf"),
    bone("RightShoulder", "CC_Base_R_Clavicle"),
    bone("RightToes", "CC_Base_R_ToeBase"),
    bone("RightUpperArm", "CC_Base_R_Upperarm"),
    bone("RightUpperLeg", "CC_Base_R_Thigh"),
    bone("Spine", "CC_Base_Waist"),
    bone("UpperChest", "CC_Base_Spine02"),
];

/// Game base rigs use a different naming scheme apart from the eyes and jaw
pub const HUMANOID_GAME_BASE: &[BoneMapping] = &[
    bone("Chest", "spine_02"),
    bone("Head", "head"),
    bone("Hips", "pelvis"),
    bone("Jaw", "CC_Base_JawRoot"),
    bone("Left Index Distal", "index_03_l"),
    bone("Left Index Intermediate", "index_02_l"),
    bone("Left Index Proximal", "index_01_l"),
    bone("Left Little Distal", "pinky_03_l"),
    bone("Left Little Intermediate", "pinky_02_l"),
    bone("Left Little Proximal", "pinky_01_l"),
    bone("Left Middle Distal", "middle_03_l"),
    bone("Left Middle Intermediate", "middle_02_l"),
    bone("Left Middle Proximal", "middle_01_l"),
    bone("Left Ring Distal", "ring_03_l"),
    bone("Left Ring Intermediate", "ring_02_l"),
    bone("Left Ring Proximal", "ring_01_l"),
    bone("Left Thumb Distal", "thumb_03_l"),
    bone("Left Thumb Intermediate", "thumb_02_l"),
    bone("Left Thumb Proximal", "thumb_01_l"),
    bone("LeftEye", "CC_Base_L_Eye"),
    bone("LeftFoot", "foot_l"),
    bone("LeftHand", "hand_l"),
    bone("LeftLowerArm", "lowerarm_l"),
    bone("LeftLowerLeg", "calf_l"),
    bone("LeftShoulder", "clavicle_l"),
    bone("LeftToes", "ball_l"),
    bone("LeftUpperArm", "upperarm_l"),
    bone("LeftUpperLeg", "thigh_l"),
    bone("Neck", "neck_01"),
    bone("Right Index Distal", "index_03_r"),
    bone("Right Index Intermediate", "index_02_r"),
    bone("Right Index Proximal", "index_01_r"),
    bone("Right Little Distal", "pinky_03_r"),
    bone("Right Little Intermediate", "pinky_02_r"),
    bone("Right Little Proximal", "pinky_01_r"),
    bone("Right Middle Distal", "middle_03_r"),
    bone("Right Middle Intermediate", "middle_02_r"),
    bone("Right Middle Proximal", "middle_01_r"),
    bone("Right Ring Distal", "ring_03_r"),
    bone("Right Ring Intermediate", "ring_02_r"),
    bone("Right Ring Proximal", "ring_01_r"),
    bone("Right Thumb Distal", "thumb_03_r"),
    bone("Right Thumb Intermediate", "thumb_02_r"),
    bone("Right Thumb Proximal", "thumb_01_r"),
    bone("RightEye", "CC_Base_R_Eye"),
    bone("RightFoot", "foot_r"),
    bone("RightHand", "hand_r"),
    bone("RightLowerArm", "lowerarm_r"),
    bone("RightLowerLeg", "calf_r"),
    bone("RightShoulder", "clavicle_r"),
    bone("RightToes", "ball_r"),
    bone("RightUpperArm", "upperarm_r"),
    bone("RightUpperLeg", "thigh_r"),
    bone("Spine", "spine_01"),
    bone("UpperChest", "spine_03"),
];

/// Table used by each generation. Generations without an entry are never
/// retargeted.
pub const GENERATION_TABLES: &[(RigGeneration, &[BoneMapping])] = &[
    (RigGeneration::G3, HUMANOID_G3),
    (RigGeneration::G3Plus, HUMANOID_G3),
    (RigGeneration::ActorCore, HUMANOID_G3),
    (RigGeneration::ActorBuild, HUMANOID_G3),
    (RigGeneration::G1, HUMANOID_G1),
    (RigGeneration::GameBase, HUMANOID_GAME_BASE),
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn canonical_names_unique() {
        for table in [HUMANOID_G3, HUMANOID_G1, HUMANOID_GAME_BASE] {
            assert!(table.iter().map(|b| b.canonical).all_unique());
            assert!(table.iter().map(|b| b.source).all_unique());
        }
    }

    #[test]
    fn same_canonical_set() {
        // Every family maps onto the same canonical skeleton
        let g3: Vec<&str> = HUMANOID_G3.iter().map(|b| b.canonical).collect();
        for table in [HUMANOID_G1, HUMANOID_GAME_BASE] {
            let other: Vec<&str> = table.iter().map(|b| b.canonical).collect();
            assert_eq!(g3, other);
        }
    }

    #[test]
    fn unlisted_generations() {
        for g in [RigGeneration::None, RigGeneration::Unknown] {
            assert!(GENERATION_TABLES.iter().all(|(x, _)| *x != g));
        }
    }
}
