use super::{
    tables::GENERATION_TABLES,
    types::{
        BoneMapping, HumanBone, HumanDescription, JointLimit, SkeletonBone,
        HUMANOID_TUNING,
    },
};
use crate::{skeleton::Skeleton, types::RigGeneration};
use ahash::{HashSet, HashSetExt};
use log::{debug, info};

/// Returns the bone table for a generation, or `None` if characters of that
/// generation are not retargeted
#[must_use]
pub fn table_for(generation: RigGeneration) -> Option<&'static [BoneMapping]> {
    GENERATION_TABLES
        .iter()
        .find(|(g, _)| *g == generation)
        .map(|(_, table)| *table)
}

/// Keeps the table entries whose source bone exists in the skeleton, in table
/// order. Bone LOD exports leave out some bones so missing ones are expected.
#[must_use]
pub fn active_bones(
    table: &[BoneMapping],
    skeleton: &Skeleton,
) -> Vec<HumanBone> {
    let mut names = HashSet::with_capacity(skeleton.len());
    for (_, node) in skeleton.pre_order() {
        names.insert(node.name.as_str());
    }
    table
        .iter()
        .filter(|b| {
            let found = names.contains(b.source);
            if !found {
                debug!("missing bone {:?} for {:?}", b.source, b.canonical);
            }
            found
        })
        .map(|b| HumanBone {
            canonical: b.canonical.to_string(),
            source: b.source.to_string(),
            limit: JointLimit::default(),
        })
        .collect()
}

/// Rest pose of every node, in pre-order
#[must_use]
pub fn snapshot(skeleton: &Skeleton) -> Vec<SkeletonBone> {
    skeleton
        .pre_order()
        .map(|(_, node)| SkeletonBone {
            name: node.name.clone(),
            transform: node.transform,
        })
        .collect()
}

/// Builds the humanoid description of a character. Returns `None` for
/// generations that have no bone table (`None` and `Unknown`); the caller
/// should fall back to its rig override for those.
///
/// The result is fully determined by the inputs so calling this again on a
/// re-import gives an identical description.
#[must_use]
pub fn build_mapping(
    generation: RigGeneration,
    skeleton: &Skeleton,
) -> Option<HumanDescription> {
    let Some(table) = table_for(generation) else {
        info!("generation {:?} is not retargeted", generation);
        return None;
    };
    let bones = active_bones(table, skeleton);
    info!(
        "{:?}: mapped {} of {} humanoid bones, skeleton has {} nodes",
        generation,
        bones.len(),
        table.len(),
        skeleton.len()
    );
    Some(HumanDescription {
        bones,
        skeleton: snapshot(skeleton),
        tuning: HUMANOID_TUNING,
    })
}
