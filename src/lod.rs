//! Rebuilds LOD groups from renderer names
//!
//! LOD exports name their meshes `<name>_LOD<d>` for level `d`. The original
//! full detail mesh usually keeps its plain name and is treated as level 0.

use crate::{
    config::ImportConfig,
    types::{Aabb, RendererDescriptor},
    util::icontains,
};
use itertools::Itertools;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

/// Transition height of the last (lowest detail) level
pub const LAST_LEVEL_HEIGHT: f32 = 0.02;

/// One level of detail. `screen_relative_height` is the fraction of the screen
/// the object must cover for this level (or a more detailed one) to be used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LodLevel {
    pub index: usize,
    pub renderers: Vec<RendererDescriptor>,
    pub screen_relative_height: f32,
}

/// Ordered LOD levels, most detailed first, with the bounds of everything in
/// them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LodGroup {
    pub levels: Vec<LodLevel>,
    pub bounds: Option<Aabb>,
}

impl LodGroup {
    /// Recalculates `bounds` from every renderer in every level. Renderers
    /// without bounds are skipped.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = self
            .levels
            .iter()
            .flat_map(|level| level.renderers.iter())
            .filter_map(|r| r.bounds)
            .reduce(|a, b| a.union(&b));
    }
}

/// Returns the level encoded by a `_LOD<d>` name suffix with a single digit
#[must_use]
pub fn lod_suffix(name: &str) -> Option<usize> {
    let b = name.as_bytes();
    let len = b.len();
    if len < 5 || &b[len - 5..len - 1] != b"_LOD" {
        return None;
    }
    let digit = b[len - 1];
    if digit.is_ascii_digit() {
        Some(usize::from(digit - b'0'))
    } else {
        None
    }
}

/// Number of distinct levels present. Renderers without a suffix count as
/// level 0.
#[must_use]
pub fn count_lods(renderers: &[RendererDescriptor]) -> usize {
    renderers
        .iter()
        .map(|r| lod_suffix(&r.name).unwrap_or(0))
        .unique()
        .count()
}

/// True if an asset should be set up as a LOD group: the path marks it as a
/// LOD export and it really contains more than one level
#[must_use]
pub fn wants_lod_group(
    path: &str,
    renderers: &[RendererDescriptor],
    config: &ImportConfig,
) -> bool {
    icontains(path, &config.lod_path_marker) && count_lods(renderers) > 1
}

/// Transition height for level `index` in a group of `count` levels
#[allow(clippy::cast_precision_loss)]
fn transition_height(index: usize, count: usize) -> f32 {
    if index + 1 == count {
        LAST_LEVEL_HEIGHT
    } else {
        1.0 / (index + 2) as f32
    }
}

/// Groups renderers into LOD levels.
///
/// Normally there are `max + 1` levels where `max` is the highest suffix seen:
/// level 0 holds every renderer without a suffix and level `i` every
/// renderer with suffix `i`. When the renderer count equals `max` the export
/// is taken to have one renderer per level with no level 0 mesh, and the
/// `max` levels are shifted down so level `i` holds suffix `i + 1`. Levels
/// with no renderers are kept. An empty renderer list gives an empty group.
#[must_use]
pub fn group_lods(renderers: &[RendererDescriptor]) -> LodGroup {
    if renderers.is_empty() {
        return LodGroup::default();
    }

    let levels_of: Vec<usize> = renderers
        .iter()
        .map(|r| lod_suffix(&r.name).unwrap_or(0))
        .collect();
    let max_level = levels_of.iter().copied().max().unwrap_or(0);

    // Maps an output level to the suffix it collects
    let (count, offset) = if renderers.len() == max_level {
        warn!(
            "{} renderers for {} levels, assuming there is no level 0 mesh",
            renderers.len(),
            max_level
        );
        (max_level, 1)
    } else {
        (max_level + 1, 0)
    };

    let mut levels: Vec<LodLevel> = (0..count)
        .map(|index| LodLevel {
            index,
            renderers: Vec::new(),
            screen_relative_height: transition_height(index, count),
        })
        .collect();
    for (renderer, level) in renderers.iter().zip(levels_of) {
        match level.checked_sub(offset).and_then(|i| levels.get_mut(i)) {
            Some(lod) => {
                trace!("{:?} -> level {}", renderer.name, lod.index);
                lod.renderers.push(renderer.clone());
            }
            None => debug!("{:?} does not fit any level", renderer.name),
        }
    }

    let mut group = LodGroup {
        levels,
        bounds: None,
    };
    group.recalculate_bounds();
    info!(
        "grouped {} renderers into {} levels",
        renderers.len(),
        group.levels.len()
    );
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix() {
        assert_eq!(lod_suffix("Body_LOD1"), Some(1));
        assert_eq!(lod_suffix("_LOD9"), Some(9));
        assert_eq!(lod_suffix("Body_LOD12"), None);
        assert_eq!(lod_suffix("Body_lod1"), None);
        assert_eq!(lod_suffix("Body_LODx"), None);
        assert_eq!(lod_suffix("LOD1"), None);
        assert_eq!(lod_suffix("Body"), None);
    }

    const EPSILON: f32 = 0.0001_f32;

    fn approx_eq(a: f32, b: f32) {
        assert!((b - a).abs() < EPSILON);
    }

    #[test]
    fn heights() {
        approx_eq(transition_height(0, 3), 0.5);
        approx_eq(transition_height(1, 3), 1.0 / 3.0);
        approx_eq(transition_height(2, 3), LAST_LEVEL_HEIGHT);
        // A single level is also the last one
        approx_eq(transition_height(0, 1), LAST_LEVEL_HEIGHT);
    }

    #[test]
    fn count() {
        let renderers: Vec<RendererDescriptor> =
            ["Body", "Eyes", "Body_LOD1", "Eyes_LOD1", "Body_LOD3"]
                .iter()
                .map(|n| RendererDescriptor::new(n))
                .collect();
        assert_eq!(count_lods(&renderers), 3);
        assert_eq!(count_lods(&[]), 0);
    }

    #[test]
    fn lod_group_wanted() {
        let config = ImportConfig::default();
        let one = [RendererDescriptor::new("Body")];
        let two = [
            RendererDescriptor::new("Body"),
            RendererDescriptor::new("Body_LOD1"),
        ];
        assert!(wants_lod_group("Assets/Hero_LOD/Hero.fbx", &two, &config));
        assert!(!wants_lod_group("Assets/Hero_LOD/Hero.fbx", &one, &config));
        assert!(!wants_lod_group("Assets/Hero/Hero.fbx", &two, &config));
    }

    #[test]
    fn base_mesh_without_level_zero() {
        // Two renderers and a highest suffix of 2, so there is no level 0
        let renderers = [
            RendererDescriptor::new("Body"),
            RendererDescriptor::new("Body_LOD2"),
        ];
        let group = group_lods(&renderers);
        assert_eq!(group.levels.len(), 2);
        assert!(group.levels[0].renderers.is_empty());
        assert_eq!(group.levels[1].renderers.len(), 1);
        assert_eq!(group.levels[1].renderers[0].name, "Body_LOD2");
        assert!(group
            .levels
            .iter()
            .flat_map(|level| level.renderers.iter())
            .all(|r| r.name != "Body"));
    }

    #[test]
    fn skipped_level_is_empty() {
        let renderers = [
            RendererDescriptor::new("Body"),
            RendererDescriptor::new("Hair"),
            RendererDescriptor::new("Body_LOD2"),
        ];
        let group = group_lods(&renderers);
        assert_eq!(group.levels.len(), 3);
        assert_eq!(group.levels[0].renderers.len(), 2);
        assert!(group.levels[1].renderers.is_empty());
        assert_eq!(group.levels[2].renderers[0].name, "Body_LOD2");
    }
}
