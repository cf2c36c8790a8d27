//! Root motion and loop settings for imported animation clips

use crate::{config::ImportConfig, util::icontains};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Import settings of one animation clip. The import pipeline owns these;
/// this module only flips flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    pub name: String,
    pub keep_original_orientation: bool,
    pub keep_original_position_y: bool,
    pub keep_original_position_xz: bool,
    pub lock_root_rotation: bool,
    pub lock_root_height_y: bool,
    pub lock_root_position_xz: bool,
    pub loop_time: bool,
}

/// Flags set by the name rules
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClipFlag {
    LockRootPositionXz,
    LoopTime,
}

/// Sets `flag` on every clip whose name contains `pattern`, ignoring case
pub struct NameRule {
    pub pattern: &'static str,
    pub flag: ClipFlag,
}

/// Applied in order after the root motion locks
pub const NAME_RULES: &[NameRule] = &[
    NameRule {
        pattern: "idle",
        flag: ClipFlag::LockRootPositionXz,
    },
    NameRule {
        pattern: "_loop",
        flag: ClipFlag::LoopTime,
    },
];

impl ClipDescriptor {
    /// New clip with every flag cleared
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn flag_mut(&mut self, flag: ClipFlag) -> &mut bool {
        match flag {
            ClipFlag::LockRootPositionXz => &mut self.lock_root_position_xz,
            ClipFlag::LoopTime => &mut self.loop_time,
        }
    }

    const fn root_locked(&self) -> bool {
        self.keep_original_orientation
            && self.keep_original_position_y
            && self.keep_original_position_xz
            && self.lock_root_rotation
            && self.lock_root_height_y
    }

    /// Returns the normalized settings and whether they differ from `self`.
    ///
    /// The five root motion flags are all set together if any is clear. The
    /// name rules then set their flag when the name matches. Flags are only
    /// ever set, never cleared, so normalizing a normalized clip changes
    /// nothing.
    #[must_use]
    pub fn normalized(&self) -> (Self, bool) {
        let mut clip = self.clone();
        let mut changed = false;

        if !clip.root_locked() {
            clip.keep_original_orientation = true;
            clip.keep_original_position_y = true;
            clip.keep_original_position_xz = true;
            clip.lock_root_rotation = true;
            clip.lock_root_height_y = true;
            changed = true;
        }

        for rule in NAME_RULES {
            if icontains(&clip.name, rule.pattern) {
                let flag = clip.flag_mut(rule.flag);
                if !*flag {
                    *flag = true;
                    changed = true;
                }
            }
        }

        if changed {
            debug!("clip {:?} normalized", clip.name);
        }
        (clip, changed)
    }
}

/// Normalizes every clip in place. Returns true if any clip changed.
pub fn normalize(clips: &mut [ClipDescriptor]) -> bool {
    let mut changed = false;
    for clip in clips.iter_mut() {
        let (new_state, clip_changed) = clip.normalized();
        if clip_changed {
            *clip = new_state;
            changed = true;
        }
    }
    info!("normalized {} clips, changed={}", clips.len(), changed);
    changed
}

/// Clips that belong in an animator controller. Preview and T-pose clips are
/// left out.
#[must_use]
pub fn controller_clips<'a>(
    clips: &'a [ClipDescriptor],
    config: &ImportConfig,
) -> Vec<&'a ClipDescriptor> {
    clips
        .iter()
        .filter(|clip| {
            !config
                .controller_clip_excludes
                .iter()
                .any(|x| icontains(&clip.name, x))
        })
        .collect()
}
