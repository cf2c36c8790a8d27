//! Import time preparation of exported humanoid characters.
//!
//! Given a scene (node hierarchy, mesh renderers and animation clips) this
//! crate works out which rig generation the character was exported with,
//! maps that generation's bones onto a canonical humanoid skeleton, rebuilds
//! LOD groups from mesh names and normalizes animation clip settings. Every
//! step is deterministic and running it again on its own output changes
//! nothing, so assets can be re-imported freely.
//!
//! `prepare::prepare` runs all of it. The individual modules can also be used
//! on their own.

pub mod classifier;
pub mod clips;
pub mod config;
pub mod lod;
pub mod mesh_class;
pub mod prep_error;
pub mod prepare;
pub mod retarget;
pub mod rig;
pub mod scanner;
pub mod scene_import;
pub mod skeleton;
pub mod types;
pub mod util;
