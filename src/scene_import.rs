pub mod gltf_file;
pub mod obj_file;
mod types;

// Re-exports
pub use types::Scene;

use crate::prep_error::PrepError;
use log::warn;
use std::path::Path;

/// Loads a scene from a file. Filenames with an ".obj" extension are loaded
/// as Wavefront OBJ files, ".gltf" and ".glb" as glTF.
///
/// # Errors
/// May return `PrepError`
pub fn load(path: &Path) -> Result<Scene, PrepError> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("obj") => obj_file::load(path),
        Some("gltf" | "glb") => gltf_file::load(path),
        _ => {
            warn!("{:?} is not a supported scene format", path);
            Err(PrepError::UnsupportedFormat)
        }
    }
}

/// Name used for the root of an imported scene
fn root_name(path: &Path) -> String {
    path.file_stem().map_or_else(
        || "scene".to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
