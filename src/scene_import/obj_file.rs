use super::{root_name, types::Scene};
use crate::{
    prep_error::PrepError,
    types::{Aabb, LocalTransform, MaterialDescriptor, RendererDescriptor},
};
use log::{debug, info, warn};
use nalgebra_glm as glm;
use std::path::Path;

/// Load a Wavefront OBJ file as a scene. Loads the file into memory and calls
/// `process_obj`. You may call that directly if you've loaded or generated
/// OBJ data some other way.
///
/// # Errors
/// May return `PrepError`
pub fn load(path: &Path) -> Result<Scene, PrepError> {
    let load_result = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS);
    process_obj(&root_name(path), load_result)
}

/// Process loaded Wavefront OBJ data. Every model becomes a renderer on its
/// own node directly under the root. OBJ files have no animation, so the
/// scene has no clips.
///
/// # Errors
/// May return `PrepError`
pub fn process_obj(
    name: &str,
    load_result: tobj::LoadResult,
) -> Result<Scene, PrepError> {
    let (tobj_models, tobj_materials) = load_result?;
    // A missing .mtl file is not fatal, the models just have no materials
    let tobj_materials = tobj_materials.unwrap_or_else(|e| {
        warn!("materials not loaded for {:?}: {}", name, e);
        Vec::new()
    });
    info!(
        "{:?}: {} models, {} materials",
        name,
        tobj_models.len(),
        tobj_materials.len()
    );

    let mut scene = Scene::new(name);
    for m in &tobj_models {
        scene
            .skeleton
            .add_node(0, &m.name, LocalTransform::default())
            .ok_or(PrepError::InvalidFile)?;

        let mut renderer = RendererDescriptor::new(&m.name);
        if let Some(material) =
            m.mesh.material_id.and_then(|id| tobj_materials.get(id))
        {
            renderer.materials.push(MaterialDescriptor {
                name: material.name.clone(),
                shader: String::new(),
            });
        }
        renderer.bounds = Aabb::from_points(
            m.mesh
                .positions
                .chunks_exact(3)
                .map(|p| glm::vec3(p[0], p[1], p[2])),
        );
        debug!(
            "model {:?}, vertices={}, materials={:?}",
            m.name,
            m.mesh.positions.len() / 3,
            renderer.material_names().collect::<Vec<_>>()
        );
        scene.renderers.push(renderer);
    }

    if scene.renderers.is_empty() {
        warn!("{:?} has no models", name);
        return Err(PrepError::EmptyScene);
    }
    Ok(scene)
}
