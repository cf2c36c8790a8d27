//! Simple name based mesh classification

use crate::{
    config::ImportConfig,
    types::RendererDescriptor,
    util::{icontains, iequals},
};

/// True for the character's body (or head) mesh
#[must_use]
pub fn is_body_mesh(
    renderer: &RendererDescriptor,
    config: &ImportConfig,
) -> bool {
    if config
        .body_mesh_names
        .iter()
        .any(|name| iequals(&renderer.name, name))
    {
        return true;
    }
    renderer.materials.iter().any(|m| {
        icontains(&m.name, &config.body_material_marker)
            || has_shader(&m.shader, &config.head_shader)
            || has_shader(&m.shader, &config.skin_shader)
    })
}

/// True for hair meshes
#[must_use]
pub fn is_hair_mesh(
    renderer: &RendererDescriptor,
    config: &ImportConfig,
) -> bool {
    let markers = &config.hair_material_markers;
    renderer.materials.iter().any(|m| {
        (!markers.is_empty()
            && markers.iter().all(|marker| icontains(&m.name, marker)))
            || has_shader(&m.shader, &config.hair_shader)
    })
}

// An empty shader name never matches, formats without shaders leave it empty
fn has_shader(shader: &str, wanted: &str) -> bool {
    !shader.is_empty() && !wanted.is_empty() && icontains(shader, wanted)
}
