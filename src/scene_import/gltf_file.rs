use super::{root_name, types::Scene};
use crate::{
    clips::ClipDescriptor,
    prep_error::PrepError,
    skeleton::Skeleton,
    types::{Aabb, LocalTransform, MaterialDescriptor, RendererDescriptor},
};
use gltf::{mesh::Mesh, Document, Gltf, Node, Semantic};
use log::{debug, info, trace, warn};
use std::{fs, io, path::Path};

fn load_impl(path: &Path) -> Result<Document, PrepError> {
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    let gltf = Gltf::from_reader(reader)?;
    info!(
        "{:?}, scenes={}, nodes={}, meshes={}, animations={}",
        path,
        gltf.document.scenes().len(),
        gltf.document.nodes().len(),
        gltf.document.meshes().len(),
        gltf.document.animations().len(),
    );
    Ok(gltf.document)
}

fn node_transform(node: &Node) -> LocalTransform {
    let (t, r, s) = node.transform().decomposed();
    LocalTransform {
        position: t.into(),
        rotation: r.into(),
        scale: s.into(),
    }
}

/// Creates the renderer for a node's mesh. Each primitive contributes one
/// material and its bounding box.
fn renderer_from_mesh(name: &str, mesh: &Mesh) -> RendererDescriptor {
    let mut renderer = RendererDescriptor::new(name);
    for p in mesh.primitives() {
        let m = p.material();
        let material_name = m.name().map_or_else(
            || {
                m.index().map_or_else(
                    || "material.default".to_string(),
                    |i| format!("material.{i}"),
                )
            },
            ToString::to_string,
        );
        trace!("{:?} primitive {} uses {:?}", name, p.index(), material_name);
        // glTF has no concept of shaders
        renderer.materials.push(MaterialDescriptor {
            name: material_name,
            shader: String::new(),
        });

        // Positions accessors are validated to have min and max
        if p.get(&Semantic::Positions).is_some() {
            let bb = p.bounding_box();
            let b = Aabb::new(bb.min.into(), bb.max.into());
            renderer.bounds =
                Some(renderer.bounds.map_or(b, |prev| prev.union(&b)));
        }
    }
    renderer
}

/// Recursive node tree traversal, parents before children
fn traverse_tree(
    node: &Node,
    parent: usize,
    skeleton: &mut Skeleton,
    renderers: &mut Vec<RendererDescriptor>,
) -> Result<(), PrepError> {
    let name = node
        .name()
        .map_or_else(|| format!("node.{}", node.index()), ToString::to_string);
    let index = skeleton
        .add_node(parent, &name, node_transform(node))
        .ok_or(PrepError::InvalidFile)?;
    if let Some(mesh) = node.mesh() {
        debug!("node {:?} has mesh {:?}", name, mesh.name());
        renderers.push(renderer_from_mesh(&name, &mesh));
    }
    for child in node.children() {
        traverse_tree(&child, index, skeleton, renderers)?;
    }
    Ok(())
}

/// Load a glTF file as a scene. Only node names, transforms, mesh materials
/// and bounds, and animation names are read. Buffers are never loaded.
///
/// All scene root nodes are placed under a single root named after the file.
///
/// # Errors
/// May return `PrepError`
pub fn load(path: &Path) -> Result<Scene, PrepError> {
    let document = load_impl(path)?;
    process_gltf(&root_name(path), &document)
}

/// Builds a scene from an already parsed glTF document
///
/// # Errors
/// May return `PrepError`
pub fn process_gltf(
    name: &str,
    document: &Document,
) -> Result<Scene, PrepError> {
    if document.scenes().next().is_none() {
        warn!("{:?} has no scenes", name);
        return Err(PrepError::EmptyScene);
    }

    let mut scene = Scene::new(name);
    for s in document.scenes() {
        for node in s.nodes() {
            traverse_tree(
                &node,
                0,
                &mut scene.skeleton,
                &mut scene.renderers,
            )?;
        }
    }

    for animation in document.animations() {
        let clip_name = animation.name().map_or_else(
            || format!("animation.{}", animation.index()),
            ToString::to_string,
        );
        scene.clips.push(ClipDescriptor::new(&clip_name));
    }

    info!(
        "scene {:?}: {} nodes, {} renderers, {} clips",
        scene.name,
        scene.skeleton.len(),
        scene.renderers.len(),
        scene.clips.len()
    );
    Ok(scene)
}
