use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Skeletal rig convention an asset was exported with. Assigned once per
/// asset and never changed afterwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RigGeneration {
    None,
    Unknown,
    GameBase,
    G1,
    G3,
    G3Plus,
    ActorCore,
    ActorBuild,
}

/// Rig mode requested by the user for assets whose generation could not be
/// determined
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum RigOverride {
    None,
    Humanoid,
    #[default]
    Generic,
}

/// Position, rotation and scale of a node relative to its parent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub position: glm::Vec3,
    pub rotation: glm::Quat,
    pub scale: glm::Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 0.0),
            rotation: glm::Quat::identity(),
            scale: glm::vec3(1.0, 1.0, 1.0),
        }
    }
}

impl LocalTransform {
    #[must_use]
    pub fn from_position(position: glm::Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Axis aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: glm::Vec3,
    pub max: glm::Vec3,
}

impl Aabb {
    #[must_use]
    pub const fn new(min: glm::Vec3, max: glm::Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing both boxes
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: glm::min2(&self.min, &other.min),
            max: glm::max2(&self.max, &other.max),
        }
    }

    /// Bounds of a set of points, `None` if there are no points
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = glm::Vec3>,
    {
        points.into_iter().fold(None, |acc, p| {
            let point_box = Self::new(p, p);
            Some(acc.map_or(point_box, |b: Self| b.union(&point_box)))
        })
    }
}

/// A material as seen by the mesh heuristics: only its name and the name of
/// the shader it uses matter. The shader name is empty for formats which do
/// not record one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    pub name: String,
    pub shader: String,
}

/// A named mesh renderer with its shared materials
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RendererDescriptor {
    pub name: String,
    pub materials: SmallVec<[MaterialDescriptor; 4]>,
    pub bounds: Option<Aabb>,
}

impl RendererDescriptor {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_material(mut self, name: &str) -> Self {
        self.materials.push(MaterialDescriptor {
            name: name.to_string(),
            shader: String::new(),
        });
        self
    }

    #[must_use]
    pub fn with_shader_material(mut self, name: &str, shader: &str) -> Self {
        self.materials.push(MaterialDescriptor {
            name: name.to_string(),
            shader: shader.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Material names in order
    #[must_use]
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|m| m.name.as_str())
    }
}
