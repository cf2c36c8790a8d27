use crate::{
    clips::ClipDescriptor, skeleton::Skeleton, types::RendererDescriptor,
};

/// Everything a single import pass works on. Built fresh for every import
/// and discarded afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub name: String,
    pub skeleton: Skeleton,
    pub renderers: Vec<RendererDescriptor>,
    pub clips: Vec<ClipDescriptor>,
}

impl Scene {
    /// Scene with only a root node named `name`
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            skeleton: Skeleton::new(name),
            renderers: Vec::new(),
            clips: Vec::new(),
        }
    }
}
