//! Collects the per node signals used by the generation classifier

use crate::{skeleton::Skeleton, types::RendererDescriptor};
use ahash::{HashMap, HashMapExt};
use log::trace;
use smallvec::SmallVec;

/// Name of the hip bone that identifies a G3 style bone root
pub const HIP_BONE: &str = "CC_Base_Hip";

/// What the classifier is allowed to know about a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSignals<'a> {
    pub name: &'a str,
    /// The node has a direct child named exactly `HIP_BONE`
    pub has_hip_child: bool,
    /// Material names of the renderer attached to this node, in order
    pub materials: SmallVec<[&'a str; 4]>,
}

/// Walks the skeleton in pre-order and returns the signals for every node.
/// Renderers are attached to nodes by name. If several renderers share a
/// name, the first one wins.
#[must_use]
pub fn scan<'a>(
    skeleton: &'a Skeleton,
    renderers: &'a [RendererDescriptor],
) -> Vec<NodeSignals<'a>> {
    let mut by_name: HashMap<&str, &RendererDescriptor> =
        HashMap::with_capacity(renderers.len());
    for r in renderers {
        by_name.entry(r.name.as_str()).or_insert(r);
    }

    skeleton
        .pre_order()
        .map(|(index, node)| {
            let materials = by_name
                .get(node.name.as_str())
                .copied()
                .map(|r| r.material_names().collect())
                .unwrap_or_default();
            let signals = NodeSignals {
                name: node.name.as_str(),
                has_hip_child: skeleton.child_named(index, HIP_BONE).is_some(),
                materials,
            };
            trace!("scanned {:?}", signals);
            signals
        })
        .collect()
}
