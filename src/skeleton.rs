use crate::types::LocalTransform;
use serde::{Deserialize, Serialize};

/// One node of the character hierarchy. Nodes are owned by the `Skeleton`
/// arena and refer to each other by index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkeletonNode {
    pub name: String,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub transform: LocalTransform,
}

/// Node hierarchy of an imported character. Index 0 is always the root and
/// there are no cycles since nodes can only be added below an existing one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    /// Creates a skeleton with only a root node at the identity transform
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        Self::with_root(root_name, LocalTransform::default())
    }

    #[must_use]
    pub fn with_root(root_name: &str, transform: LocalTransform) -> Self {
        Self {
            nodes: vec![SkeletonNode {
                name: root_name.to_string(),
                parent: None,
                children: Vec::new(),
                transform,
            }],
        }
    }

    /// Adds a node as the last child of `parent` and returns its index.
    /// Returns `None` if `parent` is not a valid index.
    pub fn add_node(
        &mut self,
        parent: usize,
        name: &str,
        transform: LocalTransform,
    ) -> Option<usize> {
        if parent >= self.nodes.len() {
            return None;
        }
        let index = self.nodes.len();
        self.nodes.push(SkeletonNode {
            name: name.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            transform,
        });
        self.nodes[parent].children.push(index);
        Some(index)
    }

    #[must_use]
    pub fn root(&self) -> &SkeletonNode {
        &self.nodes[0]
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&SkeletonNode> {
        self.nodes.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false since a skeleton has at least a root, but provided to
    /// go along with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth first walk starting at the root. A parent is visited before its
    /// children and children are visited in the order they were added.
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            skeleton: self,
            stack: vec![0],
        }
    }

    /// Finds the first node with exactly this name anywhere in the tree
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.pre_order()
            .find(|(_, node)| node.name == name)
            .map(|(index, _)| index)
    }

    /// Finds a direct child of `index` with exactly this name
    #[must_use]
    pub fn child_named(&self, index: usize, name: &str) -> Option<usize> {
        self.nodes.get(index).and_then(|node| {
            node.children
                .iter()
                .copied()
                .find(|child| self.nodes[*child].name == name)
        })
    }
}

/// Iterator returned by `Skeleton::pre_order`
pub struct PreOrder<'a> {
    skeleton: &'a Skeleton,
    stack: Vec<usize>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a SkeletonNode);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.skeleton.nodes[index];
        // Reversed so that the first child is popped next
        self.stack.extend(node.children.iter().rev());
        Some((index, node))
    }
}

#[cfg(test)]
mod tests {
    use super::Skeleton;
    use crate::types::LocalTransform;

    fn granary() -> Skeleton {
        // root
        //   a
        //     a1
        //     a2
        //   b
        let mut skeleton = Skeleton::new("root");
        let a = skeleton.add_node(0, "a", LocalTransform::default()).unwrap();
        skeleton.add_node(a, "a1", LocalTransform::default()).unwrap();
        skeleton.add_node(a, "a2", LocalTransform::default()).unwrap();
        skeleton.add_node(0, "b", LocalTransform::default()).unwrap();
        skeleton
    }

    #[test]
    fn pre_order() {
        let skeleton = granary();
        let names: Vec<&str> = skeleton
            .pre_order()
            .map(|(_, node)| node.name.as_str())
            .collect();
        assert_eq!(names, ["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn add_node_bad_parent() {
        let mut skeleton = granary();
        assert!(skeleton
            .add_node(99, "x", LocalTransform::default())
            .is_none());
        assert_eq!(skeleton.len(), 5);
    }

    #[test]
    fn find() {
        let skeleton = granary();
        assert_eq!(skeleton.find("a2"), Some(3));
        assert_eq!(skeleton.find("A2"), None);
        assert_eq!(skeleton.find("root"), Some(0));
    }

    #[test]
    fn child_named() {
        let skeleton = granary();
        assert_eq!(skeleton.child_named(0, "a"), Some(1));
        // Grandchildren are not direct children
        assert_eq!(skeleton.child_named(0, "a1"), None);
        assert_eq!(skeleton.child_named(1, "a1"), Some(2));
        assert_eq!(skeleton.node(4).and_then(|n| n.parent), Some(0));
    }
}
