use crate::config::{DEFAULT_MAX_DEPTH, ResolverConfig};
use crate::error::PathError;
use crate::resource::Resource;
use crate::utils::path::{
    extract_parameters_from_path, join_elements, normalize_segment, split_elements,
};
use tracing::{trace, warn};

/// Element that stands for the gateway root in [`PathResolver::path_elements`].
pub const ROOT_ELEMENT: &str = "/";

/// Turns resource chains into normalized gateway paths.
///
/// The resolver keeps no state between calls; the only setting is how many
/// ancestors a chain may have before it is treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResolver {
    max_depth: usize,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PathResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            max_depth: config.max_depth(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Strip one leading and one trailing slash, `"/{id}/"` becomes `"{id}"`.
    pub fn normalize_segment(segment: &str) -> &str {
        normalize_segment(segment)
    }

    /// Absolute path of `node`, e.g. `/resource/{id}/info`.
    pub fn full_path<R: Resource>(&self, node: &R) -> Result<String, PathError> {
        let elements = self.path_elements(node)?;
        Ok(join_elements(&elements[1..]))
    }

    /// The node's own segment without surrounding slashes.
    pub fn path_part<R: Resource>(&self, node: &R) -> String {
        normalize_segment(node.path()).to_string()
    }

    /// Elements from the root down to `node`. The first element is always `/`;
    /// segments with embedded slashes contribute one element per part.
    pub fn path_elements<R: Resource>(&self, node: &R) -> Result<Vec<String>, PathError> {
        let ancestors = self.ancestors(node)?;

        let mut elements = vec![ROOT_ELEMENT.to_string()];
        for ancestor in ancestors.iter().rev() {
            elements.extend(split_elements(ancestor.path()).map(str::to_string));
        }
        elements.extend(split_elements(node.path()).map(str::to_string));

        trace!(
            segment = node.path(),
            depth = ancestors.len(),
            elements = elements.len(),
            "resolved resource path elements"
        );
        Ok(elements)
    }

    /// Full path of the parent resource, `None` for a root.
    pub fn parent_path<R: Resource>(&self, node: &R) -> Result<Option<String>, PathError> {
        // walk from the node itself so the error names it
        self.ancestors(node)?;
        node.parent()
            .map(|parent| self.full_path(&parent))
            .transpose()
    }

    /// Path of the gateway resource directly above the last element of `node`.
    ///
    /// Unlike [`parent_path`](Self::parent_path) this looks at elements, so
    /// `{id}/info` under `/` yields `/{id}`. `None` when `node` resolves to
    /// the gateway root.
    pub fn gateway_parent_path<R: Resource>(
        &self,
        node: &R,
    ) -> Result<Option<String>, PathError> {
        let elements = self.path_elements(node)?;
        Ok(match elements.len() {
            1 => None,
            len => Some(join_elements(&elements[1..len - 1])),
        })
    }

    /// Every gateway path that must exist for `node`, root first.
    pub fn gateway_paths<R: Resource>(&self, node: &R) -> Result<Vec<String>, PathError> {
        let elements = self.path_elements(node)?;
        Ok((0..elements.len())
            .map(|depth| join_elements(&elements[1..=depth]))
            .collect())
    }

    /// Template parameter names along the path, first occurrence wins.
    pub fn path_parameters<R: Resource>(&self, node: &R) -> Result<Vec<String>, PathError> {
        Ok(extract_parameters_from_path(&self.full_path(node)?))
    }

    /// Ancestors of `node`, nearest first.
    fn ancestors<R: Resource>(&self, node: &R) -> Result<Vec<R>, PathError> {
        let mut ancestors = Vec::new();
        let mut current = node.parent();

        while let Some(parent) = current {
            if ancestors.len() >= self.max_depth {
                warn!(
                    segment = node.path(),
                    max_depth = self.max_depth,
                    "resource parent chain does not reach a root"
                );
                return Err(PathError::MalformedResourceTree {
                    path: node.path().to_string(),
                    depth: self.max_depth,
                });
            }
            current = parent.parent();
            ancestors.push(parent);
        }

        Ok(ancestors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ResourceEntry, ResourceId, ResourceTree};

    fn cyclic_tree() -> ResourceTree {
        ResourceTree::from_entries(vec![
            ResourceEntry {
                path: "a".into(),
                parent: Some(ResourceId(1)),
            },
            ResourceEntry {
                path: "b".into(),
                parent: Some(ResourceId(0)),
            },
        ])
        .unwrap()
    }

    #[test]
    fn root_with_segment_contributes_it() {
        let mut tree = ResourceTree::new();
        let root = tree.add_root("/resource");
        let node = tree.get(root).unwrap();
        let resolver = PathResolver::default();

        assert_eq!(resolver.full_path(&node).unwrap(), "/resource");
        assert_eq!(resolver.path_elements(&node).unwrap(), vec!["/", "resource"]);
        assert_eq!(resolver.parent_path(&node).unwrap(), None);
        assert_eq!(resolver.gateway_parent_path(&node).unwrap().as_deref(), Some("/"));
    }

    #[test]
    fn slash_only_child_adds_nothing() {
        let mut tree = ResourceTree::new();
        let root = tree.add_root("/");
        let users = tree.add_child(root, "/users/").unwrap();
        let index = tree.add_child(users, "/").unwrap();
        let resolver = PathResolver::default();

        let node = tree.get(index).unwrap();
        assert_eq!(resolver.full_path(&node).unwrap(), "/users");
        assert_eq!(resolver.parent_path(&node).unwrap().as_deref(), Some("/users"));
    }

    #[test]
    fn doubled_slashes_never_reach_the_output() {
        let mut tree = ResourceTree::new();
        let root = tree.add_root("//");
        let child = tree.add_child(root, "//a//b//").unwrap();
        let node = tree.get(child).unwrap();

        assert_eq!(PathResolver::default().full_path(&node).unwrap(), "/a/b");
    }

    #[test]
    fn cycle_is_reported_for_the_requested_node() {
        let tree = cyclic_tree();
        let node = tree.get(ResourceId(0)).unwrap();
        let resolver = PathResolver::new(&ResolverConfig { max_depth: Some(5) });

        let expected = PathError::MalformedResourceTree {
            path: "a".into(),
            depth: 5,
        };
        assert_eq!(resolver.full_path(&node).unwrap_err(), expected);
        assert_eq!(resolver.path_elements(&node).unwrap_err(), expected);
        assert_eq!(resolver.parent_path(&node).unwrap_err(), expected);
        assert_eq!(resolver.gateway_paths(&node).unwrap_err(), expected);
        // the node's own segment needs no traversal
        assert_eq!(resolver.path_part(&node), "a");
    }

    #[test]
    fn depth_limit_counts_ancestors() {
        let mut tree = ResourceTree::new();
        let root = tree.add_root("/");
        let a = tree.add_child(root, "a").unwrap();
        let b = tree.add_child(a, "b").unwrap();
        let resolver = PathResolver::new(&ResolverConfig { max_depth: Some(1) });

        assert_eq!(resolver.full_path(&tree.get(a).unwrap()).unwrap(), "/a");
        assert!(matches!(
            resolver.full_path(&tree.get(b).unwrap()),
            Err(PathError::MalformedResourceTree { depth: 1, .. })
        ));
    }

    #[test]
    fn parameters_follow_path_order() {
        let mut tree = ResourceTree::new();
        let root = tree.add_root("/users/{user}");
        let post = tree.add_child(root, "posts/{id: [0-9]+}/").unwrap();

        let params = PathResolver::default()
            .path_parameters(&tree.get(post).unwrap())
            .unwrap();
        assert_eq!(params, vec!["user", "id"]);
    }
}
