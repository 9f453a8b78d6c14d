use super::{Resource, ResourceId};
use crate::error::PathError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceId>,
}

/// Table of resource nodes linked to their parents by index.
///
/// Ids are only valid for the tree that issued them. A table built with
/// [`ResourceTree::from_entries`] may still contain a parent cycle; the
/// resolver reports those when it walks the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ResourceEntry>", into = "Vec<ResourceEntry>")]
pub struct ResourceTree {
    nodes: Vec<ResourceEntry>,
}

impl ResourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ResourceEntry>) -> Result<Self, PathError> {
        if let Some(bad) = entries
            .iter()
            .filter_map(|entry| entry.parent)
            .find(|parent| parent.0 >= entries.len())
        {
            return Err(PathError::UnknownResource(bad));
        }

        Ok(Self { nodes: entries })
    }

    pub fn add_root(&mut self, path: impl Into<String>) -> ResourceId {
        self.push(path.into(), None)
    }

    pub fn add_child(
        &mut self,
        parent: ResourceId,
        path: impl Into<String>,
    ) -> Result<ResourceId, PathError> {
        if parent.0 >= self.nodes.len() {
            return Err(PathError::UnknownResource(parent));
        }
        Ok(self.push(path.into(), Some(parent)))
    }

    fn push(&mut self, path: String, parent: Option<ResourceId>) -> ResourceId {
        let id = ResourceId(self.nodes.len());
        self.nodes.push(ResourceEntry { path, parent });
        id
    }

    pub fn get(&self, id: ResourceId) -> Option<ResourceRef<'_>> {
        (id.0 < self.nodes.len()).then_some(ResourceRef { tree: self, id })
    }

    pub fn iter(&self) -> impl Iterator<Item = ResourceRef<'_>> {
        (0..self.nodes.len()).map(move |i| ResourceRef {
            tree: self,
            id: ResourceId(i),
        })
    }

    pub fn roots(&self) -> impl Iterator<Item = ResourceRef<'_>> {
        self.iter().filter(|node| node.entry().parent.is_none())
    }

    pub fn children(&self, id: ResourceId) -> impl Iterator<Item = ResourceRef<'_>> {
        self.iter()
            .filter(move |node| node.entry().parent == Some(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TryFrom<Vec<ResourceEntry>> for ResourceTree {
    type Error = PathError;

    fn try_from(entries: Vec<ResourceEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<ResourceTree> for Vec<ResourceEntry> {
    fn from(tree: ResourceTree) -> Self {
        tree.nodes
    }
}

/// Handle to one node of a [`ResourceTree`].
#[derive(Debug, Clone, Copy)]
pub struct ResourceRef<'a> {
    tree: &'a ResourceTree,
    id: ResourceId,
}

impl<'a> ResourceRef<'a> {
    pub fn id(&self) -> ResourceId {
        self.id
    }

    fn entry(&self) -> &'a ResourceEntry {
        // ids are bounds-checked by `get` and `from_entries`
        &self.tree.nodes[self.id.0]
    }
}

impl Resource for ResourceRef<'_> {
    fn path(&self) -> &str {
        &self.entry().path
    }

    fn parent(&self) -> Option<Self> {
        self.entry().parent.map(|id| ResourceRef {
            tree: self.tree,
            id,
        })
    }
}
