mod tree;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use tree::{ResourceEntry, ResourceRef, ResourceTree};

/// Read-only view of one node in a REST resource hierarchy.
///
/// Implementors hand out their parent by value, so cheap handles (an index
/// into a node table, a reference) are the expected shape.
pub trait Resource: Sized {
    /// The raw local path segment, e.g. `"/"`, `"{id}"` or `"test/{name}"`.
    fn path(&self) -> &str;

    /// The parent node, `None` for a root.
    fn parent(&self) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub(crate) usize);

impl ResourceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
