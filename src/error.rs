use crate::resource::ResourceId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The parent chain of a resource loops back on itself or is deeper than
    /// the configured limit.
    #[error("malformed resource tree: `{path}` has more than {depth} ancestors")]
    MalformedResourceTree { path: String, depth: usize },

    #[error("unknown resource {0}")]
    UnknownResource(ResourceId),
}
