use petgraph::graph::NodeIndex;
use thiserror::Error;

/// Errors produced by [`Ring`](super::Ring) queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A member atom has no 2D coordinate, so no centroid can be formed.
    #[error("ring atom {} has no 2D coordinates", .atom.index())]
    MissingGeometry { atom: NodeIndex },
}
