use thiserror::Error;

/// Failure reading a single UI node from the host.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The host recycled or invalidated the node while we still held it.
    /// Fails the whole traversal for the current request.
    #[error("node invalidated by host: {0}")]
    Invalidated(String),

    /// A single attribute could not be read or represented. The node
    /// degrades to an empty record; the traversal continues.
    #[error("node attribute unreadable: {0}")]
    Unreadable(String),
}

/// Failure of a whole snapshot traversal.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Cycle / pathological-nesting guard tripped.
    #[error("traversal depth exceeded limit of {0}")]
    DepthExceeded(usize),

    #[error(transparent)]
    Node(#[from] NodeError),
}
