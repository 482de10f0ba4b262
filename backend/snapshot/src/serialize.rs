//! Depth-first, pre-order traversal of the live UI tree.

use uiscope_core::{SnapshotError, SnapshotRecord, UiNode};

use crate::extract::extract_record;

/// Default guard against pathological nesting or cycles in the host tree.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Walks a UI tree and assembles the nested snapshot document.
///
/// One record per visited node, children nested under their parent in
/// enumeration order. Exceeding `max_depth` fails the current request,
/// never the process.
#[derive(Debug, Clone, Copy)]
pub struct TreeSerializer {
    max_depth: usize,
}

impl Default for TreeSerializer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeSerializer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Serialize `root` and its whole subtree.
    ///
    /// Every child handle acquired during the walk is dropped — and thereby
    /// returned to the host — before this returns, on success and on error.
    pub fn serialize(&self, root: &dyn UiNode) -> Result<SnapshotRecord, SnapshotError> {
        self.walk(root, 0)
    }

    fn walk(&self, node: &dyn UiNode, depth: usize) -> Result<SnapshotRecord, SnapshotError> {
        if depth >= self.max_depth {
            return Err(SnapshotError::DepthExceeded(self.max_depth));
        }

        let mut record = extract_record(node)?;
        for child in node.children()? {
            let child_record = self.walk(child.as_ref(), depth + 1)?;
            record.children.push(child_record);
            // child handle drops here, returning it to the host
        }
        Ok(record)
    }
}
