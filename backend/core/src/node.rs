//! The seam to the host platform's UI query subsystem.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::types::{Bounds, CollectionInfo, CollectionItemInfo, ExtraValue, NodeFlag};

/// One element of the live UI hierarchy, owned by the host.
///
/// A `Box<dyn UiNode>` owns the underlying host handle; dropping the box
/// returns it to the host. Nodes are only reachable inside the traversal
/// that obtained them — the host may recycle handles between requests, so
/// holding one across requests is invalid.
///
/// Readers are pure. `Unreadable` degrades the one node, `Invalidated`
/// fails the whole traversal; see the error taxonomy in [`NodeError`].
pub trait UiNode: Send {
    fn class_name(&self) -> Result<Option<String>, NodeError>;
    fn text(&self) -> Result<Option<String>, NodeError>;
    fn content_description(&self) -> Result<Option<String>, NodeError>;
    fn view_id_resource_name(&self) -> Result<Option<String>, NodeError>;

    /// Keys of extra data the host can attach to this node.
    fn available_extra_data(&self) -> Result<Vec<String>, NodeError>;

    /// The host's arbitrary key/value extension bundle, in host order.
    fn extras(&self) -> Result<Vec<(String, ExtraValue)>, NodeError>;

    fn has_flag(&self, flag: NodeFlag) -> Result<bool, NodeError>;

    fn collection_info(&self) -> Result<Option<CollectionInfo>, NodeError>;
    fn collection_item_info(&self) -> Result<Option<CollectionItemInfo>, NodeError>;

    fn bounds_in_screen(&self) -> Result<Bounds, NodeError>;

    /// Child nodes in visual/traversal order. The order is significant and
    /// is preserved verbatim in the snapshot document. Each returned box
    /// must be dropped once its subtree has been processed.
    fn children(&self) -> Result<Vec<Box<dyn UiNode>>, NodeError>;
}

/// Source of the current UI root, queried live per request.
#[async_trait]
pub trait UiTreeProvider: Send + Sync {
    /// The root of the foreground window, or `None` when no window is
    /// addressable (screen locked, nothing in the foreground). `None` is a
    /// valid empty-result case, not a fault.
    async fn current_root(&self) -> Result<Option<Box<dyn UiNode>>, NodeError>;
}
