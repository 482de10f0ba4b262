//! In-memory UI nodes for exercising the extractor and serializer,
//! including handle-release accounting and injected host failures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use uiscope_core::{
    Bounds, CollectionInfo, CollectionItemInfo, ExtraValue, NodeError, NodeFlag, UiNode,
};

/// How a [`TestNode`] misbehaves, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    /// Attribute readers report `Unreadable`.
    UnreadableAttributes,
    /// Attribute readers report `Invalidated`.
    InvalidatedAttributes,
    /// Child enumeration reports `Invalidated`.
    InvalidatedChildren,
}

/// Counts handles handed out by `children()` against handles released by
/// drop. The two must match after any traversal, successful or not.
#[derive(Debug, Default)]
pub struct HandleLedger {
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl HandleLedger {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct TestNode {
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub view_id_resource_name: Option<String>,
    pub extra_data: Vec<String>,
    pub extras: Vec<(String, ExtraValue)>,
    pub flags: Vec<NodeFlag>,
    pub collection_info: Option<CollectionInfo>,
    pub collection_item_info: Option<CollectionItemInfo>,
    pub bounds: Bounds,
    pub children: Vec<TestNode>,
    pub failure: Failure,
    pub(crate) ledger: Arc<HandleLedger>,
    pub(crate) counted: bool,
}

impl TestNode {
    pub fn new() -> Self {
        Self {
            class_name: None,
            text: None,
            content_description: None,
            view_id_resource_name: None,
            extra_data: Vec::new(),
            extras: Vec::new(),
            flags: Vec::new(),
            collection_info: None,
            collection_item_info: None,
            bounds: Bounds::default(),
            children: Vec::new(),
            failure: Failure::None,
            ledger: Arc::new(HandleLedger::default()),
            counted: false,
        }
    }

    pub fn leaf(class_name: &str) -> Self {
        let mut node = Self::new();
        node.class_name = Some(class_name.to_string());
        node
    }

    /// Share one ledger across the whole tree so acquisitions and releases
    /// can be compared after a traversal.
    pub fn adopt_ledger(&mut self, ledger: &Arc<HandleLedger>) {
        self.ledger = Arc::clone(ledger);
        for child in &mut self.children {
            child.adopt_ledger(ledger);
        }
    }

    fn attr<T>(&self, value: T) -> Result<T, NodeError> {
        match self.failure {
            Failure::UnreadableAttributes => {
                Err(NodeError::Unreadable("injected attribute failure".to_string()))
            }
            Failure::InvalidatedAttributes => {
                Err(NodeError::Invalidated("injected invalidation".to_string()))
            }
            _ => Ok(value),
        }
    }
}

impl Drop for TestNode {
    fn drop(&mut self) {
        // Only handles handed out via children() count as releases; the
        // template tree the test built is not host-owned.
        if self.counted {
            self.ledger.released.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl UiNode for TestNode {
    fn class_name(&self) -> Result<Option<String>, NodeError> {
        self.attr(self.class_name.clone())
    }

    fn text(&self) -> Result<Option<String>, NodeError> {
        self.attr(self.text.clone())
    }

    fn content_description(&self) -> Result<Option<String>, NodeError> {
        self.attr(self.content_description.clone())
    }

    fn view_id_resource_name(&self) -> Result<Option<String>, NodeError> {
        self.attr(self.view_id_resource_name.clone())
    }

    fn available_extra_data(&self) -> Result<Vec<String>, NodeError> {
        self.attr(self.extra_data.clone())
    }

    fn extras(&self) -> Result<Vec<(String, ExtraValue)>, NodeError> {
        self.attr(self.extras.clone())
    }

    fn has_flag(&self, flag: NodeFlag) -> Result<bool, NodeError> {
        self.attr(self.flags.contains(&flag))
    }

    fn collection_info(&self) -> Result<Option<CollectionInfo>, NodeError> {
        self.attr(self.collection_info)
    }

    fn collection_item_info(&self) -> Result<Option<CollectionItemInfo>, NodeError> {
        self.attr(self.collection_item_info)
    }

    fn bounds_in_screen(&self) -> Result<Bounds, NodeError> {
        self.attr(self.bounds)
    }

    fn children(&self) -> Result<Vec<Box<dyn UiNode>>, NodeError> {
        if self.failure == Failure::InvalidatedChildren {
            return Err(NodeError::Invalidated("injected child invalidation".to_string()));
        }
        Ok(self
            .children
            .iter()
            .map(|child| {
                self.ledger.acquired.fetch_add(1, Ordering::SeqCst);
                let mut handle = child.clone();
                handle.counted = true;
                Box::new(handle) as Box<dyn UiNode>
            })
            .collect())
    }
}
