//! `uiscope-core` — shared types, traits, and errors for the uiscope
//! UI-hierarchy snapshot service.
//!
//! Provides:
//! - The host seam: [`UiNode`] / [`UiTreeProvider`]
//! - Attribute value types ([`Bounds`], [`NodeFlag`], [`ExtraValue`],
//!   collection metadata)
//! - The wire document shape ([`SnapshotRecord`])
//! - The error taxonomy ([`NodeError`], [`SnapshotError`])

pub mod error;
pub mod node;
pub mod record;
pub mod types;

pub use error::{NodeError, SnapshotError};
pub use node::{UiNode, UiTreeProvider};
pub use record::{CollectionRecord, SnapshotRecord};
pub use types::{
    Bounds, CollectionInfo, CollectionItemInfo, ExtraValue, NodeFlag, SelectionMode,
};
