//! `uiscope-host` — host-side adapters for the snapshot service.
//!
//! The real platform accessibility bridge lives behind
//! `uiscope_core::UiTreeProvider`; this crate ships the fixture-backed
//! [`StaticTreeProvider`] used by the CLI demo mode and by tests.

pub mod static_tree;

pub use static_tree::{NodeSpec, StaticTreeProvider};
