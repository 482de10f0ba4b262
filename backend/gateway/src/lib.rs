//! `uiscope-gateway` — the HTTP snapshot endpoint.
//!
//! Every inbound request, regardless of method or path, answers with one
//! fresh traversal of the live UI hierarchy as a JSON document.

pub mod advertise;
pub mod server;

pub use server::{build_router, GatewayState, ServerConfig, ServerHandle, SnapshotServer};
pub use uiscope_snapshot::DEFAULT_MAX_DEPTH;
