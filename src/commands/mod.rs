//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — discover, scan and report every document of the directory.
//!
//! ## Principles
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod scan;

pub use scan::handle_scan;
