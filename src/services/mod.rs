//! Service layer containing the scan pipeline and side-effect helpers.
//!
//! ## Service map
//! - `locator.rs` — `.pdf` discovery in the scanned directory.
//! - `document.rs` — page-text capability (`PageSource`) backed by lopdf.
//! - `fields.rs` — anchor-delimited compound name / CAS extraction.
//! - `hazards.rs` — hazard-code scan and CMR/other classification.
//! - `scan.rs` — per-document pipeline with failure isolation.
//! - `report.rs` — fixed-format text blocks.
//! - `output.rs` — JSON output helper.
//! - `logging.rs` — tracing subscriber setup.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects (filesystem, stdout) stay in `locator`, `document`, `output` and the command layer.

pub mod document;
pub mod fields;
pub mod hazards;
pub mod locator;
pub mod logging;
pub mod output;
pub mod report;
pub mod scan;
