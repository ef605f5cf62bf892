//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — per-document report, batch outcome and JSON envelope structs.
//! - `constants.rs` — hazard-code vocabularies, field anchors and report labels.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or PDF side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` output.
//! Keep schema-impacting changes synchronized with `docs/contracts/scan.schema.json`.

pub mod constants;
pub mod models;
