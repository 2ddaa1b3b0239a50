//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — scene document view, commands, report/output structs.
//! - `constants.rs` — the category table and default labels.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `SceneReport` is the `--json` payload. Keep it in sync with
//! `docs/contracts/report.schema.json`.

pub mod constants;
pub mod models;
