//! Service layer containing report logic and side-effect helpers.
//!
//! ## Service map
//! - `loader.rs` — read + parse the command batch file.
//! - `report.rs` — type tally, category tally, report assembly.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod loader;
pub mod output;
pub mod report;
