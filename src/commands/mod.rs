//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `report.rs` — the one-shot scene report.
//!
//! ## Principles
//! - Delegate loading and tallying to `services/*`.
//! - Keep behavior and output schema stable.

pub mod report;

pub use report::handle_report;
