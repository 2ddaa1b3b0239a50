use crate::cli::ReportConfig;
use crate::services::loader::load_document;
use crate::services::output::{print_one, render_report, SUCCESS_MARKER};
use crate::services::report::build_report;

/// Load, summarize and print one command batch.
///
/// The success marker goes out as soon as the file parses; a field access
/// failure after that point still aborts before any statistics are printed.
pub fn handle_report(config: &ReportConfig) -> anyhow::Result<()> {
    let doc = load_document(&config.path)?;
    if !config.json {
        println!("{}", SUCCESS_MARKER);
    }
    let report = build_report(&doc)?;
    print_one(config.json, report, render_report)
}
