use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use crate::cli::{Cli, ReportConfig};
use crate::error::ReportError;
use crate::services::output::print_error;

/// Diagnostics go to stderr so stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    let config = ReportConfig::from(cli);

    match commands::handle_report(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let field_access = err
                .downcast_ref::<ReportError>()
                .is_some_and(ReportError::is_field_access);
            tracing::debug!(
                path = %config.path.display(),
                field_access,
                error = %err,
                "scene report failed"
            );
            print_error(config.json, &err);
            ExitCode::FAILURE
        }
    }
}
