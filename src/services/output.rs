use crate::domain::models::{JsonOut, SceneReport};
use serde::Serialize;

pub const SUCCESS_MARKER: &str = "✅ JSON syntax OK";
pub const ERROR_MARKER: &str = "❌ Invalid scene file:";

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Print the single failure line (or the `ok: false` envelope).
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        println!(
            "{:#}",
            serde_json::json!({ "ok": false, "error": err.to_string() })
        );
    } else {
        println!("{} {}", ERROR_MARKER, err);
    }
}

/// Human-readable report body. The success marker is printed separately.
pub fn render_report(report: &SceneReport) -> String {
    let mut lines = vec![
        format!("📋 Total commands: {}", report.total_commands),
        format!("🏷️ Scene ID: {}", report.command_id),
        format!("📝 Description: {}", report.description),
    ];
    if let Some(ts) = &report.timestamp {
        lines.push(format!("🕒 Timestamp: {}", ts));
    }
    if !report.enabled {
        lines.push("⏸️ Batch disabled".to_string());
    }

    lines.push(String::new());
    lines.push("📊 Command types:".to_string());
    for t in &report.command_types {
        lines.push(format!("  {}: {}", t.command_type, t.count));
    }

    lines.push(String::new());
    lines.push("🏠 Scene elements:".to_string());
    for c in &report.categories {
        lines.push(format!("  {}: {} related command(s)", c.category, c.count));
    }
    lines.join("\n")
}
