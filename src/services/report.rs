use crate::domain::constants::{CategoryRule, SCENE_CATEGORIES};
use crate::domain::models::{CategoryCount, Command, SceneDocument, SceneReport, TypeCount};
use crate::error::ReportError;
use std::collections::BTreeMap;

/// Read every field the report needs and compute both tallies.
///
/// Fields are read in print order (`commands`, `commandId`, `description`), so
/// the first missing one is the one surfaced.
pub fn build_report(doc: &SceneDocument) -> Result<SceneReport, ReportError> {
    let commands = doc.commands()?;
    let command_id = doc.command_id()?;
    let description = doc.description()?;

    let report = SceneReport {
        total_commands: commands.len(),
        command_id,
        description,
        timestamp: doc.timestamp(),
        enabled: doc.enabled(),
        order: doc.order(),
        command_types: tally_types(&commands),
        categories: tally_categories(&commands, &SCENE_CATEGORIES),
    };
    tracing::info!(
        commands = report.total_commands,
        types = report.command_types.len(),
        "scene report built"
    );
    Ok(report)
}

pub fn tally_types(commands: &[Command]) -> Vec<TypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for cmd in commands {
        *counts.entry(cmd.type_label()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(t, count)| TypeCount {
            command_type: t.to_string(),
            count,
        })
        .collect()
}

pub fn tally_categories(commands: &[Command], rules: &[CategoryRule]) -> Vec<CategoryCount> {
    rules
        .iter()
        .map(|rule| CategoryCount {
            category: rule.name,
            keywords: rule.keywords,
            count: commands
                .iter()
                .filter(|cmd| matches_any(cmd, rule.keywords))
                .count(),
        })
        .collect()
}

/// Case-insensitive substring match of any keyword against the id or name.
pub fn matches_any(cmd: &Command, keywords: &[&str]) -> bool {
    let id = cmd.id_or_empty().to_lowercase();
    let name = cmd.name_or_empty().to_lowercase();
    keywords.iter().any(|k| {
        let k = k.to_lowercase();
        id.contains(&k) || name.contains(&k)
    })
}
