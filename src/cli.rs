use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SCENE_PATH: &str =
    "Assets/Plugins/ES/0_Stand/Stand_Tools/ESVMCP/RunningData/Input/indoor_room_scene.json";

#[derive(Parser, Debug)]
#[command(
    name = "scene-report",
    version,
    about = "Summarize a scene-construction command batch"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        default_value = DEFAULT_SCENE_PATH,
        help = "Scene command batch to summarize (relative to the working directory)"
    )]
    pub path: PathBuf,
}

/// Resolved settings for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub path: PathBuf,
    pub json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCENE_PATH),
            json: false,
        }
    }
}

impl From<Cli> for ReportConfig {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            json: cli.json,
        }
    }
}
