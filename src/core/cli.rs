use clap::Parser;
use std::path::PathBuf;

/// Weekly planner REPL.
#[derive(Parser, Debug, Clone)]
#[command(name = "weekplan", version, about)]
pub struct CliPaths {
    /// Configuration file to load.
    #[arg(long = "config", value_name = "PATH", default_value = "config.json")]
    pub config_path: PathBuf,

    /// Directory used by `save` and `read` for bare file names.
    #[arg(long = "saves", value_name = "DIR", default_value = "saves")]
    pub saves_dir: PathBuf,

    /// Directory for session log files.
    #[arg(long = "logs", value_name = "DIR", default_value = "logs")]
    pub logs_dir: PathBuf,
}
