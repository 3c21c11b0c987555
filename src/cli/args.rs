/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// cmdbq — query YAML CMDB documents from the CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cmdbq",
    about = "Query YAML CMDB documents from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the CMDB settings file.
    #[arg(value_name = "CMDB_FILE")]
    pub cmdb_file: PathBuf,

    /// Dot-separated path to a cmdb section (e.g. common.bake.base_ami).
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,

    /// Application name to slice out together with common settings.
    #[arg(short, long, value_name = "APP")]
    pub app: Option<String>,

    /// Print the application version table.
    #[arg(short = 't', long = "table-versions")]
    pub table: bool,

    /// Output format. Ignored by the version table.
    #[arg(short, long, value_name = "FORMAT", default_value = "yaml")]
    pub format: OutputFormat,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Block-style YAML with aliases expanded.
    #[default]
    Yaml,
    /// Pretty-printed JSON with 4-space indentation.
    Json,
}

/// The single operation selected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Dot-path lookup (`-k`).
    Key(String),
    /// Application slice (`-a`).
    App(String),
    /// Version table (`-t`).
    Table,
    /// Whole document minus the `mapping` bookkeeping key.
    AllApps,
}

impl Cli {
    /// Resolve the mode flags into the active [`Mode`].
    ///
    /// Several mode flags may be given at once; the highest-priority one wins
    /// silently. The precedence `key > app > table > all-apps` is observable
    /// by users and must not change.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(key) = &self.key {
            Mode::Key(key.clone())
        } else if let Some(app) = &self.app {
            Mode::App(app.clone())
        } else if self.table {
            Mode::Table
        } else {
            Mode::AllApps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv: Vec<&str> = std::iter::once("cmdbq").chain(args.iter().copied()).collect();
        Cli::try_parse_from(argv).expect("args should parse")
    }

    #[test]
    fn test_key_mode() {
        let cli = parse(&["-k", "common.region", "stack.yml"]);
        assert_eq!(cli.mode(), Mode::Key("common.region".to_owned()));
    }

    #[test]
    fn test_app_mode() {
        let cli = parse(&["--app", "jump", "stack.yml"]);
        assert_eq!(cli.mode(), Mode::App("jump".to_owned()));
    }

    #[test]
    fn test_table_mode() {
        let cli = parse(&["--table-versions", "stack.yml"]);
        assert_eq!(cli.mode(), Mode::Table);
    }

    #[test]
    fn test_default_mode() {
        let cli = parse(&["stack.yml"]);
        assert_eq!(cli.mode(), Mode::AllApps);
    }

    #[test]
    fn test_key_beats_app_and_table() {
        let cli = parse(&["-k", "a.b", "-a", "jump", "-t", "stack.yml"]);
        assert_eq!(cli.mode(), Mode::Key("a.b".to_owned()));
    }

    #[test]
    fn test_app_beats_table() {
        let cli = parse(&["-a", "jump", "-t", "stack.yml"]);
        assert_eq!(cli.mode(), Mode::App("jump".to_owned()));
    }

    #[test]
    fn test_format_defaults_to_yaml() {
        let cli = parse(&["stack.yml"]);
        assert_eq!(cli.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_format_json() {
        let cli = parse(&["-f", "json", "stack.yml"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Cli::try_parse_from(["cmdbq"]).is_err());
    }
}
