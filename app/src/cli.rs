//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exam-oracle", version, about = "Export exam papers and analytics reports as PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Where the PDF goes
    #[arg(long, value_enum, default_value_t = Target::Native, global = true)]
    pub target: Target,

    /// Export settings file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base directory for Documents, ExternalStorage and Downloads.
    /// Overrides the directories in the settings file.
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Print the full export result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an exam paper with its answer key
    Exam(InputArgs),

    /// Render the analytics report
    Report(InputArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON payload file, or `-` for stdin
    pub input: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Download into the downloads directory
    Browser,
    /// Write to Documents and open, with an external-storage fallback
    Native,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["exam-oracle", "exam", "paper.json"]).unwrap();
        assert_eq!(cli.target, Target::Native);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Exam(ref a) if a.input == PathBuf::from("paper.json")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "exam-oracle",
            "report",
            "-",
            "--target",
            "browser",
            "--output-dir",
            "/tmp/out",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.target, Target::Browser);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(Cli::try_parse_from(["exam-oracle", "exam", "x.json", "--target", "fax"]).is_err());
    }
}
