use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Creates the folders and empty placeholder files of a project skeleton.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory the skeleton is created in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// YAML layout to create instead of the built-in front-end skeleton
    #[clap(long = "layout", short = 'L')]
    pub layout: Option<PathBuf>,

    /// Print what would be created without touching the filesystem
    #[clap(long, short = 'n')]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["sprout"]).expect("bare invocation should parse");

        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.layout.is_none());
        assert!(!cli.dry_run);
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn all_options_parse() {
        let cli = Cli::try_parse_from([
            "sprout",
            "--root",
            "web",
            "-L",
            "layout.yaml",
            "--dry-run",
            "-l",
            "debug",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.root, PathBuf::from("web"));
        assert_eq!(cli.layout, Some(PathBuf::from("layout.yaml")));
        assert!(cli.dry_run);
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[rstest]
    #[case(&["sprout", "extra"])]
    #[case(&["sprout", "--log-level", "loud"])]
    fn invalid_arguments_are_rejected(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }
}
