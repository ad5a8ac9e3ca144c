use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{CollisionPolicy, LogLevel};

/// Renames every file below a directory to its path, with the path
/// separators replaced by a marker, and moves it into that directory.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The directory to flatten
    #[clap(default_value = "presets")]
    pub root: PathBuf,

    /// Character put in place of each path separator
    #[clap(long, short, default_value = "+", value_parser = parse_marker)]
    pub marker: char,

    /// What to do when a flattened name is already taken
    #[clap(long, default_value = "fail", value_enum)]
    pub on_collision: CollisionPolicy,

    /// Do not print the directories as they are visited
    #[clap(long, short)]
    pub quiet: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

fn parse_marker(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    let (Some(marker), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single character, got '{value}'"));
    };

    if marker == '\0' || std::path::is_separator(marker) {
        return Err(format!("'{}' cannot appear in a file name", marker.escape_default()));
    }

    Ok(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["flatten-icons"]).expect("Failed to parse");

        assert_eq!(cli.root, PathBuf::from("presets"));
        assert_eq!(cli.marker, '+');
        assert_eq!(cli.on_collision, CollisionPolicy::Fail);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "flatten-icons",
            "icons",
            "--marker",
            "_",
            "--on-collision",
            "overwrite",
            "-q",
            "-l",
            "debug",
        ])
        .expect("Failed to parse");

        assert_eq!(cli.root, PathBuf::from("icons"));
        assert_eq!(cli.marker, '_');
        assert_eq!(cli.on_collision, CollisionPolicy::Overwrite);
        assert!(cli.quiet);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[rstest]
    #[case("+", Some('+'))]
    #[case("·", Some('·'))]
    #[case("/", None)]
    #[case("", None)]
    #[case("ab", None)]
    #[case("\0", None)]
    fn test_parse_marker(#[case] input: &str, #[case] expected: Option<char>) {
        assert_eq!(parse_marker(input).ok(), expected);
    }

    #[test]
    fn test_rejects_separator_marker() {
        let result = Cli::try_parse_from(["flatten-icons", "--marker", "/"]);

        assert!(result.is_err());
    }
}
