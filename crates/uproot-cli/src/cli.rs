//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use uproot_core::config::DEFAULT_TEMP_DIR_NAME;
use uproot_core::config::validate_temp_dir_name;

#[derive(Parser)]
#[command(name = "uproot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the files of a source tree
    List(ListArgs),
    /// Copy a source tree to a directory or the temp directory
    Extract(ExtractArgs),
    /// Remove the temp directory
    Clean(CleanArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Directory to treat as a read-only tree
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Directory to treat as a read-only tree
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory (default: the temp directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub temp: TempArgs,

    /// Mode for created directories, in octal
    #[arg(long, value_name = "OCTAL", value_parser = parse_mode)]
    pub dir_mode: Option<u32>,

    /// Mode for created files, in octal
    #[arg(long, value_name = "OCTAL", value_parser = parse_mode)]
    pub file_mode: Option<u32>,
}

#[derive(clap::Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub temp: TempArgs,
}

#[derive(clap::Args)]
pub struct TempArgs {
    /// Name of the directory under the system temp directory
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TEMP_DIR_NAME, value_parser = parse_temp_name)]
    pub temp_name: String,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a permission mode such as `755`, `0755` or `0o755`
fn parse_mode(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let digits = s.strip_prefix("0o").unwrap_or(s);
    if digits.is_empty() {
        return Err("empty mode".to_string());
    }
    u32::from_str_radix(digits, 8)
        .map_err(|_| format!("invalid octal mode: {s}"))
        .and_then(|mode| {
            if mode > 0o7777 {
                Err(format!("mode out of range: {s}"))
            } else {
                Ok(mode)
            }
        })
}

/// Temp directory names must be a single plain path component
fn parse_temp_name(s: &str) -> Result<String, String> {
    validate_temp_dir_name(s).map_err(|_| format!("invalid temp directory name: {s:?}"))?;
    Ok(s.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("755").unwrap(), 0o755);
        assert_eq!(parse_mode("0644").unwrap(), 0o644);
        assert_eq!(parse_mode("0o700").unwrap(), 0o700);
        assert_eq!(parse_mode("7777").unwrap(), 0o7777);
        assert!(parse_mode("").is_err());
        assert!(parse_mode("0o").is_err());
        assert!(parse_mode("789").is_err());
        assert!(parse_mode("17777").is_err());
    }

    #[test]
    fn test_parse_temp_name() {
        assert_eq!(parse_temp_name("my-app").unwrap(), "my-app");
        assert!(parse_temp_name("").is_err());
        assert!(parse_temp_name("..").is_err());
        assert!(parse_temp_name("a/b").is_err());
        assert!(parse_temp_name("/etc").is_err());
        assert!(parse_temp_name(".").is_err());
    }
}
