use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

pub const INPUT_FILE_NAME: &str = "InputPhoneNumbers.txt";
pub const OUTPUT_FILE_NAME: &str = "OutputPhoneNumbers.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMethod {
    /// Comparison sort over an ordered set of encoded records.
    Naive,
    /// Existence-array sort over the bounded numbering domain.
    Bitwise,
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMethod::Naive => f.write_str("naive"),
            SortMethod::Bitwise => f.write_str("bitwise"),
        }
    }
}

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub count: usize,
    pub method: SortMethod,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Parses command-line arguments using the clap derive macro.
///
/// Both positional arguments are taken as optional strings so the
/// diagnostics below stay under our control instead of clap's.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// How many unique phone numbers to generate.
    #[arg()]
    count: Option<String>,
    /// Sort method, `naive` or `bitwise`.
    #[arg()]
    method: Option<String>,
    /// Where to write the generated input file.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Where to write the sorted output file.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Loads the run configuration from the command line.
pub fn get_config() -> Result<AppConfig> {
    let cli = Cli::parse();
    resolve(cli)
}

fn resolve(cli: Cli) -> Result<AppConfig> {
    let Some(count) = cli.count.as_deref().and_then(|raw| raw.parse::<usize>().ok()) else {
        bail!("Specify a count of phone numbers.");
    };

    let Some(method) = cli.method else {
        bail!("Specify a sort method name.");
    };
    let method = match method.to_ascii_lowercase().as_str() {
        "naive" => SortMethod::Naive,
        "bitwise" => SortMethod::Bitwise,
        _ => bail!("`{method}` sort method not supported."),
    };

    let artifact_dir = default_artifact_dir()?;
    Ok(AppConfig {
        count,
        method,
        input_path: cli
            .input
            .unwrap_or_else(|| artifact_dir.join(INPUT_FILE_NAME)),
        output_path: cli
            .output
            .unwrap_or_else(|| artifact_dir.join(OUTPUT_FILE_NAME)),
    })
}

/// The file artifacts live alongside the running executable by default.
fn default_artifact_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Running executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("phone_sorter").chain(args.iter().copied()))
    }

    #[test]
    fn parses_count_and_method() {
        let config = resolve(cli(&["1000", "bitwise"])).unwrap();
        assert_eq!(config.count, 1_000);
        assert_eq!(config.method, SortMethod::Bitwise);
    }

    #[test]
    fn method_is_case_insensitive() {
        let config = resolve(cli(&["5", "NaIvE"])).unwrap();
        assert_eq!(config.method, SortMethod::Naive);
    }

    #[test]
    fn rejects_missing_or_malformed_count() {
        for args in [&[] as &[&str], &["many", "naive"], &["3.5", "naive"]] {
            let error = resolve(cli(args)).unwrap_err();
            assert_eq!(error.to_string(), "Specify a count of phone numbers.");
        }
    }

    #[test]
    fn rejects_missing_method() {
        let error = resolve(cli(&["1000"])).unwrap_err();
        assert_eq!(error.to_string(), "Specify a sort method name.");
    }

    #[test]
    fn rejects_unknown_method() {
        let error = resolve(cli(&["1000", "quick"])).unwrap_err();
        assert_eq!(error.to_string(), "`quick` sort method not supported.");
    }

    #[test]
    fn honors_path_overrides() {
        let config = resolve(cli(&["10", "naive", "--input", "in.txt", "--output", "out.txt"]))
            .unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }
}
