use clap::Parser;
use npm_audit_payload::config::ConfigFile;
use std::path::PathBuf;

/// Build npm audit API request payloads from package-lock.json files
#[derive(Parser, Debug)]
#[command(name = "npm-audit-payload")]
#[command(version)]
#[command(about = "Build npm audit API request payloads from package-lock.json files", long_about = None)]
pub struct Args {
    /// Project directory containing package-lock.json (defaults to current directory)
    /// Can be specified multiple times: all lockfiles go into one payload
    #[arg(short, long = "path", value_name = "DIR")]
    pub paths: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Leave out entries marked as dev dependencies
    #[arg(long)]
    pub skip_dev: bool,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "typescript" -e "@types/*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Config file path (defaults to npm-audit-payload.config.yml in the first project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Print the payload on a single line
    #[arg(long)]
    pub compact: bool,

    /// Only print errors and warnings on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub skip_dev_dependencies: bool,
    pub exclude_patterns: Vec<String>,
    pub compact: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn project_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.iter().map(PathBuf::from).collect()
        }
    }

    /// Flags given on the command line win; exclusion patterns from the
    /// CLI replace those of the config file rather than extending them.
    pub fn resolve(&self, config: Option<ConfigFile>) -> RunOptions {
        let config = config.unwrap_or_default();
        let exclude_patterns = if self.exclude.is_empty() {
            config.exclude_packages.unwrap_or_default()
        } else {
            self.exclude.clone()
        };

        RunOptions {
            skip_dev_dependencies: self.skip_dev || config.skip_dev_dependencies.unwrap_or(false),
            exclude_patterns,
            compact: self.compact || config.compact.unwrap_or(false),
        }
    }
}
