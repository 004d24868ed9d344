/// CLI argument definitions for the `hl` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros; long help text lives in `cli_help`.
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::scan;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "hl",
    version,
    about = "Source code fingerprinting and open source identification"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by commands that read local source trees.
#[derive(Args)]
pub struct SourceArgs {
    /// File or directory to process (default: read stdin)
    pub path: Option<PathBuf>,

    /// Skip files with these extensions
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_ext: Vec<String>,

    /// Skip directories with these names
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dir: Vec<String>,

    /// Skip paths matching these glob patterns (relative to the root)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate winnowing fingerprints (.wfp) for a file, directory, or stdin
    #[command(long_about = cli_help::WFP)]
    Wfp {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the fingerprint document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Identify open source code against the OSSKB
    #[command(long_about = cli_help::SCAN)]
    Scan {
        #[command(flatten)]
        source: SourceArgs,

        /// Submit a known 32-hex MD5 content hash instead of local content
        #[arg(long, conflicts_with = "path")]
        hash: Option<String>,

        /// Identification endpoint
        #[arg(long, default_value = scan::DEFAULT_API_URL)]
        api_url: String,

        /// Output the raw scan response as JSON
        #[arg(long)]
        json: bool,

        /// Output matches as CSV
        #[arg(long, conflicts_with = "json")]
        csv: bool,
    },

    /// Request an SBOM for local code from the OSSKB
    #[command(long_about = cli_help::SBOM)]
    Sbom {
        #[command(flatten)]
        source: SourceArgs,

        /// SBOM format
        #[arg(long, default_value = "spdx", value_parser = ["spdx", "cyclonedx"])]
        format: String,

        /// Identification endpoint
        #[arg(long, default_value = scan::DEFAULT_API_URL)]
        api_url: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "hl", &mut io::stdout());
}
