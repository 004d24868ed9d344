mod cli;
mod cli_help;
mod crc32;
mod scan;
mod util;
mod walk;
mod wfp;
mod winnow;

use clap::Parser;

use cli::{Cli, Commands, SourceArgs};
use walk::ExcludeFilter;

fn filter_for(source: &SourceArgs) -> ExcludeFilter {
    ExcludeFilter::new(&source.exclude_ext, &source.exclude_dir, &source.exclude)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Wfp { source, output } => {
            let filter = filter_for(&source);
            wfp::run(source.path.as_deref(), output.as_deref(), &filter)
        }
        Commands::Scan {
            source,
            hash,
            api_url,
            json,
            csv,
        } => {
            let filter = filter_for(&source);
            scan::run(
                source.path.as_deref(),
                hash.as_deref(),
                &api_url,
                json,
                csv,
                &filter,
            )
        }
        Commands::Sbom {
            source,
            format,
            api_url,
        } => {
            let filter = filter_for(&source);
            scan::run_sbom(source.path.as_deref(), &format, &api_url, &filter)
        }
        Commands::Completions { shell } => {
            cli::print_completions(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
