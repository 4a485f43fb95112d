//! msearch binary entry point.

use clap::Parser;

use msearch::cli::Cli;

mod cmd_search;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cmd_search::run(&cli)
}

/// Default to warnings only; `--verbose` lifts this crate to debug.
/// RUST_LOG overrides both.
fn init_tracing(verbose: bool) {
    let default = if verbose { "msearch=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
