#![doc = include_str!("../README.md")]

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod fs;
pub mod layout;
pub mod plan;
pub mod report;
pub mod steps;
pub mod verify;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::BootstrapArgs::parse();
    init_logging(args.verbose);
    bootstrap::execute(args)
}

/// Logs to stderr. `RUST_LOG` overrides the default `warn` level;
/// `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
