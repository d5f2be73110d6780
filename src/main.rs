use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod domain;
mod services;

pub use cli::*;
pub use config::Config;
pub use domain::errors::VerifyError;
pub use domain::models::*;
pub use services::output::{print_json, print_out};
pub use services::reporter::{report_all, ConsoleReporter};
pub use services::verifier::verify_suite;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<VerifyError>()
                .map(VerifyError::exit_code)
                .unwrap_or(2);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let base_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => config::default_base_dir()?,
    };
    let config = Config::resolve(cli.config.as_deref(), &base_dir)?;
    commands::handle_runtime_commands(cli, &config, &base_dir)
}
