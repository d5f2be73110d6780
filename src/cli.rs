use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagecheck", version, about = "Content checks for static HTML pages")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, short, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        help = "Directory target files resolve against (default: executable's directory)"
    )]
    pub dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Suite definitions (TOML)")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run suites (all configured suites when none are named)
    Run { suites: Vec<String> },
    /// List configured suites and their checks
    List,
}
