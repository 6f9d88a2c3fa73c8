use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pas", version, about = "Pavidi shell: pipes, redirection, globbing and command substitution")]
pub struct Cli {
    /// Evaluate a single command line and exit
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// Read settings from this file instead of ./pas.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resolve relative paths against this directory
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,
}
