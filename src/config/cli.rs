use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "eiopa-rfr")]
#[command(about = "Download and unzip EIOPA risk-free rate archives for every month-end")]
pub struct Args {
    /// Optional TOML file overriding years, paths and URL pieces
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
