use std::path::PathBuf;

use clap::Parser;

/// Classdock: the school services desktop shell.
#[derive(Parser, Debug)]
#[command(name = "classdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive override (debug, info, classdock=trace...).
    #[arg(long)]
    pub log_level: Option<String>,

    /// App to show first, overriding `startup.initial_app`.
    #[arg(long)]
    pub app: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
