use clap::Parser;

/// Kiosk — a single-site desktop web app shell.
#[derive(Parser, Debug)]
#[command(name = "kiosk", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Home URL override (absolute http(s) URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
