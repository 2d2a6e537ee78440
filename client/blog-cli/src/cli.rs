use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Command-line client for the blog service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}
