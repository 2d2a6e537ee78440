//! blog-cli library
//!
//! Command definitions and the runner behind the `blog` binary.

pub(crate) mod app;
pub(crate) mod blog_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod confirm;
pub(crate) mod error;
pub mod logger;


pub use app::{App, Output};
pub use cli::Cli;
pub use confirm::StdinConfirm;
pub use error::{CliError, Result as CliResult};

/// Run the command parsed into `cli`.
pub async fn run(app: &App, cli: Cli) -> CliResult<Output> {
    app.execute(cli.command).await
}
