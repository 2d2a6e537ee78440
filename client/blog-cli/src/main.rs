//! blog - command-line client for the blog service
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the credential is kept in .blog/session.json
//! blog login --email a@example.com --password secret
//!
//! # List posts mentioning "rust" as a table
//! blog blog list --search rust --table
//!
//! # Follow sign-in changes made by other terminals
//! blog watch
//! ```

use blog_cli::{App, Cli, CliResult, Output, logger};

use blog_api::ApiClient;
use blog_config::Config;
use blog_session::{FileStore, Session};

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match build_app(&cli) {
        Ok(app) => blog_cli::run(&app, cli).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Output::Json(value)) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Output::Text(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Output::Nothing) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, start logging and open the persisted session.
fn build_app(cli: &Cli) -> CliResult<App> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server() {
        config.api.base_url = server.to_string();
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let session = Session::new(FileStore::new(config.session_path()?));
    let api = ApiClient::with_timeout(&config.api.base_url, session, config.api.timeout())?;

    Ok(App::new(api, config.session.poll_interval()))
}
