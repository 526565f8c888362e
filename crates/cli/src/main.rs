use std::process::ExitCode;

use clap::Parser;
use log::debug;

use command_cuts_cli::cli_args::Args;
use command_cuts_cli::commands;
use command_cuts_core::config::{self, ScopeConfig};
use command_cuts_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Settings path: `{}`", config_path);
    let settings = config::load_settings(&config_path)?;

    let scopes = ScopeConfig::from_environment();
    let request = args.to_request()?;
    debug!("Request: {:?}", request);

    commands::execute(&request, &scopes, &settings)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
