use clap::Parser;

mod cli;
mod config;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};

fn main() {
    let cli = Cli::parse();
    let cfg = config::CliConfig::from_env();
    config::init_logging(&cfg);

    let code = match dispatch(cli, &cfg) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}
