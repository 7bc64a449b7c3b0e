use super::args::*;
use crate::config::CliConfig;
use feedback_core::{StorageFailure, Store};
use std::path::Path;

pub mod log;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const STORAGE_ERROR: i32 = 3;
}

pub fn dispatch(cli: Cli, cfg: &CliConfig) -> anyhow::Result<i32> {
    let result = match cli.cmd {
        Command::Init(args) => cmd_init(args, cfg),
        Command::Log(args) => log::cmd_log(args, cfg),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    };
    result.or_else(storage_exit)
}

fn cmd_init(args: InitArgs, cfg: &CliConfig) -> anyhow::Result<i32> {
    let store = open_store(&args.db.db, cfg)?;
    eprintln!("feedback log ready at {}", store.path().display());
    Ok(exit_codes::OK)
}

pub(crate) fn open_store(path: &Path, cfg: &CliConfig) -> anyhow::Result<Store> {
    tracing::info!(event = "feedback.store.open", path = %path.display());
    Ok(Store::open_with_busy_timeout(path, cfg.busy_timeout)?)
}

/// Storage failures get their own exit code; anything else stays fatal.
fn storage_exit(e: anyhow::Error) -> anyhow::Result<i32> {
    if e.downcast_ref::<StorageFailure>().is_some() {
        eprintln!("storage error: {e:#}");
        return Ok(exit_codes::STORAGE_ERROR);
    }
    Err(e)
}
