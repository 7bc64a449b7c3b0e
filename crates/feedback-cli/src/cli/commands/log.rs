use super::{exit_codes, open_store};
use crate::cli::args::LogArgs;
use crate::config::CliConfig;
use anyhow::Context;
use feedback_core::FeedbackEntry;
use std::io::Read;
use std::path::Path;

pub fn cmd_log(args: LogArgs, cfg: &CliConfig) -> anyhow::Result<i32> {
    let entry = match &args.json {
        Some(path) => match read_entry(path) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("config error: {e:#}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => FeedbackEntry::from(args.fields),
    };

    let store = open_store(&args.db.db, cfg)?;
    store.append(&entry)?;

    tracing::info!(
        event = "feedback.logged",
        path = %store.path().display(),
        model_a = %entry.model_a,
        model_b = %entry.model_b,
        feedback = %entry.feedback
    );
    Ok(exit_codes::OK)
}

fn read_entry(path: &Path) -> anyhow::Result<FeedbackEntry> {
    let raw = if path == Path::new("-") {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("failed to read record from stdin")?;
        s
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record: {}", path.display()))?
    };
    FeedbackEntry::from_json(&raw).context("invalid feedback record JSON")
}
