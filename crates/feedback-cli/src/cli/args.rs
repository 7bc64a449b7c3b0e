use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "feedback",
    version,
    about = "Append side-by-side model feedback to a local SQLite log"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the database and feedback table if missing
    Init(InitArgs),
    /// Append one feedback record
    Log(LogArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DbArgs {
    #[arg(long, env = "FEEDBACK_DB", default_value = feedback_core::DEFAULT_DB_PATH)]
    pub db: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct LogArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// read the record from a JSON object file ("-" for stdin)
    #[arg(long, conflicts_with = "fields")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
#[group(id = "fields", multiple = true)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub use_case: String,

    /// prompt given to both models
    #[arg(long, default_value = "")]
    pub prompt: String,

    #[arg(long, default_value = "")]
    pub model_a: String,

    #[arg(long, default_value = "")]
    pub model_b: String,

    #[arg(long, default_value = "")]
    pub response_a: String,

    #[arg(long, default_value = "")]
    pub response_b: String,

    /// verdict, e.g. A | B | tie
    #[arg(long, default_value = "")]
    pub feedback: String,

    #[arg(long, default_value = "")]
    pub motivation: String,
}

impl From<FieldArgs> for feedback_core::FeedbackEntry {
    fn from(f: FieldArgs) -> Self {
        Self {
            use_case: f.use_case,
            user_prompt: f.prompt,
            model_a: f.model_a,
            model_b: f.model_b,
            model_a_response: f.response_a,
            model_b_response: f.response_b,
            feedback: f.feedback,
            feedback_motivation: f.motivation,
        }
    }
}
