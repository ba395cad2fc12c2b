// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   topics    list every topic with its question count
//   show      print a topic, or one record of it
//   search    keyword search across the bank
//   quiz      draw random questions for practice
//   export    write topics out as JSON or YAML
//   validate  check every record's shape
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::data::format::TopicFormat;

/// Top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics and how many questions each holds
    Topics,

    /// Print the questions of one topic
    Show(ShowArgs),

    /// Find questions mentioning the given words
    Search(SearchArgs),

    /// Draw random questions for a practice drill
    Quiz(QuizArgs),

    /// Write topics out as JSON or YAML
    Export(ExportArgs),

    /// Check that every record is well formed
    Validate,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Topic identifier, e.g. "broadcasting" or "linear-algebra"
    pub topic: String,

    /// Show only the record at this zero-based position
    #[arg(long)]
    pub index: Option<usize>,

    /// Print main questions and explanations only
    #[arg(long)]
    pub no_follow_ups: bool,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Words to look for
    pub query: String,

    /// Restrict the search to one topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Maximum number of results
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Draw only from this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Number of questions to draw
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the explanation under each question
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Topic identifier, or "all"
    pub topic: String,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// Directory to write files into; prints to stdout when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// File formats selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Yaml,
}

/// The application layer never sees clap types.
impl From<FormatArg> for TopicFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => TopicFormat::Json,
            FormatArg::Yaml => TopicFormat::Yaml,
        }
    }
}
