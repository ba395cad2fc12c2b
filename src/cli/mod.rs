// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands the work to Layer 2, and prints the results.
//
// Only this layer writes to stdout. Logging goes to stderr so
// `export` output can be piped straight into a file.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::application::{
    catalog_use_case::CatalogUseCase,
    export_use_case::{ExportUseCase, ALL_TOPICS},
    quiz_use_case::QuizUseCase,
    search_use_case::SearchUseCase,
};
use crate::domain::question::QuestionRecord;
use commands::{Commands, ExportArgs, QuizArgs, SearchArgs, ShowArgs};

#[derive(Parser, Debug)]
#[command(
    name = "numpy-qa-bank",
    version,
    about = "Browse, search and drill a bank of NumPy interview questions."
)]
pub struct Cli {
    /// Load topic files (.json / .yaml) from this directory
    /// instead of the built-in question bank
    #[arg(long, global = true, env = "QA_BANK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Open the bank, then dispatch to the matching handler.
    pub fn run(self) -> Result<()> {
        let bank = CatalogUseCase::open(self.data_dir)?;

        match self.command {
            Commands::Topics       => run_topics(&bank),
            Commands::Show(args)   => run_show(&bank, args),
            Commands::Search(args) => run_search(&bank, args),
            Commands::Quiz(args)   => run_quiz(&bank, args),
            Commands::Export(args) => run_export(&bank, args),
            Commands::Validate     => run_validate(&bank),
        }
    }
}

fn run_topics(bank: &CatalogUseCase) -> Result<()> {
    let summaries = bank.summaries();
    let width     = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);

    for s in &summaries {
        println!("{:<width$}  {:>3}  {}", s.id, s.questions, s.title);
    }
    println!(
        "\n{} topics, {} questions",
        summaries.len(),
        bank.catalog().question_count()
    );
    Ok(())
}

fn run_show(bank: &CatalogUseCase, args: ShowArgs) -> Result<()> {
    let follow_ups = !args.no_follow_ups;

    if let Some(index) = args.index {
        let record = bank.record(&args.topic, index)?;
        print_record(index + 1, record, true, follow_ups);
        return Ok(());
    }

    let topic = bank.topic(&args.topic)?;
    println!("# {} ({} questions)\n", topic.title(), topic.len());
    for (i, record) in topic.questions.iter().enumerate() {
        print_record(i + 1, record, true, follow_ups);
    }
    Ok(())
}

fn run_search(bank: &CatalogUseCase, args: SearchArgs) -> Result<()> {
    let hits = SearchUseCase::new(bank.catalog())
        .search(&args.query, args.topic.as_deref(), args.limit)?;

    if hits.is_empty() {
        println!("No questions match '{}'.", args.query);
        return Ok(());
    }

    for hit in &hits {
        println!(
            "[{} #{}] (score {}) {}",
            hit.topic, hit.index, hit.score, hit.record.main_question
        );
    }
    Ok(())
}

fn run_quiz(bank: &CatalogUseCase, args: QuizArgs) -> Result<()> {
    let items = QuizUseCase::new(bank.catalog())
        .draw(args.topic.as_deref(), args.count, args.seed)?;

    for (i, item) in items.iter().enumerate() {
        println!("({} #{})", item.topic, item.index);
        print_record(i + 1, item.record, args.reveal, true);
    }
    Ok(())
}

fn run_export(bank: &CatalogUseCase, args: ExportArgs) -> Result<()> {
    let export = ExportUseCase::new(bank.catalog(), args.format.into());

    match args.out {
        Some(dir) => {
            for path in export.write(&args.topic, dir)? {
                println!("{}", path.display());
            }
        }
        None if args.topic.eq_ignore_ascii_case(ALL_TOPICS) => {
            bail!("Exporting all topics needs --out <DIR>");
        }
        None => print!("{}", export.render(&args.topic)?),
    }
    Ok(())
}

/// The report goes to stdout so it survives a quiet RUST_LOG.
fn run_validate(bank: &CatalogUseCase) -> Result<()> {
    let report = bank.validate();

    if report.is_clean() {
        println!(
            "OK: {} questions in {} topics",
            bank.catalog().question_count(),
            bank.catalog().len()
        );
        return Ok(());
    }

    let problems = report.problems();
    for p in &problems {
        println!("{p}");
    }
    bail!("{} problem(s) found in the question bank", problems.len())
}

/// Print one record as a numbered block.
fn print_record(number: usize, record: &QuestionRecord, explanation: bool, follow_ups: bool) {
    println!("{}. {}", number, record.main_question);
    if explanation {
        println!("   {}", record.explanation);
    }
    if follow_ups {
        for f in &record.follow_up_questions {
            println!("   - {}", f);
        }
    }
    println!();
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::FormatArg;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["numpy-qa-bank", "export", "broadcasting"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.topic, "broadcasting");
                assert_eq!(args.format, FormatArg::Json);
                assert!(args.out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from([
            "numpy-qa-bank", "quiz", "--count", "3", "--seed", "9", "--data-dir", "bank",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("bank")));
        assert!(matches!(
            cli.command,
            Commands::Quiz(QuizArgs { count: 3, seed: Some(9), reveal: false, .. })
        ));
    }

    #[test]
    fn test_quiz_reveal_flag() {
        let cli = Cli::try_parse_from(["numpy-qa-bank", "quiz", "--reveal"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Quiz(QuizArgs { reveal: true, count: 5, seed: None, .. })
        ));
    }

    #[test]
    fn test_export_all_to_stdout_is_rejected() {
        let mut cli = Cli::try_parse_from(["numpy-qa-bank", "export", "all"]).unwrap();
        // Pin the embedded corpus whatever QA_BANK_DATA_DIR says
        cli.data_dir = None;
        assert!(cli.run().is_err());
    }

    #[test]
    fn test_validate_embedded_succeeds() {
        let mut cli = Cli::try_parse_from(["numpy-qa-bank", "validate"]).unwrap();
        cli.data_dir = None;
        cli.run().unwrap();
    }

    #[test]
    fn test_validate_fails_on_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("good.json"),
            r#"[{"Main question": "q", "Explanation": "e", "Follow-up questions": ["f"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("broken.json"),
            r#"[{"Main question": "q", "Explanation": "e"}]"#,
        )
        .unwrap();

        let data_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["numpy-qa-bank", "validate", "--data-dir", data_dir]).unwrap();
        let err = cli.run().unwrap_err();
        assert_eq!(err.to_string(), "1 problem(s) found in the question bank");
    }
}
