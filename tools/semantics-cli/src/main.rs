mod json;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use semantics_analyzer::{format_analysis, AnalyzeError, Analyzer};
use semantics_lexicon::Lexicon;
use semantics_parser::is_separator;
use semantics_protocol::AnalysisRecord;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status when there is nothing to analyze.
const EXIT_NO_SENTENCE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "nlp-semantics",
    author,
    version,
    about = "Analyze sentence meaning and word-level semantic influence."
)]
struct Cli {
    /// Sentence to analyze.
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    sentence: Vec<String>,

    /// Read the sentence from standard input.
    #[arg(long)]
    stdin: bool,

    /// Output raw JSON instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Lexicon file: JSON, or a binary archive from lexicon-compiler.
    #[arg(short, long, value_name = "FILE", env = "NLP_SEMANTICS_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => Lexicon::english(),
    };
    info!(version = lexicon.version(), "lexicon ready");

    let analyzer = Analyzer::new(&lexicon);

    let input = if cli.stdin {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read standard input")?;

        String::from_utf8(bytes).map_err(|err| AnalyzeError::from(err.utf8_error()))?
    } else {
        cli.sentence.join(" ")
    };

    let sentence = input.trim_matches(is_separator);
    if sentence.is_empty() {
        return Ok(no_sentence());
    }
    let analysis = analyzer.analyze(sentence);

    print_analysis(&analysis, cli.json)?;
    Ok(ExitCode::SUCCESS)
}

fn no_sentence() -> ExitCode {
    eprintln!("No sentence provided.");
    ExitCode::from(EXIT_NO_SENTENCE)
}

fn print_analysis(analysis: &AnalysisRecord, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", json::to_ascii_json(analysis)?);
    } else {
        println!("{}", format_analysis(analysis));
    }
    Ok(())
}
