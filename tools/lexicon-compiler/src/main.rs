use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use semantics_lexicon::{archive_data, english, Lexicon};
use semantics_protocol::LexiconData;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to an rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE", required_unless_present = "dump_default")]
    input: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Write the built-in English lexicon as JSON instead of compiling.
    #[arg(long, conflicts_with = "input")]
    dump_default: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.input {
        Some(input) => compile(input, &cli.output),
        None => dump_default(&cli.output),
    }
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    info!(path = %input.display(), "reading lexicon JSON");
    let input_data = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let data: LexiconData = serde_json::from_str(&input_data)?;

    // Refuse to write an archive the runtime would reject.
    Lexicon::from_data(&data)?;

    info!(
        version = data.version,
        common_verbs = data.common_verbs.len(),
        modality_markers = data.modality.len(),
        "compiling lexicon"
    );

    let bytes = archive_data(&data)?;
    fs::write(output, bytes.as_slice())
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(path = %output.display(), bytes = bytes.len(), "archive written");
    Ok(())
}

fn dump_default(output: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&english::data())?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;

    info!(path = %output.display(), "built-in lexicon written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantics_protocol::LexFlags;

    #[test]
    fn test_dump_then_compile() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("english.json");
        let bin_path = dir.path().join("english.rkyv");

        dump_default(&json_path).unwrap();
        compile(&json_path, &bin_path).unwrap();

        let lexicon = Lexicon::load(&bin_path).unwrap();
        assert_eq!(lexicon.version(), english::VERSION);
        assert!(lexicon.is("not", LexFlags::NEGATION));
        assert_eq!(lexicon.modality_label("might"), Some("possibility"));
    }

    #[test]
    fn test_invalid_lexicon_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("bad.json");
        let bin_path = dir.path().join("bad.rkyv");

        let mut data = english::data();
        data.verb_suffixes.push(String::new());
        fs::write(&json_path, serde_json::to_string(&data).unwrap()).unwrap();

        assert!(compile(&json_path, &bin_path).is_err());
        assert!(!bin_path.exists());
    }
}
