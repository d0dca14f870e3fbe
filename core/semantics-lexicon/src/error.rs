use std::path::PathBuf;

use crate::SuffixClass;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The bytes are not a valid archived lexicon.
    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error("{class} suffix list contains an empty suffix")]
    EmptySuffix { class: SuffixClass },

    #[error("modality marker '{marker}' has an empty label")]
    EmptyModalityLabel { marker: String },
}
