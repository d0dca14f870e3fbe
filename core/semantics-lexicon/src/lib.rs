pub mod english;
pub mod error;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use rkyv::AlignedVec;
use semantics_protocol::{LexFlags, LexiconData};
use tracing::debug;

pub use error::LexiconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixClass {
    Verb,
    Adverb,
    Adjective,
}

impl fmt::Display for SuffixClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuffixClass::Verb => "verb",
            SuffixClass::Adverb => "adverb",
            SuffixClass::Adjective => "adjective",
        })
    }
}

/// Read-only lookup index over a [`LexiconData`].
///
/// Every word category is folded into one map from lemma to [`LexFlags`],
/// so all memberships of a lemma come out of a single hash lookup.
/// Build it once and share it by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: u32,
    entries: HashMap<String, LexFlags>,
    modality: HashMap<String, String>,
    verb_suffixes: Vec<String>,
    adverb_suffixes: Vec<String>,
    adjective_suffixes: Vec<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self::build(&english::data())
    }

    /// Validates `data` and builds the lookup index.
    pub fn from_data(data: &LexiconData) -> Result<Self, LexiconError> {
        let suffix_lists = [
            (SuffixClass::Verb, &data.verb_suffixes),
            (SuffixClass::Adverb, &data.adverb_suffixes),
            (SuffixClass::Adjective, &data.adjective_suffixes),
        ];
        for (class, suffixes) in suffix_lists {
            if suffixes.iter().any(|s| s.is_empty()) {
                return Err(LexiconError::EmptySuffix { class });
            }
        }

        if let Some(entry) = data.modality.iter().find(|m| m.label.is_empty()) {
            return Err(LexiconError::EmptyModalityLabel {
                marker: entry.marker.clone(),
            });
        }

        Ok(Self::build(data))
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let data: LexiconData = serde_json::from_str(json)?;
        Self::from_data(&data)
    }

    /// Loads an archive written by [`archive_data`].
    pub fn from_archive_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        Self::from_data(&data_from_archive(bytes)?)
    }

    /// Loads a lexicon file: `.json` is parsed as JSON, anything else as an archive.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let bytes = fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), is_json, "loading lexicon");

        if is_json {
            let data: LexiconData = serde_json::from_slice(&bytes)?;
            Self::from_data(&data)
        } else {
            Self::from_archive_bytes(&bytes)
        }
    }

    fn build(data: &LexiconData) -> Self {
        let mut entries: HashMap<String, LexFlags> = HashMap::new();

        let categories = [
            (&data.determiners, LexFlags::DETERMINER),
            (&data.pronouns, LexFlags::PRONOUN),
            (&data.question_words, LexFlags::QUESTION_WORD),
            (&data.common_verbs, LexFlags::COMMON_VERB),
            (&data.sentiment_positive, LexFlags::SENTIMENT_POSITIVE),
            (&data.sentiment_negative, LexFlags::SENTIMENT_NEGATIVE),
            (&data.negations, LexFlags::NEGATION),
            (&data.intensifiers, LexFlags::INTENSIFIER),
            (&data.diminishers, LexFlags::DIMINISHER),
            (&data.quantifiers, LexFlags::QUANTIFIER),
            (&data.temporal_cues, LexFlags::TEMPORAL_CUE),
        ];
        for (words, flag) in categories {
            for word in words {
                *entries.entry(word.to_lowercase()).or_insert_with(LexFlags::empty) |= flag;
            }
        }

        let mut modality = HashMap::new();
        for entry in &data.modality {
            let marker = entry.marker.to_lowercase();
            *entries.entry(marker.clone()).or_insert_with(LexFlags::empty) |= LexFlags::MODALITY;
            modality.insert(marker, entry.label.clone());
        }

        let lower = |suffixes: &[String]| -> Vec<String> {
            suffixes.iter().map(|s| s.to_lowercase()).collect()
        };

        debug!(
            version = data.version,
            entries = entries.len(),
            markers = modality.len(),
            "built lexicon index"
        );

        Self {
            version: data.version,
            entries,
            modality,
            verb_suffixes: lower(&data.verb_suffixes),
            adverb_suffixes: lower(&data.adverb_suffixes),
            adjective_suffixes: lower(&data.adjective_suffixes),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// All categories `lemma` belongs to (empty if unknown).
    pub fn flags(&self, lemma: &str) -> LexFlags {
        self.entries.get(lemma).copied().unwrap_or_else(LexFlags::empty)
    }

    pub fn is(&self, lemma: &str, category: LexFlags) -> bool {
        self.flags(lemma).intersects(category)
    }

    pub fn modality_label(&self, lemma: &str) -> Option<&str> {
        self.modality.get(lemma).map(String::as_str)
    }

    pub fn suffixes(&self, class: SuffixClass) -> &[String] {
        match class {
            SuffixClass::Verb => &self.verb_suffixes,
            SuffixClass::Adverb => &self.adverb_suffixes,
            SuffixClass::Adjective => &self.adjective_suffixes,
        }
    }

    pub fn has_suffix(&self, lemma: &str, class: SuffixClass) -> bool {
        self.suffixes(class).iter().any(|suffix| lemma.ends_with(suffix.as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

/// Serializes lexicon data into the binary archive format.
pub fn archive_data(data: &LexiconData) -> Result<AlignedVec, LexiconError> {
    rkyv::to_bytes::<_, 1024>(data).map_err(|e| LexiconError::Archive(e.to_string()))
}

/// Validates and deserializes an archive produced by [`archive_data`].
pub fn data_from_archive(bytes: &[u8]) -> Result<LexiconData, LexiconError> {
    // Archives must be read from an aligned buffer.
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    rkyv::from_bytes::<LexiconData>(&aligned).map_err(|e| LexiconError::Archive(e.to_string()))
}
