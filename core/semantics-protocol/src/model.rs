use rkyv::{Archive, Deserialize, Serialize};
use crate::tags::{InfluenceType, Polarity, PosTag, SentenceType, SentimentLabel, Tense};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ModalityMarker {
    pub marker: String,
    pub label: String,
}

/// Raw categorized word lists. This is the on-disk form of a lexicon
/// (JSON or rkyv); lookups go through an index built from it.
/// Lists missing from a JSON lexicon are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[archive(check_bytes)]
pub struct LexiconData {
    pub version: u32,
    pub determiners: Vec<String>,
    pub pronouns: Vec<String>,
    pub question_words: Vec<String>,
    pub common_verbs: Vec<String>,
    pub verb_suffixes: Vec<String>,
    pub adverb_suffixes: Vec<String>,
    pub adjective_suffixes: Vec<String>,
    pub sentiment_positive: Vec<String>,
    pub sentiment_negative: Vec<String>,
    pub negations: Vec<String>,
    pub intensifiers: Vec<String>,
    pub diminishers: Vec<String>,
    pub quantifiers: Vec<String>,
    pub temporal_cues: Vec<String>,
    pub modality: Vec<ModalityMarker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Sentiment {
    pub score: i32,
    pub label: SentimentLabel,
}

impl Sentiment {
    pub const fn from_score(score: i32) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// How one token contributed to the sentence-level judgment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordInfluence {
    pub token: String,
    pub lemma: String,
    pub index: usize,
    pub pos_guess: PosTag,
    pub influence_type: InfluenceType,
    pub weight: f64,
}

/// Full analysis of one sentence. Field order is the report/JSON order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AnalysisRecord {
    pub sentence: String,
    pub sentence_type: SentenceType,
    pub polarity: Polarity,
    pub modality: Vec<String>,
    pub tense: Tense,
    pub temporal_cues: Vec<String>,
    pub quantifiers: Vec<String>,
    pub main_predicate: Option<String>,
    pub subject: Option<String>,
    pub object: Option<String>,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    pub word_influence: Vec<WordInfluence>,
}
