//! Built-in English word lists.

use semantics_protocol::{LexiconData, ModalityMarker};

pub const VERSION: u32 = 1;

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "most",
];

pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "their", "our",
];

pub const QUESTION_WORDS: &[&str] = &["who", "what", "when", "where", "why", "how", "which"];

pub const COMMON_VERBS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "have", "has", "had", "do", "does", "did", "say",
    "make", "go", "get", "see", "know", "think", "take", "come", "give", "find", "tell", "work",
    "call", "try", "ask", "need", "feel", "become", "leave", "put", "mean", "keep", "let",
    "begin", "help", "talk", "turn", "like", "start", "show", "hear", "play", "run", "move",
    "live", "believe", "bring", "happen", "write", "provide", "sit", "stand", "lose", "pay",
    "meet", "include", "continue", "set", "learn", "change", "lead", "understand", "watch",
    "follow", "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "open", "walk",
    "win", "teach",
];

pub const VERB_SUFFIXES: &[&str] = &["ed", "ing", "en", "ify", "ise", "ize"];
pub const ADVERB_SUFFIXES: &[&str] = &["ly"];
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "al", "ive", "less", "ic", "ish"];

pub const SENTIMENT_POSITIVE: &[&str] = &[
    "happy", "joy", "love", "great", "excellent", "good", "wonderful", "amazing", "success",
    "positive",
];

pub const SENTIMENT_NEGATIVE: &[&str] = &[
    "sad", "angry", "hate", "bad", "terrible", "awful", "horrible", "failure", "negative", "poor",
];

pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nowhere", "hardly", "scarcely",
    "barely",
];

pub const INTENSIFIERS: &[&str] = &[
    "very", "extremely", "really", "so", "too", "quite", "highly", "deeply", "utterly",
];

// Multiword entries ("a_bit") never match a single token.
pub const DIMINISHERS: &[&str] = &[
    "slightly", "somewhat", "a_bit", "barely", "hardly", "sort_of", "kind_of",
];

pub const QUANTIFIERS: &[&str] = &[
    "all", "every", "each", "many", "few", "some", "any", "several", "most", "none",
];

pub const TEMPORAL_CUES: &[&str] = &[
    "yesterday", "today", "tomorrow", "now", "currently", "soon", "later", "previously",
    "recently",
];

pub const MODALITY: &[(&str, &str)] = &[
    ("must", "obligation"),
    ("should", "recommendation"),
    ("ought", "recommendation"),
    ("may", "permission"),
    ("might", "possibility"),
    ("could", "possibility"),
    ("can", "ability"),
    ("will", "future"),
    ("would", "conditional"),
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The default English lexicon as plain data.
pub fn data() -> LexiconData {
    LexiconData {
        version: VERSION,
        determiners: owned(DETERMINERS),
        pronouns: owned(PRONOUNS),
        question_words: owned(QUESTION_WORDS),
        common_verbs: owned(COMMON_VERBS),
        verb_suffixes: owned(VERB_SUFFIXES),
        adverb_suffixes: owned(ADVERB_SUFFIXES),
        adjective_suffixes: owned(ADJECTIVE_SUFFIXES),
        sentiment_positive: owned(SENTIMENT_POSITIVE),
        sentiment_negative: owned(SENTIMENT_NEGATIVE),
        negations: owned(NEGATIONS),
        intensifiers: owned(INTENSIFIERS),
        diminishers: owned(DIMINISHERS),
        quantifiers: owned(QUANTIFIERS),
        temporal_cues: owned(TEMPORAL_CUES),
        modality: MODALITY
            .iter()
            .map(|(marker, label)| ModalityMarker {
                marker: marker.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}
