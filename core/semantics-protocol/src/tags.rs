use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

macro_rules! define_tag {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        #[repr(u8)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The lowercase tag used in reports and JSON.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_tag!(
    /// Coarse part-of-speech guess for a single lemma.
    PosTag {
        Verb => "verb",
        Adverb => "adverb",
        Adjective => "adjective",
        Determiner => "determiner",
        Pronoun => "pronoun",
        QuestionWord => "question_word",
        Number => "number",
        Punctuation => "punctuation",
        Noun => "noun",
    }
);

define_tag!(
    SentenceType {
        Interrogative => "interrogative",
        Exclamatory => "exclamatory",
        Declarative => "declarative",
    }
);

define_tag!(
    Tense {
        Past => "past",
        Future => "future",
        Present => "present",
    }
);

define_tag!(
    Polarity {
        Affirmative => "affirmative",
        Negative => "negative",
    }
);

define_tag!(
    SentimentLabel {
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
    }
);

define_tag!(
    /// Semantic role a token plays in the overall judgment.
    InfluenceType {
        Background => "background",
        Content => "content",
        Negation => "negation",
        Intensifier => "intensifier",
        Diminisher => "diminisher",
        Quantifier => "quantifier",
        Modality => "modality",
    }
);

impl InfluenceType {
    /// Fixed weight attached to each influence type.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Background => 0.2,
            Self::Content => 1.0,
            Self::Negation => 1.4,
            Self::Intensifier => 1.2,
            Self::Diminisher => 0.6,
            Self::Quantifier => 1.1,
            Self::Modality => 1.1,
        }
    }
}

impl SentimentLabel {
    pub const fn from_score(score: i32) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

bitflags! {
    /// Word-list categories a lemma belongs to.
    /// A single lemma may carry several (e.g. "no" is a determiner and a negation).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LexFlags: u32 {
        const DETERMINER = 1;
        const PRONOUN = 2;
        const QUESTION_WORD = 4;
        const COMMON_VERB = 8;

        const SENTIMENT_POSITIVE = 16;
        const SENTIMENT_NEGATIVE = 32;

        const NEGATION = 64;
        const INTENSIFIER = 128;
        const DIMINISHER = 256;

        const QUANTIFIER = 512;
        const TEMPORAL_CUE = 1024;
        const MODALITY = 2048;
    }
}
