use std::sync::LazyLock;

use regex::Regex;
use semantics_lexicon::{Lexicon, SuffixClass};
use semantics_protocol::{LexFlags, PosTag};

// Letter categories only: no letter numbers (Nl) or combining marks.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letter class must compile"));

static DECIMAL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+$").expect("digit class must compile"));

type PosRule = (fn(&Lexicon, &str) -> bool, PosTag);

/// Checked top to bottom; the first matching rule decides the tag.
/// Reordering these changes the output.
const POS_RULES: [PosRule; 10] = [
    (is_common_verb, PosTag::Verb),
    (is_third_person_verb, PosTag::Verb),
    (has_verb_suffix, PosTag::Verb),
    (has_adverb_suffix, PosTag::Adverb),
    (has_adjective_suffix, PosTag::Adjective),
    (is_determiner, PosTag::Determiner),
    (is_pronoun, PosTag::Pronoun),
    (is_question_word, PosTag::QuestionWord),
    (is_number, PosTag::Number),
    (is_not_alphabetic, PosTag::Punctuation),
];

/// Coarse part-of-speech guess for a lemma. Falls back to [`PosTag::Noun`].
pub fn guess_pos(lexicon: &Lexicon, lemma: &str) -> PosTag {
    POS_RULES
        .iter()
        .find(|(matches, _)| matches(lexicon, lemma))
        .map_or(PosTag::Noun, |&(_, tag)| tag)
}

/// Non-empty and made only of Unicode letters (general category `L*`).
pub fn is_alphabetic(lemma: &str) -> bool {
    LETTERS.is_match(lemma)
}

/// Non-empty and made only of decimal digits (general category `Nd`).
pub fn is_digits(lemma: &str) -> bool {
    DECIMAL_DIGITS.is_match(lemma)
}

/// Alphabetic, and neither a determiner nor a pronoun.
pub fn is_content_word(lexicon: &Lexicon, lemma: &str) -> bool {
    is_alphabetic(lemma) && !lexicon.is(lemma, LexFlags::DETERMINER | LexFlags::PRONOUN)
}

fn is_common_verb(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::COMMON_VERB)
}

// Naive third person singular: "likes" -> "like".
fn is_third_person_verb(lexicon: &Lexicon, lemma: &str) -> bool {
    lemma
        .strip_suffix('s')
        .map_or(false, |stem| lexicon.is(stem, LexFlags::COMMON_VERB))
}

fn has_verb_suffix(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.has_suffix(lemma, SuffixClass::Verb)
}

fn has_adverb_suffix(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.has_suffix(lemma, SuffixClass::Adverb)
}

fn has_adjective_suffix(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.has_suffix(lemma, SuffixClass::Adjective)
}

fn is_determiner(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::DETERMINER)
}

fn is_pronoun(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::PRONOUN)
}

fn is_question_word(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::QUESTION_WORD)
}

fn is_number(_: &Lexicon, lemma: &str) -> bool {
    is_digits(lemma)
}

fn is_not_alphabetic(_: &Lexicon, lemma: &str) -> bool {
    !is_alphabetic(lemma)
}
