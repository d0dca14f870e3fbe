//! Sentence-level extractors. Each one is a pure function of the token
//! sequence (plus POS tags and lexicon where needed).

use std::collections::HashSet;

use semantics_lexicon::Lexicon;
use semantics_parser::is_content_word;
use semantics_parser::token::Token;
use semantics_protocol::{LexFlags, Polarity, PosTag, Sentiment, SentenceType, Tense};

/// How many noun/pronoun tokens next to the verb make up a subject or object.
pub const ARGUMENT_WINDOW: usize = 2;

const SENTENCE_TYPE_RULES: [(&str, SentenceType); 2] = [
    ("?", SentenceType::Interrogative),
    ("!", SentenceType::Exclamatory),
];

pub fn sentence_type(tokens: &[Token]) -> SentenceType {
    SENTENCE_TYPE_RULES
        .iter()
        .find(|(mark, _)| tokens.iter().any(|t| t.text == *mark))
        .map_or(SentenceType::Declarative, |&(_, kind)| kind)
}

type TenseRule = (fn(&Token) -> bool, Tense);

// Suffix check runs on surface text and comes first, so "need" reads as past.
const TENSE_RULES: [TenseRule; 3] = [
    (ends_in_ed, Tense::Past),
    (is_will, Tense::Future),
    (is_past_auxiliary, Tense::Past),
];

fn ends_in_ed(token: &Token) -> bool {
    token.text.to_lowercase().ends_with("ed")
}

fn is_will(token: &Token) -> bool {
    token.lemma == "will"
}

fn is_past_auxiliary(token: &Token) -> bool {
    matches!(token.lemma.as_str(), "was" | "were" | "had")
}

pub fn tense(tokens: &[Token]) -> Tense {
    TENSE_RULES
        .iter()
        .find(|(matches, _)| tokens.iter().any(|t| matches(t)))
        .map_or(Tense::Present, |&(_, tense)| tense)
}

/// Position of the first verb.
pub fn main_verb(tags: &[PosTag]) -> Option<usize> {
    tags.iter().position(|&tag| tag == PosTag::Verb)
}

fn is_argument(tag: PosTag) -> bool {
    matches!(tag, PosTag::Noun | PosTag::Pronoun)
}

fn join_words(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Up to two nouns/pronouns directly preceding the verb, in sentence order.
pub fn subject(tokens: &[Token], tags: &[PosTag], verb: Option<usize>) -> Option<String> {
    let verb = verb?;
    let candidates: Vec<&str> = tokens[..verb]
        .iter()
        .zip(&tags[..verb])
        .filter(|(_, &tag)| is_argument(tag))
        .map(|(token, _)| token.text)
        .collect();

    let start = candidates.len().saturating_sub(ARGUMENT_WINDOW);
    join_words(&candidates[start..])
}

/// Up to two nouns/pronouns following the verb.
pub fn object(tokens: &[Token], tags: &[PosTag], verb: Option<usize>) -> Option<String> {
    let verb = verb?;
    let candidates: Vec<&str> = tokens[verb + 1..]
        .iter()
        .zip(&tags[verb + 1..])
        .filter(|(_, &tag)| is_argument(tag))
        .map(|(token, _)| token.text)
        .take(ARGUMENT_WINDOW)
        .collect();

    join_words(&candidates)
}

/// +1 per positive lemma, -1 per negative lemma. A lemma listed as both counts both ways.
pub fn sentiment(lexicon: &Lexicon, tokens: &[Token]) -> Sentiment {
    let score = tokens.iter().fold(0i32, |mut score, token| {
        let flags = lexicon.flags(&token.lemma);
        if flags.contains(LexFlags::SENTIMENT_POSITIVE) {
            score += 1;
        }
        if flags.contains(LexFlags::SENTIMENT_NEGATIVE) {
            score -= 1;
        }
        score
    });

    Sentiment::from_score(score)
}

pub fn polarity(lexicon: &Lexicon, tokens: &[Token]) -> Polarity {
    if tokens.iter().any(|t| lexicon.is(&t.lemma, LexFlags::NEGATION)) {
        Polarity::Negative
    } else {
        Polarity::Affirmative
    }
}

/// Modality labels in sentence order; repeats are kept.
pub fn modality(lexicon: &Lexicon, tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| lexicon.modality_label(&t.lemma))
        .map(str::to_string)
        .collect()
}

/// Unique content lemmas in first-occurrence order.
pub fn topics(lexicon: &Lexicon, tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|t| t.lemma.as_str())
        .filter(|lemma| is_content_word(lexicon, lemma))
        .filter(|lemma| seen.insert(*lemma))
        .map(str::to_string)
        .collect()
}

fn lemmas_in(lexicon: &Lexicon, tokens: &[Token], category: LexFlags) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| lexicon.is(&t.lemma, category))
        .map(|t| t.lemma.clone())
        .collect()
}

pub fn quantifiers(lexicon: &Lexicon, tokens: &[Token]) -> Vec<String> {
    lemmas_in(lexicon, tokens, LexFlags::QUANTIFIER)
}

pub fn temporal_cues(lexicon: &Lexicon, tokens: &[Token]) -> Vec<String> {
    lemmas_in(lexicon, tokens, LexFlags::TEMPORAL_CUE)
}
