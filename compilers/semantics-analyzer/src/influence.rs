use semantics_lexicon::Lexicon;
use semantics_parser::is_content_word;
use semantics_parser::token::Token;
use semantics_protocol::{InfluenceType, LexFlags, PosTag, WordInfluence};

type InfluenceRule = (fn(&Lexicon, &str) -> bool, InfluenceType);

/// Every rule is checked; a later match overrides an earlier one.
/// So "none" (negation and quantifier) ends up a quantifier.
const INFLUENCE_RULES: [InfluenceRule; 6] = [
    (is_content_word, InfluenceType::Content),
    (is_negation, InfluenceType::Negation),
    (is_intensifier, InfluenceType::Intensifier),
    (is_diminisher, InfluenceType::Diminisher),
    (is_quantifier, InfluenceType::Quantifier),
    (is_modality_marker, InfluenceType::Modality),
];

fn is_negation(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::NEGATION)
}

fn is_intensifier(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::INTENSIFIER)
}

fn is_diminisher(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::DIMINISHER)
}

fn is_quantifier(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::QUANTIFIER)
}

fn is_modality_marker(lexicon: &Lexicon, lemma: &str) -> bool {
    lexicon.is(lemma, LexFlags::MODALITY)
}

pub fn classify(lexicon: &Lexicon, lemma: &str) -> InfluenceType {
    INFLUENCE_RULES
        .iter()
        .filter(|(matches, _)| matches(lexicon, lemma))
        .last()
        .map_or(InfluenceType::Background, |&(_, influence)| influence)
}

/// One entry per token, in token order.
pub fn word_influence(lexicon: &Lexicon, tokens: &[Token], tags: &[PosTag]) -> Vec<WordInfluence> {
    tokens
        .iter()
        .zip(tags)
        .map(|(token, &pos_guess)| {
            let influence_type = classify(lexicon, &token.lemma);
            WordInfluence {
                token: token.text.to_string(),
                lemma: token.lemma.clone(),
                index: token.index,
                pos_guess,
                influence_type,
                weight: influence_type.weight(),
            }
        })
        .collect()
}
