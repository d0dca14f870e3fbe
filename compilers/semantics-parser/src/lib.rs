pub mod parser;
pub mod pos;
pub mod token;

use tracing::trace;

use crate::parser::parse_with_spans;
use crate::token::{lemmatize, Token};

pub use parser::is_separator;
pub use pos::{guess_pos, is_alphabetic, is_content_word, is_digits};

/// Text -> ordered tokens with lemmas and positions.
/// Separators ([`is_separator`]) split tokens and are never emitted.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    parse_with_spans(input)
        .into_iter()
        .enumerate()
        .map(|(index, span)| {
            let text = &input[span.start..span.end];
            let lemma = lemmatize(text);
            trace!(index, text, lemma = %lemma, "token");

            Token {
                span,
                text,
                lemma,
                index,
            }
        })
        .collect()
}
