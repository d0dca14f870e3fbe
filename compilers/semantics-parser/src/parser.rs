use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::satisfy,
    combinator::recognize,
    IResult,
};
use crate::token::Span;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which also split words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn skip_separators(input: &str) -> IResult<&str, &str> {
    take_while(is_separator)(input)
}

/// Longest word, then longest digit run, then one symbol character.
fn raw_token(input: &str) -> IResult<&str, &str> {
    alt((
        take_while1(is_word_char),
        take_while1(|c: char| c.is_ascii_digit()),
        recognize(satisfy(|c| !is_separator(c))),
    ))(input)
}

pub fn parse_with_spans(original_input: &str) -> Vec<Span> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip separators
        input = match skip_separators(input) {
            Ok((rest, _)) => rest,
            Err(_) => break,
        };

        if input.is_empty() {
            break;
        }

        // 2. Match a token
        match raw_token(input) {
            Ok((rest, _)) => {
                let start = original_input.len() - input.len();
                let end = original_input.len() - rest.len();

                result.push(Span::new(start, end));
                input = rest;
            }
            // Only reachable on a separator, which was consumed above.
            Err(_) => break,
        }
    }

    result
}
