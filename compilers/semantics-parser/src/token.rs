#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One token of a sentence. `text` borrows from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub lemma: String,
    pub index: usize,
}

/// Lowercased surface text with apostrophes removed.
pub fn lemmatize(text: &str) -> String {
    text.to_lowercase().replace('\'', "")
}
