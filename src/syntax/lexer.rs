use std::str::Split;

use super::token::{Operator, Token};

pub(crate) struct Lexer<'src> {
    words: Option<Split<'src, char>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.as_mut()?.next().map(classify)
    }
}

impl<'src> Lexer<'src> {
    // Empty input lexes to nothing. Any other input yields one token per
    // space-separated word; repeated spaces produce empty words.
    pub fn new(src: &'src str) -> Self {
        Self {
            words: (!src.is_empty()).then(|| src.split(' ')),
        }
    }
}

fn classify(word: &str) -> Token<'_> {
    match word.chars().next() {
        Some(c) if c.is_ascii_digit() => Token::Number(word),
        Some('+') => Token::Op(Operator::Plus),
        _ => Token::Word(word),
    }
}
