//! Splitting input lines into tokens.

pub use self::lexeme::*;

use std::{iter::Peekable, str::CharIndices};

mod lexeme;

/// Splits an input line into a sequence of lexemes.
///
/// Parentheses are always lexemes of their own;
/// everything else is separated by whitespace.
/// There are no comments, quotes, or escapes, so lexing cannot fail.
pub struct Lexer<'a>
{
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a>
{
    /// Create a lexer for an input line.
    pub fn new(input: &'a str) -> Self
    {
        Self{input, chars: input.char_indices().peekable()}
    }

    fn read_lexeme(&mut self) -> Option<Lexeme<'a>>
    {
        self.read_whitespace();
        let (start, c) = self.chars.next()?;
        let end =
            if Self::is_parenthesis(c) {
                start + c.len_utf8()
            } else {
                self.read_word(start + c.len_utf8())
            };
        let location = Location{offset: start};
        Some(Lexeme{location, text: &self.input[start .. end]})
    }

    fn read_whitespace(&mut self)
    {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {
        }
    }

    /// Read the rest of a word, returning the offset just past it.
    fn read_word(&mut self, mut end: usize) -> usize
    {
        let is_word = |&(_, c): &(usize, char)|
            !c.is_whitespace() && !Self::is_parenthesis(c);
        while let Some((i, c)) = self.chars.next_if(is_word) {
            end = i + c.len_utf8();
        }
        end
    }

    fn is_parenthesis(c: char) -> bool
    {
        matches!(c, '(' | ')')
    }
}

impl<'a> Iterator for Lexer<'a>
{
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.read_lexeme()
    }
}

/// Split an input line into the texts of its tokens.
pub fn tokenize(input: &str) -> Vec<&str>
{
    Lexer::new(input).map(|lexeme| lexeme.text).collect()
}
