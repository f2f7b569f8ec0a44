use {
    super::{super::lex::Lexeme, Error, Result},
    std::iter::Peekable,
};

/// Read a lexeme, failing at the end of the input.
pub fn next<'a>(lexemes: &mut impl Iterator<Item=Lexeme<'a>>)
    -> Result<Lexeme<'a>>
{
    lexemes.next().ok_or(Error::UnexpectedEof)
}

/// Read a lexeme if it has the given text.
pub fn next_if_text<'a>(
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
    text: &str,
) -> Option<Lexeme<'a>>
{
    lexemes.next_if(|lexeme| lexeme.text == text)
}

/// Whether the input has been exhausted.
pub fn at_end<'a>(lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>)
    -> bool
{
    lexemes.peek().is_none()
}
