//! Parsing sequences of tokens into terms.
//!
//! The grammar is prefix notation with a single token of lookahead:
//!
//! ```text
//! term ::= integer
//!        | keyword
//!        | "ap" term term
//!        | "(" term ")"
//!        | symbol
//!        | symbol "=" term
//! ```

pub use self::error::*;

use {
    self::combinators::*,
    super::lex::{Lexeme, Lexer, Location},
    crate::term::{Primitive, Term},
    regex::Regex,
    std::{iter::Peekable, rc::Rc, sync::OnceLock},
};

mod combinators;
mod error;

/// Deepest nesting of terms accepted by the parser.
pub const MAX_NESTING: usize = 500;

/// Parse a complete input line into a single term.
///
/// Fails if any tokens remain after the term.
pub fn parse_input(input: &str) -> Result<Rc<Term>>
{
    let mut lexemes = Lexer::new(input).peekable();
    let term = read_term(&mut lexemes)?;
    match lexemes.next() {
        None =>
            Ok(term),
        Some(Lexeme{location, text}) =>
            Err(Error::UnexpectedToken(location, text.into())),
    }
}

/// Read one term, leaving the remaining lexemes in the iterator.
pub fn read_term<'a>(
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
) -> Result<Rc<Term>>
{
    read_nested(0, lexemes)
}

/// Read a term that is nested inside `depth` other terms.
fn read_nested<'a>(
    depth: usize,
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
) -> Result<Rc<Term>>
{
    let Lexeme{location, text} = next(lexemes)?;

    if depth >= MAX_NESTING {
        return Err(Error::TooDeep(location));
    }

    if is_integer_literal(text) {
        let integer = text.parse()
            .map_err(|_| Error::IntegerOutOfRange(location, text.into()))?;
        return Ok(Rc::new(Term::Number(integer)));
    }

    match text {
        "ap" => read_application(depth + 1, location, lexemes),
        "("  => read_parenthesized(depth + 1, location, lexemes),
        ")"  => Err(Error::UnexpectedToken(location, text.into())),
        _    =>
            match Primitive::from_keyword(text) {
                Some(primitive) => Ok(Term::primitive(primitive)),
                None            => read_symbol_or_assignment(depth + 1, text, lexemes),
            },
    }
}

/// `ap function argument`, after `ap`.
fn read_application<'a>(
    depth: usize,
    ap: Location,
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
) -> Result<Rc<Term>>
{
    let mut argument = || {
        if at_end(lexemes) {
            return Err(Error::MissingArguments(ap, "ap"));
        }
        read_nested(depth, lexemes)
    };
    let function = argument()?;
    let argument = argument()?;
    Ok(Term::application(function, argument))
}

/// `( term )`, after `(`.
fn read_parenthesized<'a>(
    depth: usize,
    open: Location,
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
) -> Result<Rc<Term>>
{
    if at_end(lexemes) {
        return Err(Error::EmptyParentheses(open));
    }
    let term = read_nested(depth, lexemes)?;
    match lexemes.next() {
        Some(Lexeme{text: ")", ..}) =>
            Ok(term),
        Some(Lexeme{location, text}) =>
            Err(Error::ExpectedClosingParenthesis(location, text.into())),
        None =>
            Err(Error::UnclosedParentheses(open)),
    }
}

/// A symbol, optionally followed by `= term`.
fn read_symbol_or_assignment<'a>(
    depth: usize,
    name: &str,
    lexemes: &mut Peekable<impl Iterator<Item=Lexeme<'a>>>,
) -> Result<Rc<Term>>
{
    if next_if_text(lexemes, "=").is_some() {
        let value = read_nested(depth, lexemes)?;
        Ok(Rc::new(Term::Assignment{name: name.into(), value}))
    } else {
        Ok(Term::symbol(name))
    }
}

fn is_integer_literal(text: &str) -> bool
{
    static INTEGER_LITERAL: OnceLock<Regex> = OnceLock::new();
    INTEGER_LITERAL
        .get_or_init(|| Regex::new("^-?[0-9]+$").unwrap())
        .is_match(text)
}
