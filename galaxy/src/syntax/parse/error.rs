use {super::{super::lex::Location, MAX_NESTING}, thiserror::Error};

/// Result from the parser.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Error returned during parsing.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    #[error("Unexpected EOF; expected term")]
    UnexpectedEof,

    #[error("Syntax error: ‘{1}’ needs two arguments")]
    MissingArguments(Location, &'static str),

    #[error("Unexpected EOF in parentheses; expected term")]
    EmptyParentheses(Location),

    #[error("Unexpected EOF in parentheses; expected ‘)’")]
    UnclosedParentheses(Location),

    #[error("Unexpected token in parentheses: ‘{1}’")]
    ExpectedClosingParenthesis(Location, String),

    #[error("Unexpected token: ‘{1}’")]
    UnexpectedToken(Location, String),

    #[error("Syntax error: terms nested more than {} deep", MAX_NESTING)]
    TooDeep(Location),

    #[error("Integer literal out of range: ‘{1}’")]
    IntegerOutOfRange(Location, String),
}
