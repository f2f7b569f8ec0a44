//! Tokenizing and parsing input lines.

pub mod lex;
pub mod parse;
