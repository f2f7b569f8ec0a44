//! Interpreter for the galaxy combinator language.
//!
//! Programs are flat sequences of tokens such as `ap ap add 1 2`.
//! Each input line is tokenized, parsed into a [`Term`],
//! and reduced to weak head normal form within a [`Session`],
//! whose environment remembers assignments between lines.

#![warn(missing_docs)]

pub use self::{error::*, session::*, term::*};

pub mod codec;
pub mod config;
pub mod environment;
pub mod eval;
pub mod integer;
pub mod prelude;
pub mod render;
pub mod syntax;

mod error;
mod session;
mod term;
