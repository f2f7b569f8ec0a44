use {crate::{eval, render, syntax::parse}, thiserror::Error};

/// Result of handling an input line.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Error returned when an input line could not be handled.
///
/// The message is what the user gets to see.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum Error
{
    #[error("{0}")]
    Syntax(#[from] parse::Error),

    #[error("{0}")]
    Evaluation(#[from] eval::Error),

    #[error("{0}")]
    Render(#[from] render::Error),
}
