use {crate::{codec::DemodulateError, term::Primitive}, thiserror::Error};

/// Result from the evaluator.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Error returned during evaluation.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    #[error("Type error: ‘{primitive}’ needs numeric arguments, got {got}")]
    NotANumber{primitive: Primitive, got: &'static str},

    #[error("Type error: ‘{primitive}’ needs a list argument, got {got}")]
    NotAPair{primitive: Primitive, got: &'static str},

    #[error("Type error: ‘{primitive}’ expects a list, got {got}")]
    NotAList{primitive: Primitive, got: &'static str},

    #[error("Type error: ‘{primitive}’ expects list elements to be pairs, got {got}")]
    NotAPoint{primitive: Primitive, got: &'static str},

    #[error("Type error: ‘{0}’ expects list elements to be pairs of numbers")]
    NonNumericPoint(Primitive),

    #[error("Type error: ‘mod’ cannot modulate {0}")]
    NotModulatable(&'static str),

    #[error("Type error: ‘dem’ needs a modulated argument, got {got}")]
    NotModulated{got: &'static str},

    #[error("Cannot demodulate: {0}")]
    Demodulate(#[from] DemodulateError),

    #[error("Arithmetic overflow in ‘{0}’")]
    Overflow(Primitive),

    #[error("Recursion limit of {0} nested evaluations exceeded")]
    RecursionLimit(usize),

    #[error("Recursion limit of {0} bytes of stack exceeded")]
    StackLimit(usize),

    #[error("Step limit of {0} reductions exceeded")]
    StepLimit(u64),

    #[error("Cyclic definition of ‘{0}’")]
    CyclicDefinition(String),
}
