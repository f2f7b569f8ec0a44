//! Options of the command-line interpreter.
//!
//! Every option is read from an environment variable:
//!
//! | Variable           | Meaning                                  | Default  |
//! |--------------------|------------------------------------------|----------|
//! | `GALAXY_MAX_DEPTH` | maximum number of nested evaluations     | 100000   |
//! | `GALAXY_MAX_STEPS` | maximum number of steps per input line   | no limit |
//! | `GALAXY_STACK_MB`  | stack size of the interpreter thread     | 1024     |
//! | `GALAXY_PRELUDE`   | whether to load the standard definitions | `1`      |
//! | `GALAXY_OUTPUT`    | `text` or `json`                         | `text`   |
//!
//! Evaluation may use three quarters of the interpreter thread's stack.

use {crate::eval::Limits, std::{env, str::FromStr}, thiserror::Error};

/// Result of reading the configuration.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Returned when an environment variable has an unusable value.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    #[error("invalid {name}: {value}")]
    Invalid{name: &'static str, value: String},

    #[error("invalid {name}: {value} MiB does not fit in memory")]
    StackTooLarge{name: &'static str, value: usize},
}

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat
{
    /// Printed terms, one point list per layer for images.
    #[default]
    Text,

    /// One JSON object per input line.
    Json,
}

/// Options of the command-line interpreter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config
{
    /// Limits applied to each input line.
    pub limits: Limits,

    /// Stack size of the interpreter thread, in bytes.
    pub stack_size: usize,

    /// Whether to load the standard definitions before reading input.
    pub prelude: bool,

    /// How results are written.
    pub output: OutputFormat,
}

impl Default for Config
{
    fn default() -> Self
    {
        let stack_size = 1024 << 20;
        Self{
            limits: Limits{
                max_depth: 100_000,
                max_stack: stack_budget(stack_size),
                max_steps: None,
            },
            stack_size,
            prelude: true,
            output: OutputFormat::Text,
        }
    }
}

impl Config
{
    /// Read the configuration from the environment of the process.
    pub fn from_env() -> Result<Self>
    {
        Self::from_lookup(|name| {
            env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Read the configuration from a function that looks up variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self>
    {
        let mut config = Self::default();

        if let Some(max_depth) = parse_var(&lookup, "GALAXY_MAX_DEPTH")? {
            config.limits.max_depth = max_depth;
        }

        config.limits.max_steps = parse_var(&lookup, "GALAXY_MAX_STEPS")?;

        if let Some(mb) = parse_var::<usize>(&lookup, "GALAXY_STACK_MB")? {
            config.stack_size = mb.checked_mul(1 << 20)
                .ok_or(Error::StackTooLarge{name: "GALAXY_STACK_MB", value: mb})?;
            config.limits.max_stack = stack_budget(config.stack_size);
        }

        if let Some(value) = lookup("GALAXY_PRELUDE") {
            config.prelude = match value.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(Error::Invalid{name: "GALAXY_PRELUDE", value}),
            };
        }

        if let Some(value) = lookup("GALAXY_OUTPUT") {
            config.output = match value.trim() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(Error::Invalid{name: "GALAXY_OUTPUT", value}),
            };
        }

        Ok(config)
    }
}

fn stack_budget(stack_size: usize) -> usize
{
    stack_size - stack_size / 4
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, name: &'static str)
    -> Result<Option<T>>
    where T: FromStr
{
    match lookup(name) {
        None => Ok(None),
        Some(value) =>
            value.trim().parse()
                .map(Some)
                .map_err(|_| Error::Invalid{name, value}),
    }
}
