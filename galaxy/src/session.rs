use {
    crate::{
        Result,
        environment::Environment,
        eval::{Evaluator, Limits},
        prelude::PRELUDE,
        render::{self, Canvas, render},
        syntax::parse::parse_input,
        term::Term,
    },
    serde::Serialize,
    std::{fmt, slice},
    tracing::debug,
};

/// What the user gets to see after a successful input line.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Output
{
    /// The printed form of the resulting term.
    Text(String),

    /// The resulting term was an image or a multiple image.
    Image(Canvas),
}

impl Output
{
    /// Present an evaluated term.
    ///
    /// Fails if an image is too large to render.
    pub fn from_term(term: &Term) -> render::Result<Self>
    {
        Ok(match term {
            Term::Image(points)      => Self::Image(render(slice::from_ref(points))?),
            Term::MultiImage(images) => Self::Image(render(images)?),
            _                        => Self::Text(term.to_string()),
        })
    }
}

impl fmt::Display for Output
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        match self {
            Self::Text(text)     => write!(f, "{text}"),
            Self::Image(canvas) => write!(f, "{canvas}"),
        }
    }
}

/// Sequence of input lines sharing an environment.
///
/// Each line is handled to completion before the next.
/// A line that fails leaves the environment as it was before that line.
#[derive(Debug, Default)]
pub struct Session
{
    environment: Environment,
    limits: Limits,
}

impl Session
{
    /// Create a session with an empty environment.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Create a session with an empty environment and the given limits.
    pub fn with_limits(limits: Limits) -> Self
    {
        Self{environment: Environment::new(), limits}
    }

    /// Create a session with the standard definitions loaded.
    pub fn with_prelude() -> Result<Self>
    {
        let mut session = Self::new();
        session.load_prelude()?;
        Ok(session)
    }

    /// The bindings made so far.
    pub fn environment(&self) -> &Environment
    {
        &self.environment
    }

    /// The limits applied to each input line.
    pub fn limits(&self) -> Limits
    {
        self.limits
    }

    /// Load the standard definitions, replacing existing bindings.
    pub fn load_prelude(&mut self) -> Result<()>
    {
        for definition in PRELUDE {
            self.handle_input(definition)?;
        }
        Ok(())
    }

    /// Parse and evaluate one input line.
    pub fn handle_input(&mut self, input: &str) -> Result<Output>
    {
        let checkpoint = self.environment.checkpoint();
        match self.run(input) {
            Ok(output) => {
                self.environment.commit();
                debug!(input, %output, "Handled input");
                Ok(output)
            },
            Err(err) => {
                self.environment.rollback(checkpoint);
                debug!(input, %err, "Input failed");
                Err(err)
            },
        }
    }

    /// Handle every non-blank line of a submission in order.
    ///
    /// A failing line does not undo the lines before it,
    /// nor does it prevent the lines after it from being handled.
    pub fn handle_batch<'a>(&mut self, input: &'a str)
        -> Vec<(&'a str, Result<Output>)>
    {
        input.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| (line, self.handle_input(line)))
            .collect()
    }

    fn run(&mut self, input: &str) -> Result<Output>
    {
        let term = parse_input(input)?;
        let value = Evaluator::new(&mut self.environment, self.limits).evaluate(&term)?;
        Ok(Output::from_term(&value)?)
    }
}
