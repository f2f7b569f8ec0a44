//! Reducing terms to weak head normal form.
//!
//! Application is call-by-name: arguments are passed to primitives
//! unevaluated, and each primitive evaluates only the arguments it inspects.
//! Reductions in tail position, such as the body of a combinator,
//! are returned to a loop instead of recursing,
//! so long combinator chains run in constant stack space.

pub use self::error::*;

use {
    crate::{
        environment::Environment,
        term::{Arguments, Partial, Term},
    },
    std::rc::Rc,
    tracing::{trace, warn},
};

mod draw;
mod error;
mod primitive;

/// Bounds on the resources used by one evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits
{
    /// Maximum number of nested evaluations.
    pub max_depth: usize,

    /// Maximum number of bytes of host stack used by nested evaluations.
    ///
    /// Must leave room below the stack size of the running thread.
    /// The default fits a thread with a 2 MiB stack.
    pub max_stack: usize,

    /// Maximum number of reduction steps, if any.
    pub max_steps: Option<u64>,
}

impl Default for Limits
{
    fn default() -> Self
    {
        Self{max_depth: 1000, max_stack: 1 << 20, max_steps: None}
    }
}

/// Result of a reduction that may be continued in tail position.
pub enum Reduction
{
    /// The term is in weak head normal form.
    Done(Rc<Term>),

    /// The term must still be reduced.
    Continue(Rc<Term>),
}

/// Evaluate a term with the default limits.
///
/// Assignments made by the evaluation are committed if it succeeds
/// and rolled back if it fails.
pub fn evaluate(environment: &mut Environment, term: &Rc<Term>) -> Result<Rc<Term>>
{
    let checkpoint = environment.checkpoint();
    let result = Evaluator::new(environment, Limits::default()).evaluate(term);
    match result {
        Ok(_)  => environment.commit(),
        Err(_) => environment.rollback(checkpoint),
    }
    result
}

/// State of an evaluation in progress.
///
/// Assignments are recorded in the journal of the environment.
/// Callers decide whether to [`commit`] or [`rollback`] them.
///
/// [`commit`]: `Environment::commit`
/// [`rollback`]: `Environment::rollback`
pub struct Evaluator<'e>
{
    environment: &'e mut Environment,
    limits: Limits,
    depth: usize,
    steps: u64,

    /// Stack position of the outermost evaluation.
    stack_base: usize,
}

impl<'e> Evaluator<'e>
{
    /// Create an evaluator that reads and writes the given environment.
    pub fn new(environment: &'e mut Environment, limits: Limits) -> Self
    {
        Self{environment, limits, depth: 0, steps: 0, stack_base: 0}
    }

    /// Number of reduction steps taken so far.
    pub fn steps(&self) -> u64
    {
        self.steps
    }

    /// Reduce a term to weak head normal form.
    ///
    /// Applications whose function is not applicable,
    /// and symbols that are not bound, evaluate to themselves.
    pub fn evaluate(&mut self, term: &Rc<Term>) -> Result<Rc<Term>>
    {
        if self.depth >= self.limits.max_depth {
            warn!(max_depth = self.limits.max_depth, "Recursion limit exceeded");
            return Err(Error::RecursionLimit(self.limits.max_depth));
        }
        if self.depth == 0 {
            self.stack_base = stack_position();
        } else if stack_position().abs_diff(self.stack_base) > self.limits.max_stack {
            warn!(max_stack = self.limits.max_stack, depth = self.depth, "Stack limit exceeded");
            return Err(Error::StackLimit(self.limits.max_stack));
        }
        self.depth += 1;
        let result = self.reduce_to_normal(term.clone());
        self.depth -= 1;
        result
    }

    fn reduce_to_normal(&mut self, mut term: Rc<Term>) -> Result<Rc<Term>>
    {
        // Consecutive symbol lookups; more than there are bindings is a cycle.
        let mut hops = 0;

        loop {
            self.step()?;

            let next = match &*term {

                Term::Symbol(name) => {
                    let Some(bound) = self.environment.get(name) else {
                        return Ok(term);
                    };
                    hops += 1;
                    if hops > self.environment.len() {
                        return Err(Error::CyclicDefinition(name.to_string()));
                    }
                    bound.clone()
                },

                Term::Assignment{name, value} => {
                    trace!(%name, %value, "Define");
                    self.environment.define(name.clone(), value.clone());
                    return Ok(term);
                },

                Term::Application{function, argument} => {
                    hops = 0;
                    let function = self.evaluate(function)?;
                    match self.apply(&function, argument.clone())? {
                        None                          => return Ok(term),
                        Some(Reduction::Done(value))  => return Ok(value),
                        Some(Reduction::Continue(next)) => next,
                    }
                },

                _ => return Ok(term),

            };

            term = next;
        }
    }

    /// Apply an evaluated function to an unevaluated argument.
    ///
    /// Returns [`None`] if the function is not applicable.
    pub fn apply(&mut self, function: &Term, argument: Rc<Term>)
        -> Result<Option<Reduction>>
    {
        let (primitive, mut arguments) = match function {
            Term::Primitive(primitive) =>
                (*primitive, Arguments::new()),
            Term::Partial(Partial{primitive, arguments}) =>
                (*primitive, arguments.clone()),
            _ =>
                return Ok(None),
        };

        let Some(arity) = primitive.arity() else { return Ok(None) };

        arguments.push(argument);
        if arguments.len() < arity {
            let partial = Partial{primitive, arguments};
            return Ok(Some(Reduction::Done(Rc::new(Term::Partial(partial)))));
        }

        self.saturated(primitive, &arguments).map(Some)
    }

    fn step(&mut self) -> Result<()>
    {
        self.steps += 1;
        match self.limits.max_steps {
            Some(max_steps) if self.steps > max_steps => {
                warn!(max_steps, "Step limit exceeded");
                Err(Error::StepLimit(max_steps))
            },
            _ => Ok(()),
        }
    }
}

/// Approximate address of the top of the host stack.
#[inline(never)]
fn stack_position() -> usize
{
    let marker = 0u8;
    std::hint::black_box(&marker) as *const u8 as usize
}

#[cfg(test)]
mod tests
{
    use {super::*, crate::{syntax::parse::parse_input, term::Primitive}, std::thread};

    fn eval_with(limits: Limits, environment: &mut Environment, input: &str)
        -> Result<Rc<Term>>
    {
        let term = parse_input(input).unwrap();
        Evaluator::new(environment, limits).evaluate(&term)
    }

    fn eval_in(environment: &mut Environment, input: &str) -> Result<Rc<Term>>
    {
        let term = parse_input(input).unwrap();
        evaluate(environment, &term)
    }

    fn eval(input: &str) -> Result<Rc<Term>>
    {
        eval_in(&mut Environment::new(), input)
    }

    #[test]
    fn self_evaluating()
    {
        assert_eq!(eval("42"), Ok(Term::number(42)));
        assert_eq!(eval("nil"), Ok(Term::nil()));
        assert_eq!(eval("x"), Ok(Term::symbol("x")));
    }

    #[test]
    fn open_application()
    {
        let term = eval("ap 1 2").unwrap();
        assert_eq!(term.to_string(), "ap 1 2");
        let term = eval("ap x 2").unwrap();
        assert_eq!(term.to_string(), "ap x 2");
        let term = eval("ap nil 0").unwrap();
        assert_eq!(term.to_string(), "ap nil 0");
    }

    #[test]
    fn partial_application()
    {
        let term = eval("ap add 1").unwrap();
        let Term::Partial(partial) = &*term else { panic!("{term:?}") };
        assert_eq!(partial.primitive, Primitive::Add);
        assert_eq!(partial.pending(), 1);

        let term = eval("ap ap s i i").unwrap();
        let Term::Partial(partial) = &*term else { panic!("{term:?}") };
        assert_eq!(partial.arguments.len(), 2);
    }

    #[test]
    fn call_by_name()
    {
        // The discarded argument would fail if it were evaluated.
        assert_eq!(eval("ap ap t 1 ap inc nil"), Ok(Term::number(1)));
        assert_eq!(eval("ap ap f ap inc nil 2"), Ok(Term::number(2)));
    }

    #[test]
    fn late_binding()
    {
        let mut environment = Environment::new();
        eval_in(&mut environment, "y = ap inc x").unwrap();
        eval_in(&mut environment, "x = 41").unwrap();
        assert_eq!(eval_in(&mut environment, "y"), Ok(Term::number(42)));
        eval_in(&mut environment, "x = 1").unwrap();
        assert_eq!(eval_in(&mut environment, "y"), Ok(Term::number(2)));
    }

    #[test]
    fn assignment_returns_itself()
    {
        let mut environment = Environment::new();
        let term = eval_in(&mut environment, "x = ap inc 1").unwrap();
        assert_eq!(term.to_string(), "x = ap inc 1");
        assert_eq!(environment.get("x").map(|t| t.to_string()), Some("ap inc 1".into()));
    }

    #[test]
    fn cyclic_definition()
    {
        let mut environment = Environment::new();
        eval_in(&mut environment, "a = b").unwrap();
        eval_in(&mut environment, "b = a").unwrap();
        assert!(matches!(
            eval_in(&mut environment, "a"),
            Err(Error::CyclicDefinition(_))
        ));
    }

    #[test]
    fn evaluation_is_transactional()
    {
        let mut environment = Environment::new();
        eval_in(&mut environment, "x = 5").unwrap();
        assert_eq!(environment.pending(), 0);

        let result = eval_in(&mut environment, "ap ap add ap ap f 1 x = 7 1");
        assert!(matches!(result, Err(Error::NotANumber{..})));
        assert_eq!(environment.pending(), 0);
        assert_eq!(eval_in(&mut environment, "x"), Ok(Term::number(5)));
    }

    #[test]
    fn recursion_limit()
    {
        let mut environment = Environment::new();
        environment.define("loop".into(), parse_input("ap inc loop").unwrap());
        let limits = Limits{max_depth: 50, ..Limits::default()};
        assert_eq!(
            eval_with(limits, &mut environment, "loop"),
            Err(Error::RecursionLimit(50)),
        );
    }

    #[test]
    fn stack_limit()
    {
        let mut environment = Environment::new();
        environment.define("loop".into(), parse_input("ap inc loop").unwrap());
        let limits = Limits{max_depth: usize::MAX, max_stack: 64 << 10, max_steps: None};
        assert_eq!(
            eval_with(limits, &mut environment, "loop"),
            Err(Error::StackLimit(64 << 10)),
        );
    }

    #[test]
    fn default_limits_fit_small_stack()
    {
        // Unbounded recursion must fail cleanly on a 2 MiB thread.
        let result = thread::Builder::new()
            .stack_size(2 << 20)
            .spawn(|| {
                let mut environment = Environment::new();
                eval_in(&mut environment, "loop = ap inc loop").unwrap();
                eval_in(&mut environment, "ap inc loop").map(|term| term.to_string())
            })
            .unwrap()
            .join()
            .unwrap();
        assert!(matches!(
            result,
            Err(Error::RecursionLimit(1000) | Error::StackLimit(_))
        ));
    }

    #[test]
    fn step_limit()
    {
        // Reductions in tail position do not nest,
        // so this loops until the step limit rather than the depth limit.
        let mut environment = Environment::new();
        let limits = Limits{max_depth: 10, max_steps: Some(10_000), ..Limits::default()};
        let omega = parse_input("ap ap ap s i i ap ap s i i").unwrap();
        let mut evaluator = Evaluator::new(&mut environment, limits);
        assert_eq!(evaluator.evaluate(&omega), Err(Error::StepLimit(10_000)));
        assert_eq!(evaluator.steps(), 10_001);
    }
}
