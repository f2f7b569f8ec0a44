//! Bindings from symbols to terms.

use {crate::term::Term, std::{collections::HashMap, rc::Rc}};

/// Mutable mapping from symbol names to unevaluated terms.
///
/// Terms are stored as written and only evaluated when the symbol is used,
/// so definitions may refer to themselves and to symbols defined later.
///
/// Every change is recorded in a journal until [`commit`] is called,
/// so that a failed computation can be undone with [`rollback`].
///
/// [`commit`]: `Self::commit`
/// [`rollback`]: `Self::rollback`
#[derive(Clone, Debug, Default)]
pub struct Environment
{
    bindings: HashMap<Rc<str>, Rc<Term>>,

    /// Previous binding of each name that was changed since the last commit.
    journal: Vec<(Rc<str>, Option<Rc<Term>>)>,
}

/// Position in the journal of an environment.
///
/// See [`Environment::checkpoint`].
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint(usize);

impl Environment
{
    /// Create an environment with no bindings.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// The term bound to a name.
    pub fn get(&self, name: &str) -> Option<&Rc<Term>>
    {
        self.bindings.get(name)
    }

    /// Bind a name, replacing any previous binding.
    pub fn define(&mut self, name: Rc<str>, term: Rc<Term>)
    {
        let previous = self.bindings.insert(name.clone(), term);
        self.journal.push((name, previous));
    }

    /// Number of bound names.
    pub fn len(&self) -> usize
    {
        self.bindings.len()
    }

    /// Whether no names are bound.
    pub fn is_empty(&self) -> bool
    {
        self.bindings.is_empty()
    }

    /// Number of changes made since the last commit.
    pub fn pending(&self) -> usize
    {
        self.journal.len()
    }

    /// Remember the current state for a later [`rollback`].
    ///
    /// [`rollback`]: `Self::rollback`
    pub fn checkpoint(&self) -> Checkpoint
    {
        Checkpoint(self.journal.len())
    }

    /// Undo every change made since the checkpoint was taken.
    ///
    /// Checkpoints taken before the last [`commit`] have no effect.
    ///
    /// [`commit`]: `Self::commit`
    pub fn rollback(&mut self, checkpoint: Checkpoint)
    {
        while self.journal.len() > checkpoint.0 {
            let Some((name, previous)) = self.journal.pop() else { break };
            match previous {
                Some(term) => self.bindings.insert(name, term),
                None       => self.bindings.remove(&name),
            };
        }
    }

    /// Make every change permanent and forget the journal.
    pub fn commit(&mut self)
    {
        self.journal.clear();
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn define()
    {
        let mut environment = Environment::new();
        assert!(environment.is_empty());
        environment.define("foo".into(), Term::number(42));
        assert_eq!(environment.get("foo"), Some(&Term::number(42)));
        assert_eq!(environment.get("bar"), None);
        environment.define("foo".into(), Term::nil());
        assert_eq!(environment.get("foo"), Some(&Term::nil()));
        assert_eq!(environment.len(), 1);
    }

    #[test]
    fn rollback()
    {
        let mut environment = Environment::new();
        environment.define("x".into(), Term::number(1));
        environment.commit();

        let checkpoint = environment.checkpoint();
        environment.define("x".into(), Term::number(2));
        environment.define("y".into(), Term::number(3));
        environment.define("x".into(), Term::number(4));
        environment.rollback(checkpoint);

        assert_eq!(environment.get("x"), Some(&Term::number(1)));
        assert_eq!(environment.get("y"), None);
    }

    #[test]
    fn commit()
    {
        let mut environment = Environment::new();
        let checkpoint = environment.checkpoint();
        environment.define("x".into(), Term::number(1));
        assert_eq!(environment.pending(), 1);
        environment.commit();
        assert_eq!(environment.pending(), 0);
        environment.rollback(checkpoint);
        assert_eq!(environment.get("x"), Some(&Term::number(1)));
    }
}
