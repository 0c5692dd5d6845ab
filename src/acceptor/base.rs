//! The [`Acceptor`] type and its stateless leaves.

use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use super::assert::{AssertAtMost, AssertStart, Violation};
use super::char_class::{ClassTable, in_any};
use super::combinator::{Branch, Chain, EndsBefore, EndsWith, FirstOf, Truncate};

/// A single-character recognizer.
///
/// Each call to [`accept`](Acceptor::accept) feeds the next character of one
/// input stream. Combinator variants carry private state that advances on
/// every call, so an instance must see exactly one stream, in order. Leaves
/// (`All`, `None`, `Char`, `Set`, `Class`, `Predicate`) keep no state and
/// may be evaluated through a shared reference with [`test`](Acceptor::test).
///
/// Cloning copies the current state: a clone taken before the first call is
/// a fresh, independent instance.
#[derive(Debug, Clone)]
pub enum Acceptor {
    /// Accepts every character.
    All,
    /// Rejects every character.
    None,
    /// Accepts exactly this character.
    Char(char),
    /// Accepts any character in the set.
    Set(Vec<char>),
    /// Accepts any character belonging to one of the tables.
    Class(Vec<ClassTable>),
    /// Caller-supplied stateless predicate.
    Predicate(Predicate),
    Chain(Chain),
    Truncate(Truncate),
    FirstOf(FirstOf),
    Branch(Branch),
    EndsBefore(EndsBefore),
    EndsWith(EndsWith),
    AssertStart(AssertStart),
    AssertAtMost(AssertAtMost),
}

impl Acceptor {
    /// Wrap a stateless predicate.
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Predicate(Arc::new(test)))
    }

    /// Feed the next character.
    ///
    /// Returns `Ok(true)` if `ch` extends the pattern, `Ok(false)` if it does
    /// not, and `Err` if an assertion inside this acceptor was violated.
    pub fn accept(&mut self, ch: char) -> Result<bool, Violation> {
        match self {
            Self::Chain(c) => c.step(ch),
            Self::Truncate(t) => t.step(ch),
            Self::FirstOf(f) => f.step(ch),
            Self::Branch(b) => b.step(ch),
            Self::EndsBefore(e) => e.step(ch),
            Self::EndsWith(e) => e.step(ch),
            Self::AssertStart(a) => a.step(ch),
            Self::AssertAtMost(a) => a.step(ch),
            leaf => Ok(leaf.test(ch).unwrap_or(false)),
        }
    }

    /// Evaluate a stateless leaf without advancing anything.
    ///
    /// Returns `None` for stateful acceptors.
    pub fn test(&self, ch: char) -> Option<bool> {
        match self {
            Self::All => Some(true),
            Self::None => Some(false),
            Self::Char(c) => Some(*c == ch),
            Self::Set(set) => Some(set.contains(&ch)),
            Self::Class(tables) => Some(in_any(tables, ch)),
            Self::Predicate(p) => Some((p.0)(ch)),
            _ => None,
        }
    }

    pub fn is_stateless(&self) -> bool {
        matches!(
            self,
            Self::All
                | Self::None
                | Self::Char(_)
                | Self::Set(_)
                | Self::Class(_)
                | Self::Predicate(_)
        )
    }
}

/// Acceptor that accepts every character.
pub fn all() -> Acceptor {
    Acceptor::All
}

/// Acceptor that rejects every character.
pub fn none() -> Acceptor {
    Acceptor::None
}

/// A shareable `Fn(char) -> bool`.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>);

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl From<char> for Acceptor {
    fn from(ch: char) -> Self {
        Self::Char(ch)
    }
}

impl From<&str> for Acceptor {
    fn from(set: &str) -> Self {
        Self::Set(set.chars().unique().collect())
    }
}

impl From<Vec<char>> for Acceptor {
    fn from(set: Vec<char>) -> Self {
        Self::Set(set)
    }
}

impl From<&[char]> for Acceptor {
    fn from(set: &[char]) -> Self {
        Self::Set(set.to_vec())
    }
}

impl From<ClassTable> for Acceptor {
    fn from(table: ClassTable) -> Self {
        Self::Class(vec![table])
    }
}

impl From<Vec<ClassTable>> for Acceptor {
    fn from(tables: Vec<ClassTable>) -> Self {
        Self::Class(tables)
    }
}
