//! Building acceptors from loosely typed descriptions.

use std::fmt;

use itertools::Itertools;

use super::base::Acceptor;
use super::char_class::{ClassTable, lookup_class};

/// Anything an [`Acceptor`] can be built from.
#[derive(Debug, Clone)]
pub enum Spec {
    /// An already built acceptor, used as is.
    Acceptor(Acceptor),
    /// Exactly this character.
    Char(char),
    /// Any of these characters.
    Chars(Vec<char>),
    /// Members of one class table.
    Class(ClassTable),
    /// Members of any of these class tables.
    Classes(Vec<ClassTable>),
    /// A built-in class table, by name.
    Named(String),
}

/// Errors that can occur while building an acceptor from a [`Spec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    UnknownClass(String),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass(name) => write!(f, "Unknown character class: {name:?}"),
        }
    }
}

impl std::error::Error for SpecError {}

/// Build an acceptor from `spec`.
pub fn acc(spec: impl Into<Spec>) -> Result<Acceptor, SpecError> {
    Acceptor::try_from(spec.into())
}

impl TryFrom<Spec> for Acceptor {
    type Error = SpecError;

    fn try_from(spec: Spec) -> Result<Self, Self::Error> {
        Ok(match spec {
            Spec::Acceptor(acc) => acc,
            Spec::Char(ch) => Acceptor::Char(ch),
            Spec::Chars(set) => Acceptor::Set(set),
            Spec::Class(table) => Acceptor::Class(vec![table]),
            Spec::Classes(tables) => Acceptor::Class(tables),
            Spec::Named(name) => match lookup_class(&name) {
                Some(table) => Acceptor::Class(vec![table]),
                None => return Err(SpecError::UnknownClass(name)),
            },
        })
    }
}

impl From<Acceptor> for Spec {
    fn from(acc: Acceptor) -> Self {
        Self::Acceptor(acc)
    }
}

impl From<char> for Spec {
    fn from(ch: char) -> Self {
        Self::Char(ch)
    }
}

impl From<&str> for Spec {
    fn from(set: &str) -> Self {
        Self::Chars(set.chars().unique().collect())
    }
}

impl From<Vec<char>> for Spec {
    fn from(set: Vec<char>) -> Self {
        Self::Chars(set)
    }
}

impl From<&[char]> for Spec {
    fn from(set: &[char]) -> Self {
        Self::Chars(set.to_vec())
    }
}

impl From<ClassTable> for Spec {
    fn from(table: ClassTable) -> Self {
        Self::Class(table)
    }
}

impl From<Vec<ClassTable>> for Spec {
    fn from(tables: Vec<ClassTable>) -> Self {
        Self::Classes(tables)
    }
}
