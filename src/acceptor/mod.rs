//! Character acceptors and their combinators.
//!
//! An acceptor is fed one character at a time and answers whether that
//! character extends the pattern it recognizes. Most combinators are small
//! state machines, so the answer can depend on everything fed so far.
//!
//! # Building blocks
//!
//! | Constructor               | Behaviour                                           |
//! |---------------------------|-----------------------------------------------------|
//! | [`all`]                   | Accepts every character                             |
//! | [`none`]                  | Rejects every character                             |
//! | [`acc`]                   | Character, set, class table(s) or class name        |
//! | [`chain`]                 | Each stage runs until it rejects, then the next     |
//! | [`truncate`]              | At most `n` acceptances                             |
//! | [`skip`]                  | First `n` characters unconditionally, then delegate |
//! | [`first_of`]              | Commits to the first candidate accepting char one   |
//! | [`branch`]                | Commits by looking up the first character           |
//! | [`ends_before`]           | Rejects at the delimiter                            |
//! | [`ends_with`]             | Accepts the delimiter, then rejects everything      |
//! | [`assert_start`]          | First character must be accepted, else violation    |
//! | [`assert_at_most`]        | More than `n` acceptances is a violation            |
//!
//! # Concurrency
//!
//! [`Acceptor::accept`] takes `&mut self`: an instance follows exactly one
//! stream. Build one instance per concurrent stream. Stateless leaves can be
//! shared and evaluated with [`Acceptor::test`].

pub mod assert;
pub mod base;
pub mod char_class;
pub mod combinator;
pub mod drive;
pub mod spec;

pub use assert::{Payload, Violation, ViolationKind, assert_at_most, assert_start};
pub use base::{Acceptor, all, none};
pub use char_class::{CharRange, ClassTable, class_names, lookup_class};
pub use combinator::{branch, chain, ends_before, ends_with, first_of, skip, truncate};
pub use drive::{Rejection, Scan, scan};
pub use spec::{Spec, SpecError, acc};
