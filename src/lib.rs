//! Composable single-character acceptors for building lexers.
//!
//! # Example
//!
//! ```rust
//! use acclex::{Acceptor, chain, char_class, scan, truncate};
//!
//! // An identifier: one letter, then letters or digits.
//! let mut ident = chain([
//!     truncate(1, char_class::LETTER),
//!     Acceptor::from(vec![char_class::LETTER, char_class::DIGIT]),
//! ]);
//!
//! let scan = scan(&mut ident, "x42 = 1").unwrap();
//! assert_eq!(scan.accepted_prefix(), "x42");
//! assert_eq!(scan.remaining(), "= 1");
//! ```

pub mod acceptor;

pub use acceptor::char_class;
pub use acceptor::{
    Acceptor, CharRange, ClassTable, Payload, Rejection, Scan, Spec, SpecError, Violation,
    ViolationKind, acc, all, assert_at_most, assert_start, branch, chain, class_names,
    ends_before, ends_with, first_of, lookup_class, none, scan, skip, truncate,
};
