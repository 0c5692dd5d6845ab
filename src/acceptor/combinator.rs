//! Combinators that build stateful acceptors out of other acceptors.
//!
//! None of these backtrack. Once a combinator commits to a delegate or moves
//! past a stage, that decision holds for the rest of the stream.

use std::collections::HashMap;

use log::trace;

use super::assert::Violation;
use super::base::{Acceptor, all};

// ─── Constructors ───────────────────────────────────────────────────────────

/// Sequence acceptors.
///
/// The current stage keeps accepting for as long as it can. The first
/// character it rejects is offered to the following stages in turn; the
/// first one to accept becomes current. When every stage has rejected, the
/// chain rejects forever.
pub fn chain<I>(stages: I) -> Acceptor
where
    I: IntoIterator<Item = Acceptor>,
{
    Acceptor::Chain(Chain {
        stages: stages.into_iter().collect(),
        cursor: 0,
    })
}

/// Accept at most `max` characters that `acc` accepts.
pub fn truncate(max: usize, acc: impl Into<Acceptor>) -> Acceptor {
    Acceptor::Truncate(Truncate {
        max,
        count: 0,
        inner: Box::new(acc.into()),
    })
}

/// Accept the first `n` characters unconditionally, then hand over to `acc`.
pub fn skip(n: usize, acc: impl Into<Acceptor>) -> Acceptor {
    chain([truncate(n, all()), acc.into()])
}

/// Commit to the first candidate that accepts the first character.
///
/// If no candidate accepts it, the acceptor rejects forever.
pub fn first_of<I>(candidates: I) -> Acceptor
where
    I: IntoIterator<Item = Acceptor>,
{
    Acceptor::FirstOf(FirstOf::Pending(candidates.into_iter().collect()))
}

/// Dispatch on the first character.
///
/// A character found in `mapping` is accepted and its acceptor handles every
/// following character. Any other character is handed to `alt`, which then
/// handles the rest of the stream.
pub fn branch<I>(mapping: I, alt: impl Into<Acceptor>) -> Acceptor
where
    I: IntoIterator<Item = (char, Acceptor)>,
{
    Acceptor::Branch(Branch::Pending {
        mapping: mapping.into_iter().collect(),
        alt: Box::new(alt.into()),
    })
}

/// Behave like `acc`, but reject `delim` without consulting `acc`.
pub fn ends_before(delim: char, acc: impl Into<Acceptor>) -> Acceptor {
    Acceptor::EndsBefore(EndsBefore {
        delim,
        inner: Box::new(acc.into()),
    })
}

/// Behave like `acc` up to and including `delim`, then reject everything.
pub fn ends_with(delim: char, acc: impl Into<Acceptor>) -> Acceptor {
    Acceptor::EndsWith(EndsWith {
        delim,
        seen: false,
        inner: Box::new(acc.into()),
    })
}

// ─── State ──────────────────────────────────────────────────────────────────

/// State for [`chain`].
#[derive(Debug, Clone)]
pub struct Chain {
    stages: Vec<Acceptor>,
    cursor: usize,
}

impl Chain {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        while let Some(stage) = self.stages.get_mut(self.cursor) {
            if stage.accept(ch)? {
                return Ok(true);
            }
            self.cursor += 1;
            trace!("chain: {ch:?} moved cursor to stage {}", self.cursor);
        }
        Ok(false)
    }
}

/// State for [`truncate`].
#[derive(Debug, Clone)]
pub struct Truncate {
    max: usize,
    count: usize,
    inner: Box<Acceptor>,
}

impl Truncate {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        if self.count < self.max && self.inner.accept(ch)? {
            self.count += 1;
            return Ok(true);
        }
        Ok(false)
    }
}

/// State for [`first_of`].
#[derive(Debug, Clone)]
pub enum FirstOf {
    Pending(Vec<Acceptor>),
    Committed(Box<Acceptor>),
    Dead,
}

impl FirstOf {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        match self {
            Self::Pending(candidates) => {
                let mut winner = None;
                for (idx, candidate) in candidates.iter_mut().enumerate() {
                    if candidate.accept(ch)? {
                        winner = Some(idx);
                        break;
                    }
                }
                match winner {
                    Some(idx) => {
                        trace!("first_of: {ch:?} committed to candidate {idx}");
                        let chosen = candidates.swap_remove(idx);
                        *self = Self::Committed(Box::new(chosen));
                        Ok(true)
                    }
                    None => {
                        trace!("first_of: no candidate accepted {ch:?}");
                        *self = Self::Dead;
                        Ok(false)
                    }
                }
            }
            Self::Committed(acc) => acc.accept(ch),
            Self::Dead => Ok(false),
        }
    }
}

/// State for [`branch`].
#[derive(Debug, Clone)]
pub enum Branch {
    Pending {
        mapping: HashMap<char, Acceptor>,
        alt: Box<Acceptor>,
    },
    Committed(Box<Acceptor>),
}

impl Branch {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        match self {
            Self::Pending { mapping, alt } => {
                if let Some(next) = mapping.remove(&ch) {
                    trace!("branch: {ch:?} selected mapped acceptor");
                    *self = Self::Committed(Box::new(next));
                    return Ok(true);
                }
                trace!("branch: {ch:?} fell through to alternative");
                let out = alt.accept(ch);
                let alt = std::mem::replace(alt, Box::new(Acceptor::None));
                *self = Self::Committed(alt);
                out
            }
            Self::Committed(acc) => acc.accept(ch),
        }
    }
}

/// State for [`ends_before`].
#[derive(Debug, Clone)]
pub struct EndsBefore {
    delim: char,
    inner: Box<Acceptor>,
}

impl EndsBefore {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        if ch == self.delim {
            return Ok(false);
        }
        self.inner.accept(ch)
    }
}

/// State for [`ends_with`].
#[derive(Debug, Clone)]
pub struct EndsWith {
    delim: char,
    seen: bool,
    inner: Box<Acceptor>,
}

impl EndsWith {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        if self.seen {
            return Ok(false);
        }
        if ch == self.delim {
            trace!("ends_with: delimiter {ch:?} seen");
            self.seen = true;
            return Ok(true);
        }
        self.inner.accept(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptor::base::none;
    use crate::acceptor::char_class::{DIGIT, LETTER};

    fn feed(acc: &mut Acceptor, input: &str) -> Vec<bool> {
        input.chars().map(|ch| acc.accept(ch).unwrap()).collect()
    }

    fn exactly_one(ch: char) -> Acceptor {
        truncate(1, ch)
    }

    // --- chain ---

    #[test]
    fn chain_xy() {
        let mut acc = chain([exactly_one('x'), 'y'.into()]);
        assert_eq!(feed(&mut acc, "xy"), vec![true, true]);
    }

    #[test]
    fn chain_first_stage_may_match_nothing() {
        let mut acc = chain([exactly_one('x'), 'y'.into()]);
        assert_eq!(feed(&mut acc, "yy"), vec![true, true]);
    }

    #[test]
    fn chain_xx_rejects_second() {
        let mut acc = chain([exactly_one('x'), 'y'.into()]);
        assert_eq!(feed(&mut acc, "xx"), vec![true, false]);
    }

    #[test]
    fn chain_stays_exhausted() {
        let mut acc = chain([exactly_one('x'), 'y'.into()]);
        assert_eq!(feed(&mut acc, "zxy"), vec![false, false, false]);
    }

    #[test]
    fn chain_keeps_current_stage_active() {
        // identifier: one letter, then letters or digits
        let mut acc = chain([truncate(1, LETTER), Acceptor::from(vec![LETTER, DIGIT])]);
        assert_eq!(feed(&mut acc, "a1b2-"), vec![true, true, true, true, false]);
    }

    #[test]
    fn empty_chain_rejects() {
        let mut acc = chain(Vec::<Acceptor>::new());
        assert_eq!(feed(&mut acc, "a"), vec![false]);
    }

    // --- truncate / skip ---

    #[test]
    fn truncate_caps_acceptances() {
        let mut acc = truncate(3, all());
        assert_eq!(feed(&mut acc, "abcde"), vec![true, true, true, false, false]);
    }

    #[test]
    fn truncate_does_not_count_rejections() {
        let mut acc = truncate(2, 'a');
        assert_eq!(feed(&mut acc, "abaa"), vec![true, false, true, false]);
    }

    #[test]
    fn truncate_zero_rejects_everything() {
        let mut acc = truncate(0, all());
        assert_eq!(feed(&mut acc, "ab"), vec![false, false]);
    }

    #[test]
    fn skip_ignores_content_then_delegates() {
        let mut acc = skip(2, DIGIT);
        assert_eq!(feed(&mut acc, "#!12x"), vec![true, true, true, true, false]);
    }

    #[test]
    fn skip_zero_is_plain_delegate() {
        let mut acc = skip(0, 'a');
        assert_eq!(feed(&mut acc, "ab"), vec![true, false]);
    }

    // --- first_of ---

    #[test]
    fn first_of_commits_on_first_char() {
        let mut acc = first_of([Acceptor::from('a'), 'b'.into()]);
        assert_eq!(feed(&mut acc, "ab"), vec![true, false]);
    }

    #[test]
    fn first_of_second_candidate_wins() {
        let mut acc = first_of([Acceptor::from('a'), 'b'.into()]);
        assert_eq!(feed(&mut acc, "bb"), vec![true, true]);
    }

    #[test]
    fn first_of_prefers_listed_order() {
        let mut acc = first_of([exactly_one('a'), Acceptor::from("ab")]);
        assert_eq!(feed(&mut acc, "ab"), vec![true, false]);
    }

    #[test]
    fn first_of_no_match_is_permanent() {
        let mut acc = first_of([Acceptor::from('a'), 'b'.into()]);
        assert_eq!(feed(&mut acc, "cab"), vec![false, false, false]);
    }

    #[test]
    fn first_of_empty_is_dead() {
        let mut acc = first_of(Vec::<Acceptor>::new());
        assert_eq!(feed(&mut acc, "a"), vec![false]);
    }

    // --- branch ---

    #[test]
    fn branch_mapped_char_commits_even_if_delegate_rejects() {
        let mut acc = branch([('a', none())], all());
        assert_eq!(feed(&mut acc, "aaa"), vec![true, false, false]);
    }

    #[test]
    fn branch_mapped_delegate_sees_following_chars() {
        let mut acc = branch([('0', Acceptor::from("xX"))], DIGIT);
        assert_eq!(feed(&mut acc, "0x1"), vec![true, true, false]);
    }

    #[test]
    fn branch_fallback_is_permanent() {
        let mut acc = branch([('a', all())], DIGIT);
        assert_eq!(feed(&mut acc, "1a2"), vec![true, false, true]);
    }

    #[test]
    fn branch_fallback_may_reject_first() {
        let mut acc = branch([('a', all())], DIGIT);
        assert_eq!(feed(&mut acc, "ba"), vec![false, false]);
    }

    // --- delimiters ---

    #[test]
    fn ends_before_rejects_delim() {
        let mut acc = ends_before('"', all());
        assert_eq!(feed(&mut acc, "ab\"c"), vec![true, true, false, true]);
    }

    #[test]
    fn ends_before_delegates_otherwise() {
        let mut acc = ends_before(';', DIGIT);
        assert_eq!(feed(&mut acc, "1a;"), vec![true, false, false]);
    }

    #[test]
    fn ends_with_accepts_delim_once() {
        let mut acc = ends_with('"', all());
        assert_eq!(feed(&mut acc, "ab\"c\""), vec![true, true, true, false, false]);
    }

    #[test]
    fn ends_with_accepts_delim_even_if_inner_would_not() {
        let mut acc = ends_with(';', DIGIT);
        assert_eq!(feed(&mut acc, "12;3"), vec![true, true, true, false]);
    }

    #[test]
    fn clone_before_use_is_independent() {
        let template = truncate(1, 'a');
        let mut first = template.clone();
        let mut second = template;
        assert_eq!(feed(&mut first, "aa"), vec![true, false]);
        assert_eq!(feed(&mut second, "a"), vec![true]);
    }
}
