//! Assertions: acceptors whose mismatch is a hard failure.
//!
//! A violated assertion returns `Err(Violation)` from
//! [`Acceptor::accept`]. Every combinator forwards it with `?`, so an
//! assertion nested anywhere aborts the whole match instead of counting as
//! an ordinary rejection.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use log::debug;

use super::base::Acceptor;

/// Caller-supplied diagnostic carried by an assertion.
pub type Payload = Arc<dyn Error + Send + Sync + 'static>;

/// Which assertion fired, and on what character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The first character was rejected by an [`assert_start`] acceptor.
    Start { found: char },
    /// An [`assert_at_most`] acceptor accepted its `most + 1`-th character.
    AtMost { most: usize, found: char },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { found } => write!(f, "Required start not found at {found:?}"),
            Self::AtMost { most, found } => {
                write!(f, "More than {most} repetitions at {found:?}")
            }
        }
    }
}

/// A violated assertion.
///
/// The payload is the exact error handed to the assertion constructor and is
/// also reported as the error's `source()`.
#[derive(Debug, Clone)]
pub struct Violation {
    kind: ViolationKind,
    payload: Payload,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn payload(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.payload.as_ref()
    }

    /// The shared payload, for callers that want to keep it past the violation.
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Error for Violation {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.payload.as_ref())
    }
}

/// Require the first character to be accepted by `acc`.
///
/// A rejected first character is reported as a [`Violation`] carrying `err`.
/// After a successful first character this behaves exactly like `acc`.
pub fn assert_start<E>(acc: impl Into<Acceptor>, err: E) -> Acceptor
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    Acceptor::AssertStart(AssertStart {
        started: false,
        inner: Box::new(acc.into()),
        payload: boxed_payload(err),
    })
}

/// Allow `acc` to accept at most `most` characters.
///
/// Rejections pass through unchanged. The `most + 1`-th acceptance is
/// reported as a [`Violation`] carrying `err`.
pub fn assert_at_most<E>(acc: impl Into<Acceptor>, most: usize, err: E) -> Acceptor
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    Acceptor::AssertAtMost(AssertAtMost {
        most,
        count: 0,
        inner: Box::new(acc.into()),
        payload: boxed_payload(err),
    })
}

fn boxed_payload<E>(err: E) -> Payload
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let boxed: Box<dyn Error + Send + Sync> = err.into();
    Arc::from(boxed)
}

/// State for [`assert_start`].
#[derive(Debug, Clone)]
pub struct AssertStart {
    started: bool,
    inner: Box<Acceptor>,
    payload: Payload,
}

impl AssertStart {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        if self.started {
            return self.inner.accept(ch);
        }
        if !self.inner.accept(ch)? {
            debug!("assert_start: {ch:?} rejected at start: {}", self.payload);
            return Err(Violation {
                kind: ViolationKind::Start { found: ch },
                payload: Arc::clone(&self.payload),
            });
        }
        self.started = true;
        Ok(true)
    }
}

/// State for [`assert_at_most`].
#[derive(Debug, Clone)]
pub struct AssertAtMost {
    most: usize,
    count: usize,
    inner: Box<Acceptor>,
    payload: Payload,
}

impl AssertAtMost {
    pub(super) fn step(&mut self, ch: char) -> Result<bool, Violation> {
        if !self.inner.accept(ch)? {
            return Ok(false);
        }
        if self.count == self.most {
            debug!(
                "assert_at_most: {ch:?} exceeds {} acceptances: {}",
                self.most, self.payload
            );
            return Err(Violation {
                kind: ViolationKind::AtMost {
                    most: self.most,
                    found: ch,
                },
                payload: Arc::clone(&self.payload),
            });
        }
        self.count += 1;
        Ok(true)
    }
}
