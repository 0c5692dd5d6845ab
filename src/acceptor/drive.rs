//! Driving an acceptor over a string.
//!
//! Offsets are reported both as character indices and as byte offsets into
//! the input.

use super::assert::Violation;
use super::base::Acceptor;

/// The first character an acceptor rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Character index of the rejected character.
    pub index: usize,
    /// Byte offset of the rejected character.
    pub offset: usize,
    pub ch: char,
}

/// Outcome of [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    input: &'a str,
    /// Number of characters accepted before the first rejection.
    pub accepted: usize,
    /// `None` when every character of the input was accepted.
    pub rejected: Option<Rejection>,
}

impl<'a> Scan<'a> {
    /// The accepted prefix.
    pub fn accepted_prefix(&self) -> &'a str {
        match self.rejected {
            Some(r) => &self.input[..r.offset],
            None => self.input,
        }
    }

    /// Everything fed to the acceptor, including the rejected character.
    pub fn consumed(&self) -> &'a str {
        match self.rejected {
            Some(r) => &self.input[..r.offset + r.ch.len_utf8()],
            None => self.input,
        }
    }

    /// Input left after [`consumed`](Self::consumed).
    pub fn remaining(&self) -> &'a str {
        &self.input[self.consumed().len()..]
    }

    pub fn is_complete(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Feed `input` to `acceptor` one character at a time, stopping at the first
/// rejection.
///
/// A violated assertion stops the scan and is returned as the error.
pub fn scan<'a>(acceptor: &mut Acceptor, input: &'a str) -> Result<Scan<'a>, Violation> {
    for (index, (offset, ch)) in input.char_indices().enumerate() {
        if !acceptor.accept(ch)? {
            return Ok(Scan {
                input,
                accepted: index,
                rejected: Some(Rejection { index, offset, ch }),
            });
        }
    }
    Ok(Scan {
        input,
        accepted: input.chars().count(),
        rejected: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptor::base::all;
    use crate::acceptor::combinator::{ends_before, ends_with};

    #[test]
    fn demo_split() {
        let mut acc = ends_before('m', all());
        let scan = scan(&mut acc, "This is a demo.").unwrap();
        assert_eq!(scan.accepted, 12);
        assert_eq!(
            scan.rejected,
            Some(Rejection {
                index: 12,
                offset: 12,
                ch: 'm'
            })
        );
        assert_eq!(scan.accepted_prefix(), "This is a de");
        assert_eq!(scan.consumed(), "This is a dem");
        assert_eq!(scan.remaining(), "o.");
    }

    #[test]
    fn complete_scan() {
        let mut acc = all();
        let scan = scan(&mut acc, "abc").unwrap();
        assert!(scan.is_complete());
        assert_eq!(scan.accepted, 3);
        assert_eq!(scan.consumed(), "abc");
        assert_eq!(scan.remaining(), "");
    }

    #[test]
    fn empty_input() {
        let mut acc = all();
        let scan = scan(&mut acc, "").unwrap();
        assert!(scan.is_complete());
        assert_eq!(scan.accepted_prefix(), "");
    }

    #[test]
    fn multibyte_offsets() {
        let mut acc = ends_with('»', all());
        let scan = scan(&mut acc, "«é»x").unwrap();
        let r = scan.rejected.unwrap();
        assert_eq!((r.index, r.ch), (3, 'x'));
        assert_eq!(r.offset, "«é»".len());
        assert_eq!(scan.accepted_prefix(), "«é»");
        assert_eq!(scan.consumed(), "«é»x");
        assert_eq!(scan.remaining(), "");
    }
}
