//! Character class tables for acceptor construction.
//!
//! A [`ClassTable`] is an opaque membership predicate. Acceptors built from
//! tables never look inside them beyond [`ClassTable::contains`].

use std::fmt;

use phf::{Map, phf_map};

/// An inclusive range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub lo: char,
    pub hi: char,
}

impl CharRange {
    pub const fn new(lo: char, hi: char) -> Self {
        Self { lo, hi }
    }

    pub const fn single(ch: char) -> Self {
        Self { lo: ch, hi: ch }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lo <= ch && ch <= self.hi
    }
}

#[derive(Clone, Copy)]
enum Source {
    Ranges(&'static [CharRange]),
    Property(fn(char) -> bool),
}

/// A named character class.
#[derive(Clone, Copy)]
pub struct ClassTable {
    name: &'static str,
    source: Source,
}

impl ClassTable {
    /// A table backed by a list of inclusive ranges.
    pub const fn ranges(name: &'static str, ranges: &'static [CharRange]) -> Self {
        Self {
            name,
            source: Source::Ranges(ranges),
        }
    }

    /// A table backed by a character property function.
    pub const fn property(name: &'static str, test: fn(char) -> bool) -> Self {
        Self {
            name,
            source: Source::Property(test),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Test whether `ch` is a member of this class.
    pub fn contains(&self, ch: char) -> bool {
        match self.source {
            Source::Ranges(ranges) => ranges.iter().any(|r| r.contains(ch)),
            Source::Property(test) => test(ch),
        }
    }
}

impl fmt::Debug for ClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassTable({})", self.name)
    }
}

/// Test whether `ch` belongs to any table in `tables`.
pub fn in_any(tables: &[ClassTable], ch: char) -> bool {
    tables.iter().any(|t| t.contains(ch))
}

// ─── Built-in tables ────────────────────────────────────────────────────────

const DIGIT_RANGES: &[CharRange] = &[CharRange::new('0', '9')];
const HEX_DIGIT_RANGES: &[CharRange] = &[
    CharRange::new('0', '9'),
    CharRange::new('A', 'F'),
    CharRange::new('a', 'f'),
];
const ASCII_RANGES: &[CharRange] = &[CharRange::new('\0', '\x7f')];
const GRAPHIC_ASCII_RANGES: &[CharRange] = &[CharRange::new('\x21', '\x7e')];
const PUNCT_RANGES: &[CharRange] = &[
    CharRange::new('!', '/'),
    CharRange::new(':', '@'),
    CharRange::new('[', '`'),
    CharRange::new('{', '~'),
];

/// Alphabetic characters (Unicode `Alphabetic`).
pub const LETTER: ClassTable = ClassTable::property("letter", char::is_alphabetic);
/// Uppercase characters (Unicode `Uppercase`).
pub const UPPER: ClassTable = ClassTable::property("upper", char::is_uppercase);
/// Lowercase characters (Unicode `Lowercase`).
pub const LOWER: ClassTable = ClassTable::property("lower", char::is_lowercase);
/// Numeric characters in any script.
pub const NUMERIC: ClassTable = ClassTable::property("numeric", char::is_numeric);
/// Unicode `White_Space`.
pub const WHITE_SPACE: ClassTable = ClassTable::property("space", char::is_whitespace);
/// Control characters (`Cc`).
pub const CONTROL: ClassTable = ClassTable::property("control", char::is_control);
/// ASCII decimal digits.
pub const DIGIT: ClassTable = ClassTable::ranges("digit", DIGIT_RANGES);
/// ASCII hexadecimal digits, both cases.
pub const HEX_DIGIT: ClassTable = ClassTable::ranges("hex", HEX_DIGIT_RANGES);
/// ASCII punctuation and symbols.
pub const PUNCT: ClassTable = ClassTable::ranges("punct", PUNCT_RANGES);
/// The ASCII range `0x00..=0x7F`.
pub const ASCII: ClassTable = ClassTable::ranges("ascii", ASCII_RANGES);
/// Visible ASCII `0x21..=0x7E`.
pub const GRAPHIC: ClassTable = ClassTable::ranges("graphic", GRAPHIC_ASCII_RANGES);

static NAMED_CLASSES: Map<&'static str, ClassTable> = phf_map! {
    "letter" => LETTER,
    "upper" => UPPER,
    "lower" => LOWER,
    "numeric" => NUMERIC,
    "space" => WHITE_SPACE,
    "control" => CONTROL,
    "digit" => DIGIT,
    "hex" => HEX_DIGIT,
    "punct" => PUNCT,
    "ascii" => ASCII,
    "graphic" => GRAPHIC,
};

/// Look up a built-in table by name (case-insensitive).
pub fn lookup_class(name: &str) -> Option<ClassTable> {
    NAMED_CLASSES.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Names of all built-in tables, in no particular order.
pub fn class_names() -> impl Iterator<Item = &'static str> {
    NAMED_CLASSES.keys().copied()
}
