//! Name fragments recognised by the parser, with their numeric meaning.
//!
//! No entry of a table is a prefix of another entry of the same table, so
//! the first entry that prefixes a word is the only one that can.

pub type Table = &'static [(&'static str, u32)];

/// Chain-length stems: fragment to carbon count.
pub static STEMS: Table = &[
    ("meth", 1),
    ("eth", 2),
    ("prop", 3),
    ("but", 4),
    ("pent", 5),
    ("hex", 6),
    ("hept", 7),
    ("oct", 8),
    ("non", 9),
    ("dec", 10),
];

/// Multiplying affixes: fragment to multiplier.
pub static MULTIPLYING_AFFIXES: Table = &[
    ("di", 2),
    ("tri", 3),
    ("tetra", 4),
    ("penta", 5),
    ("hexa", 6),
    ("hepta", 7),
    ("octa", 8),
    ("nona", 9),
];

/// Suffixes: fragment to the bond order they name.
pub static SUFFIXES: Table = &[("an", 1), ("en", 2), ("yn", 3)];

pub const ALKANE_SUFFIX: &str = "an";
pub const CYCLO: &str = "cyclo";
pub const CONNECTOR: char = 'a';
pub const ENDING: char = 'e';

/// Finds the table entry that is a prefix of `word`.
pub fn match_prefix(table: Table, word: &str) -> Option<(&'static str, u32)> {
    table
        .iter()
        .find(|(keyword, _)| word.starts_with(keyword))
        .copied()
}
