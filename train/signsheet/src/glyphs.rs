use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::SheetError;

/// Label names and the Habbakuk characters that render them, in table order.
pub const GLYPH_MAP: [(&str, char); Label::COUNT] = [
    ("Alef", ')'),
    ("Ayin", '('),
    ("Bet", 'b'),
    ("Dalet", 'd'),
    ("Gimel", 'g'),
    ("He", 'x'),
    ("Het", 'h'),
    ("Kaf", 'k'),
    ("Kaf-final", '\\'),
    ("Lamed", 'l'),
    ("Mem", '{'),
    ("Mem-medial", 'm'),
    ("Nun-final", '}'),
    ("Nun-medial", 'n'),
    ("Pe", 'p'),
    ("Pe-final", 'v'),
    ("Qof", 'q'),
    ("Resh", 'r'),
    ("Samekh", 's'),
    ("Shin", '$'),
    ("Taw", 't'),
    ("Tet", '+'),
    ("Tsadi-final", 'j'),
    ("Tsadi-medial", 'c'),
    ("Waw", 'w'),
    ("Yod", 'y'),
    ("Zayin", 'z'),
];

/// One symbol of the alphabet, stored as its row in [`GLYPH_MAP`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label(u8);

impl Label {
    pub const COUNT: usize = 27;

    pub fn all() -> impl Iterator<Item = Label> {
        (0..Self::COUNT as u8).map(Label)
    }

    pub fn from_name(name: &str) -> Option<Label> {
        GLYPH_MAP
            .iter()
            .position(|(n, _)| *n == name)
            .map(|idx| Label(idx as u8))
    }

    /// Uniform pick over the whole alphabet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Label {
        Label(rng.random_range(0..Self::COUNT) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        GLYPH_MAP[self.index()].0
    }

    pub fn glyph(self) -> char {
        GLYPH_MAP[self.index()].1
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Label {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::from_name(s).ok_or_else(|| SheetError::UnknownLabel(s.to_string()))
    }
}
