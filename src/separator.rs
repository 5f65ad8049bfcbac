/// A code point that ends a host name label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    /// U+002E FULL STOP
    FullStop,
    /// U+3002 IDEOGRAPHIC FULL STOP
    Ideographic,
    /// U+FF0E FULLWIDTH FULL STOP
    Fullwidth,
    /// U+FF61 HALFWIDTH IDEOGRAPHIC FULL STOP
    HalfwidthIdeographic,
}

impl Separator {
    /// Returns the separator `c` is, if any.
    #[must_use]
    pub const fn of(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::FullStop),
            '\u{3002}' => Some(Self::Ideographic),
            '\u{FF0E}' => Some(Self::Fullwidth),
            '\u{FF61}' => Some(Self::HalfwidthIdeographic),
            _ => None,
        }
    }

    /// The code point this separator stands for.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::FullStop => '.',
            Self::Ideographic => '\u{3002}',
            Self::Fullwidth => '\u{FF0E}',
            Self::HalfwidthIdeographic => '\u{FF61}',
        }
    }

    /// Width of the separator in UTF-8.
    #[must_use]
    pub const fn len_utf8(self) -> usize {
        self.as_char().len_utf8()
    }
}
