use std::fmt::{Debug, Display};

/// The 1-based line and column of one source character.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Loc {
    line: usize,
    col: usize,
}

impl Loc {
    pub fn new(line: usize, col: usize) -> Self {
        Loc { line, col }
    }

    /// location of the first character of a physical line
    pub fn init(line: usize) -> Self {
        Loc { line, col: 1 }
    }

    /// location of the character following this one on the same physical line
    pub fn next(&self) -> Self {
        Self {
            line: self.line,
            col: self.col + 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// apply signed line and column corrections, never leaving the 1-based range
    pub fn shifted(&self, dl: isize, dc: isize) -> Self {
        Self {
            line: self.line.saturating_add_signed(dl).max(1),
            col: self.col.saturating_add_signed(dc).max(1),
        }
    }
}

impl Debug for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
