use std::fmt::{Debug, Display};

use crate::{common::format_ranges, scan::Loc};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LexemeKind {
    #[default]
    Unknown,
    /// one physical source line
    RawLine,
    /// physical lines spliced together by backslash-newline
    ContinuedLine,
}

impl LexemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "LEX_UNKNOWN",
            Self::RawLine => "LEX_RLINE",
            Self::ContinuedLine => "LEX_CLINE",
        }
    }
}

impl Display for LexemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of text where every character carries the location it was read from.
///
/// `text` and `locs` always hold the same number of entries: `locs[i]` is where the i-th
/// character of `text` came from.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Lexeme {
    kind: LexemeKind,
    text: String,
    locs: Vec<Loc>,
}

impl Lexeme {
    pub fn new() -> Self {
        Self::default()
    }

    /// a raw line lexeme for physical line `line`, one column per character
    pub fn raw_line(line: usize, text: String) -> Self {
        let locs = std::iter::successors(Some(Loc::init(line)), |loc| Some(loc.next()))
            .take(text.chars().count())
            .collect();
        Self {
            kind: LexemeKind::RawLine,
            text,
            locs,
        }
    }

    pub fn kind(&self) -> LexemeKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: LexemeKind) {
        self.kind = kind;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn locs(&self) -> &[Loc] {
        &self.locs
    }

    pub fn len(&self) -> usize {
        self.locs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    /// location of the last character, if any
    pub fn last_pos(&self) -> Option<Loc> {
        self.locs.last().copied()
    }

    /// consume `other`, extending this lexeme by its characters and locations
    pub fn append(&mut self, other: Lexeme) {
        self.text.push_str(&other.text);
        self.locs.extend(other.locs);
    }

    /// drop the last `count` characters along with their locations
    pub fn truncate(&mut self, count: usize) {
        let count = if count > self.len() {
            log::warn!(
                "truncating {} chars from a lexeme of {}, clearing it",
                count,
                self.len()
            );
            self.len()
        } else {
            count
        };
        for _ in 0..count {
            self.text.pop();
            self.locs.pop();
        }
    }

    pub fn ends_with(&self, s: &str) -> bool {
        self.text.ends_with(s)
    }

    /// locations grouped by consecutive line, columns compressed per group: `3:1-4;4:1-2`
    pub fn format_locs(&self) -> String {
        let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
        for loc in &self.locs {
            match groups.last_mut() {
                Some((line, cols)) if *line == loc.line() => cols.push(loc.col()),
                _ => groups.push((loc.line(), vec![loc.col()])),
            }
        }
        groups
            .into_iter()
            .map(|(line, cols)| format!("{}:{}", line, format_ranges(cols)))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn dump(&self) -> String {
        format!(
            "Lexeme(type={}, text={}, locs={})",
            self.kind,
            self.text,
            self.format_locs()
        )
    }
}

impl Debug for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump())
    }
}
