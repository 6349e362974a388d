use crate::{error::ScanError, lexeme::Lexeme, read::CharReader, read::TryingIterator};

/// Splits a char stream into physical lines, one [`Lexeme`] per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are dropped from its text. A last line
/// without a terminator is still produced, but a terminator at the very end does not open
/// an empty line.
pub struct RawLineReader<'a> {
    chars: CharReader<'a>,
    /// a char read past a lone `\r`, belonging to the next line
    peeked: Option<char>,
    line: usize,
}

impl<'a> RawLineReader<'a> {
    pub fn new(chars: CharReader<'a>) -> Self {
        Self {
            chars,
            peeked: None,
            line: 1,
        }
    }

    fn read_char(&mut self) -> Result<Option<char>, ScanError> {
        match self.peeked.take() {
            Some(ch) => Ok(Some(ch)),
            None => Ok(self.chars.read()?),
        }
    }
}

impl<'a> TryingIterator for RawLineReader<'a> {
    type OkItem = Lexeme;

    fn try_next(&mut self) -> Result<Option<Lexeme>, ScanError> {
        let mut text = String::new();
        loop {
            match self.read_char()? {
                None if text.is_empty() => return Ok(None),
                None => break,
                Some('\n') => break,
                Some('\r') => {
                    match self.chars.read()? {
                        Some('\n') | None => {}
                        other => self.peeked = other,
                    }
                    break;
                }
                Some(ch) => text.push(ch),
            }
        }

        let lexeme = Lexeme::raw_line(self.line, text);
        log::trace!("raw line {}: {:?}", self.line, lexeme.text());
        self.line += 1;
        Ok(Some(lexeme))
    }
}
