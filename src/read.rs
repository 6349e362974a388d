//

use std::io::{Error, Read};

use crate::{common::err_invalid_data, error::ScanError};

const BUF_SIZE: usize = 64;

/// A pull based stage that can fail: `Ok(None)` marks the end of input.
pub trait TryingIterator {
    type OkItem;

    fn try_next(&mut self) -> Result<Option<Self::OkItem>, ScanError>;
}

/// Adapts a [`TryingIterator`] into an [`Iterator`] of results that ends after the first error.
pub struct TryingIteratorAdaptor<T: TryingIterator> {
    iter: T,
    is_err: bool,
}

impl<T: TryingIterator> TryingIteratorAdaptor<T> {
    pub fn new(iter: T) -> Self {
        Self {
            iter,
            is_err: false,
        }
    }
}

impl<T: TryingIterator> Iterator for TryingIteratorAdaptor<T> {
    type Item = Result<T::OkItem, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_err {
            None
        } else {
            match self.iter.try_next() {
                Ok(next) => next.map(Ok),
                Err(err) => {
                    self.is_err = true;
                    Some(Err(err))
                }
            }
        }
    }
}

/// wrap a Read impl to produce unicode chars over utf8-encoded bytes
pub struct CharReader<'read> {
    reader: Box<dyn Read + 'read>,
    // must store at least 4 bytes for multibyte chars
    buff: [u8; BUF_SIZE],
    bufi: usize,
    bufn: usize,
}

impl<'read> CharReader<'read> {
    pub fn new(reader: Box<dyn Read + 'read>) -> Self {
        Self {
            reader,
            buff: [0; BUF_SIZE],
            bufi: 0,
            bufn: 0,
        }
    }

    /// advances a reader to consume the next unicode character, if available
    pub fn read(&mut self) -> Result<Option<char>, Error> {
        // if buf index exceeds buf count, reset the buffer and indices with fresh read
        if self.bufi >= self.bufn {
            self.bufi = 0;
            self.bufn = self.fill(0)?;
            if self.bufn == 0 {
                return Ok(None);
            }
        }

        let lead = self.buff[self.bufi];
        if lead.is_ascii() {
            self.bufi += 1;
            return Ok(Some(lead as char));
        }

        let width = Self::utf8_width(lead)
            .ok_or_else(|| err_invalid_data(format!("invalid utf-8 lead byte 0x{:02x}", lead)))?;
        // dealing with unicode, so rotate left if the sequence may straddle the end...
        if self.bufn - self.bufi < width {
            self.buff.copy_within(self.bufi..self.bufn, 0);
            self.bufn -= self.bufi;
            self.bufi = 0;
            // then attempt to fill the buffer until the sequence is complete
            while self.bufn < width {
                let n_read = self.fill(self.bufn)?;
                if n_read == 0 {
                    return Err(err_invalid_data("truncated utf-8 sequence at end of input"));
                }
                self.bufn += n_read;
            }
        }

        let seq = &self.buff[self.bufi..self.bufi + width];
        let uni = core::str::from_utf8(seq)
            .map_err(err_invalid_data)?
            .chars()
            .next()
            .ok_or_else(|| err_invalid_data("empty utf-8 sequence"))?;
        self.bufi += width;
        Ok(Some(uni))
    }

    fn fill(&mut self, from: usize) -> Result<usize, Error> {
        loop {
            match self.reader.read(&mut self.buff[from..BUF_SIZE]) {
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }

    fn utf8_width(lead: u8) -> Option<usize> {
        match lead {
            0xC2..=0xDF => Some(2),
            0xE0..=0xEF => Some(3),
            0xF0..=0xF4 => Some(4),
            _ => None,
        }
    }

    pub fn into_chars(self) -> CharReaderIter<'read> {
        CharReaderIter::new(self)
    }
}

pub struct CharReaderIter<'read> {
    reader: CharReader<'read>,
}

impl<'read> CharReaderIter<'read> {
    fn new(reader: CharReader<'read>) -> Self {
        Self { reader }
    }
}

impl<'a> Iterator for CharReaderIter<'a> {
    type Item = Result<char, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read() {
            Ok(Some(next)) => Some(Ok(next)),
            Err(err) => Some(Err(err)),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for CharReader<'a> {
    type Item = Result<char, Error>;
    type IntoIter = CharReaderIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_chars()
    }
}
