use std::{
    fmt::Debug,
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    diag::Diagnostics,
    error::ScanError,
    lexeme::Lexeme,
    read::{CharReader, TryingIteratorAdaptor},
    source::{nlsplice::NlSpliceFilter, rline::RawLineReader},
};

const PATH_INLINE: &str = "<inline>";

enum Origin {
    Path,
    Inline(String),
}

/// A C source that can be scanned into logical lines.
/// Scanning performs these translation phases:
/// * 1: physical line segmentation
/// * 2: splicing around escaped newlines
pub struct SourceFile {
    path: PathBuf,
    origin: Origin,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .finish()
    }
}

pub type LogicalLines<'a, 'w> = TryingIteratorAdaptor<NlSpliceFilter<'a, 'w>>;

impl SourceFile {
    /// a source on disk, reported under its absolute path
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        Ok(Self {
            path: std::path::absolute(path)?,
            origin: Origin::Path,
        })
    }

    pub fn inline(input: &str) -> Self {
        Self {
            path: PathBuf::from(PATH_INLINE),
            origin: Origin::Inline(input.to_owned()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily scan the source into logical lines, reporting into `diags`.
    ///
    /// The file is opened here and closed when the returned iterator is dropped.
    pub fn logical_lines<'a, 'w>(
        &'a self,
        diags: &'a mut Diagnostics<'w>,
    ) -> Result<LogicalLines<'a, 'w>, ScanError> {
        let input: Box<dyn Read + 'a> = match &self.origin {
            Origin::Path => Box::new(File::open(&self.path)?),
            Origin::Inline(text) => Box::new(text.as_bytes()),
        };
        let rlines = RawLineReader::new(CharReader::new(input));
        Ok(TryingIteratorAdaptor::new(NlSpliceFilter::new(rlines, diags)))
    }

    /// Scan the whole source, collecting its logical lines.
    pub fn read(&self, diags: &mut Diagnostics) -> Result<Vec<Lexeme>, ScanError> {
        self.logical_lines(diags)?.collect()
    }

    /// Write one `Lexeme(...)` dump line per logical line to `out`.
    pub fn dump(&self, diags: &mut Diagnostics, out: &mut dyn Write) -> Result<(), ScanError> {
        log::info!("scanning {}", self.path.display());
        for lexeme in self.logical_lines(diags)? {
            writeln!(out, "{}", lexeme?.dump())?;
        }
        Ok(())
    }
}
