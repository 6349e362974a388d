use std::{
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{error::ScanError, scan::Loc};

/// A positioned error message, rendered as `Error <path>:<line>:<col> <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    path: PathBuf,
    loc: Loc,
    message: String,
}

impl Diagnostic {
    pub fn new(path: &Path, loc: Loc, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            loc,
            message: message.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error {}:{}:{} {}",
            self.path.display(),
            self.loc.line(),
            self.loc.col(),
            self.message
        )
    }
}

/// Writes diagnostics for one source file, one line each, and remembers them.
///
/// Reporting never fails: a diagnostic that cannot be written is logged and dropped from the
/// output, though it is still kept in [`Diagnostics::reported`].
pub struct Diagnostics<'w> {
    path: PathBuf,
    out: Box<dyn Write + 'w>,
    reported: Vec<Diagnostic>,
}

impl<'w> Diagnostics<'w> {
    pub fn new(path: &Path, out: Box<dyn Write + 'w>) -> Self {
        Self {
            path: path.to_path_buf(),
            out,
            reported: Vec::new(),
        }
    }

    pub fn stdout(path: &Path) -> Self {
        Self::new(path, Box::new(std::io::stdout()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// report `message` at `loc` corrected by `dl` lines and `dc` columns
    pub fn report(&mut self, loc: Loc, message: &str, dl: isize, dc: isize) {
        let diag = Diagnostic::new(&self.path, loc.shifted(dl, dc), message);
        log::debug!("reporting {}", diag);
        if let Err(err) = writeln!(self.out, "{}", diag) {
            log::warn!("failed to write diagnostic '{}': {}", diag, err);
        }
        self.reported.push(diag);
    }

    /// report a recoverable scan condition at its own location
    pub fn report_error(&mut self, err: &ScanError) {
        match err {
            ScanError::UnterminatedContinuation(loc) => self.report(*loc, &err.to_string(), 0, 0),
            ScanError::IOError(_) => log::error!("{}: {}", self.path.display(), err),
        }
    }

    pub fn reported(&self) -> &[Diagnostic] {
        &self.reported
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Diagnostics;
    use crate::{error::ScanError, scan::Loc};

    #[test]
    fn report_with_offsets() {
        let mut out: Vec<u8> = Vec::new();
        let mut diags = Diagnostics::new(Path::new("/src/demo.c"), Box::new(&mut out));
        diags.report(Loc::new(3, 5), "Slashed end", 0, 1);
        diags.report(Loc::new(3, 5), "moved", -1, -2);
        assert_eq!(2, diags.reported().len());
        assert_eq!(Loc::new(3, 6), diags.reported()[0].loc());
        drop(diags);

        assert_eq!(
            "Error /src/demo.c:3:6 Slashed end\nError /src/demo.c:2:3 moved\n",
            String::from_utf8_lossy(&out)
        );
    }

    #[test]
    fn report_unterminated_continuation() {
        let mut out: Vec<u8> = Vec::new();
        let mut diags = Diagnostics::new(Path::new("<inline>"), Box::new(&mut out));
        diags.report_error(&ScanError::UnterminatedContinuation(Loc::new(7, 12)));
        assert_eq!("Slashed end", diags.reported()[0].message());
        drop(diags);

        assert_eq!("Error <inline>:7:12 Slashed end\n", String::from_utf8_lossy(&out));
    }
}
