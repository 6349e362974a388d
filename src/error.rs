use thiserror::Error;

use crate::scan::Loc;

#[derive(Debug, Error)]
pub enum ScanError {
    /// reading or decoding the source failed; the scan stops here
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    /// the last physical line ends in a backslash with no line left to splice.
    /// Reported as a diagnostic at the location one past the spliced text, never returned.
    #[error("Slashed end")]
    UnterminatedContinuation(Loc),
}
