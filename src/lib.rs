//! Line assembly for a C source scanner: physical lines are read with the location of every
//! character, then spliced into logical lines around backslash-newlines.

pub mod common;
pub mod diag;
pub mod error;
pub mod lexeme;
pub mod read;
pub mod scan;
pub mod source;

pub use common::format_ranges;
pub use diag::{Diagnostic, Diagnostics};
pub use error::ScanError;
pub use lexeme::{Lexeme, LexemeKind};
pub use scan::Loc;
pub use source::file::SourceFile;
