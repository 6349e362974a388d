use crate::{
    diag::Diagnostics,
    error::ScanError,
    lexeme::{Lexeme, LexemeKind},
    read::TryingIterator,
    scan::Loc,
};

enum SpliceState {
    /// nothing buffered, the next raw line starts a new logical line
    Empty,
    /// a logical line whose last physical line ended in a backslash; `splice` is where that
    /// backslash was
    Pending { line: Lexeme, splice: Loc },
    Done,
}

/// Each physical line ending in a backslash is joined with the next one, the backslash
/// deleted, to form logical source lines. Every surviving character keeps its original
/// location.
///
/// NOTE: A source file shall not end in a backslash. When it does, `Slashed end` is
/// reported one column past the spliced text and the partial logical line is still yielded.
pub struct NlSpliceFilter<'a, 'w> {
    iter: Box<dyn TryingIterator<OkItem = Lexeme> + 'a>,
    state: SpliceState,
    diags: &'a mut Diagnostics<'w>,
}

impl<'a, 'w> NlSpliceFilter<'a, 'w> {
    pub fn new<T: TryingIterator<OkItem = Lexeme> + 'a>(
        iter: T,
        diags: &'a mut Diagnostics<'w>,
    ) -> Self {
        Self {
            iter: Box::new(iter),
            state: SpliceState::Empty,
            diags,
        }
    }

    fn unterminated(&mut self, line: Lexeme, splice: Loc) -> Lexeme {
        let at = line.last_pos().map(|loc| loc.shifted(0, 1)).unwrap_or(splice);
        self.diags.report_error(&ScanError::UnterminatedContinuation(at));
        line
    }
}

impl<'a, 'w> TryingIterator for NlSpliceFilter<'a, 'w> {
    type OkItem = Lexeme;

    fn try_next(&mut self) -> Result<Option<Lexeme>, ScanError> {
        loop {
            let state = std::mem::replace(&mut self.state, SpliceState::Done);
            if let SpliceState::Done = state {
                return Ok(None);
            }

            let rline = match self.iter.try_next()? {
                Some(rline) => rline,
                None => {
                    return Ok(match state {
                        SpliceState::Pending { line, splice } => {
                            Some(self.unterminated(line, splice))
                        }
                        _ => None,
                    })
                }
            };

            let mut current = match state {
                SpliceState::Pending { mut line, .. } => {
                    line.set_kind(LexemeKind::ContinuedLine);
                    line.append(rline);
                    line
                }
                _ => rline,
            };

            match current.last_pos().filter(|_| current.ends_with("\\")) {
                Some(splice) => {
                    log::debug!("splicing at {}", splice);
                    current.truncate(1);
                    self.state = SpliceState::Pending {
                        line: current,
                        splice,
                    };
                }
                None => {
                    log::debug!("logical line {:?}", current);
                    self.state = SpliceState::Empty;
                    return Ok(Some(current));
                }
            }
        }
    }
}
