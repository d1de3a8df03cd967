// Leftmost-first search over candidate start positions.
// The search hints only skip positions that cannot start a match; they
// never change which match is found.

use super::{MatchState, match_impl};
use crate::program::Program;
use crate::regex_error::MatchError;
use crate::regex_options::RegexOptions;
use crate::submatch::Submatches;

/// Find the leftmost match of `program` in `text`, starting at byte
/// offset `from`. A `from` past the end or inside a character finds
/// nothing.
pub(crate) fn search(
    program: &Program,
    text: &str,
    from: usize,
    options: &RegexOptions,
) -> Result<Option<Submatches>, MatchError> {
    if !text.is_char_boundary(from) {
        return Ok(None);
    }
    let hints = &program.hints;

    // A match must contain the required literal at or after its start,
    // so no start past the literal's last occurrence can succeed.
    let last_start = match &hints.must {
        Some(must) => match text[from..].rfind(must.as_str()) {
            Some(offset) => from + offset,
            None => return Ok(None),
        },
        None => text.len(),
    };

    let mut ms = MatchState::new(program, text, options);

    if hints.anchored {
        return try_at(&mut ms, from);
    }

    let mut si = from;
    loop {
        if let Some(c) = hints.start {
            match text[si..].find(c) {
                Some(offset) => si += offset,
                None => return Ok(None),
            }
        }
        if si > last_start {
            return Ok(None);
        }
        if let Some(subs) = try_at(&mut ms, si)? {
            return Ok(Some(subs));
        }
        match text[si..].chars().next() {
            Some(c) => si += c.len_utf8(),
            None => return Ok(None),
        }
    }
}

/// Attempt a match starting exactly at `si`.
fn try_at(ms: &mut MatchState, si: usize) -> Result<Option<Submatches>, MatchError> {
    ms.reset();
    match match_impl(ms, si, Some(0)) {
        Some(end) => {
            ms.subs.starts[0] = Some(si);
            ms.subs.ends[0] = Some(end);
            Ok(Some(ms.subs))
        }
        None => match ms.error.take() {
            Some(err) => Err(err),
            None => Ok(None),
        },
    }
}

/// Iterator over successive non-overlapping matches of a program.
///
/// After an empty match the next search starts one character later.
/// Iteration stops after the first error.
pub struct Matches<'p, 't> {
    program: &'p Program,
    text: &'t str,
    options: RegexOptions,
    pos: Option<usize>,
}

impl<'p, 't> Matches<'p, 't> {
    pub(crate) fn new(program: &'p Program, text: &'t str, options: &RegexOptions) -> Self {
        Self {
            program,
            text,
            options: *options,
            pos: Some(0),
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Result<Submatches, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.pos?;
        let subs = match search(self.program, self.text, from, &self.options) {
            Ok(Some(subs)) => subs,
            Ok(None) => {
                self.pos = None;
                return None;
            }
            Err(err) => {
                self.pos = None;
                return Some(Err(err));
            }
        };

        let (start, end) = subs.span(0).unwrap_or((from, from));
        self.pos = if end > start {
            Some(end)
        } else {
            self.text[end..].chars().next().map(|c| end + c.len_utf8())
        };
        Some(Ok(subs))
    }
}
