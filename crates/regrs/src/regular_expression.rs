use crate::program::Program;
use crate::regex_error::{MatchError, PatternError};
use crate::regex_options::RegexOptions;
use crate::submatch::Submatches;

/// A compiled pattern together with the result of its last successful
/// search.
///
/// The object borrows the text it last searched (`'t`), which is what
/// lets [`matched_text`](Self::matched_text) hand out slices of it.
///
/// ```
/// use regrs::RegularExpression;
///
/// let mut re = RegularExpression::new("([a-z]+)\\.cc");
/// assert!(re.find("src/matcher.cc"));
/// assert_eq!(re.matched_text(1), Some("matcher"));
/// assert_eq!(re.match_start(), Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegularExpression<'t> {
    program: Option<Program>,
    submatches: Submatches,
    searched: Option<&'t str>,
    options: RegexOptions,
}

impl<'t> RegularExpression<'t> {
    /// Compile `pattern`. On a compile error the object is left invalid;
    /// use [`try_new`](Self::try_new) to see the error.
    pub fn new(pattern: &str) -> Self {
        let mut re = Self::default();
        // an invalid object is the documented outcome
        let _ = re.compile(pattern);
        re
    }

    pub fn try_new(pattern: &str) -> Result<Self, PatternError> {
        let mut re = Self::default();
        re.compile(pattern)?;
        Ok(re)
    }

    /// An object with no pattern that will compile and search with `options`.
    pub fn with_options(options: RegexOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn from_program(program: Program) -> Self {
        Self {
            program: Some(program),
            ..Self::default()
        }
    }

    /// Replace the current program with `pattern` compiled.
    /// Results of earlier searches are discarded either way.
    pub fn compile(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.program = None;
        self.submatches = Submatches::default();
        self.searched = None;
        self.program = Some(Program::compile_with(pattern, &self.options)?);
        Ok(())
    }

    /// Search `text` for the leftmost match.
    ///
    /// Returns false both when nothing matches and when the search cannot
    /// be completed (no program, backtrack limit); [`try_find`](Self::try_find)
    /// tells those apart.
    pub fn find(&mut self, text: &'t str) -> bool {
        self.try_find_from(text, 0).unwrap_or(false)
    }

    /// Like [`find`](Self::find), trying start positions from byte offset
    /// `from` onwards. Reported offsets stay relative to the start of `text`.
    pub fn find_from(&mut self, text: &'t str, from: usize) -> bool {
        self.try_find_from(text, from).unwrap_or(false)
    }

    pub fn try_find(&mut self, text: &'t str) -> Result<bool, MatchError> {
        self.try_find_from(text, 0)
    }

    pub fn try_find_from(&mut self, text: &'t str, from: usize) -> Result<bool, MatchError> {
        let program = self.program.as_ref().ok_or(MatchError::NoProgram)?;
        match program.search(text, from, &self.options)? {
            Some(subs) => {
                self.submatches = subs;
                self.searched = Some(text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.program.is_some()
    }

    /// Drop the compiled program.
    pub fn invalidate(&mut self) {
        self.program = None;
    }

    /// Offset of the start of the whole match.
    pub fn match_start(&self) -> Option<usize> {
        self.start(0)
    }

    /// Offset just past the end of the whole match.
    pub fn match_end(&self) -> Option<usize> {
        self.end(0)
    }

    /// Start offset of submatch `n` (0 = whole match) in the last searched
    /// text. `None` for an invalid object, before any successful search,
    /// for `n > 9`, or when group `n` did not take part in the match.
    pub fn start(&self, n: usize) -> Option<usize> {
        self.submatches()?.start(n)
    }

    pub fn end(&self, n: usize) -> Option<usize> {
        self.submatches()?.end(n)
    }

    /// Text of submatch `n`, under the same conditions as [`start`](Self::start).
    pub fn matched_text(&self, n: usize) -> Option<&'t str> {
        let text = self.searched?;
        self.submatches()?.get(n, text)
    }

    pub fn submatches(&self) -> Option<&Submatches> {
        self.program.as_ref()?;
        self.searched?;
        Some(&self.submatches)
    }

    pub fn searched_text(&self) -> Option<&'t str> {
        self.searched
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn options(&self) -> &RegexOptions {
        &self.options
    }

    /// True if both objects hold the same compiled program (or neither
    /// holds one).
    pub fn same_program(&self, other: &RegularExpression<'_>) -> bool {
        self.program == other.program
    }

    /// [`same_program`](Self::same_program), plus the same submatch offsets
    /// into the very same searched text.
    pub fn deep_equal(&self, other: &RegularExpression<'_>) -> bool {
        self.same_program(other)
            && self.submatches == other.submatches
            && match (self.searched, other.searched) {
                (Some(a), Some(b)) => std::ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Equality compares compiled programs only; see
/// [`deep_equal`](RegularExpression::deep_equal).
impl<'b> PartialEq<RegularExpression<'b>> for RegularExpression<'_> {
    fn eq(&self, other: &RegularExpression<'b>) -> bool {
        self.same_program(other)
    }
}
