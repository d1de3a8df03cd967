use crate::regex_limits::{MAX_MATCH_DEPTH, MAX_PROGRAM_SIZE};

/// Tunable limits for compiling and searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegexOptions {
    /// Largest program, in program units, the compiler will produce.
    pub max_program_size: usize,
    /// Most backtrack points the matcher may keep pending before giving up
    /// with [`MatchError::TooComplex`](crate::MatchError::TooComplex).
    pub max_match_depth: usize,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            max_program_size: MAX_PROGRAM_SIZE,
            max_match_depth: MAX_MATCH_DEPTH,
        }
    }
}
