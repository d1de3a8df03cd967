/// Reasons a pattern fails to compile.
/// Each variant carries the character offset in the pattern where the
/// problem was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// A `(` without its `)`, or a `)` without its `(`
    UnmatchedParenthesis { offset: usize },
    /// More than nine parenthesized groups
    TooManyCaptureGroups { offset: usize },
    /// Unterminated `[`, or a reversed range such as `[z-a]`
    InvalidBracketExpression { offset: usize },
    /// `*`, `+` or `?` with nothing (or another quantifier) before it
    DanglingQuantifier { offset: usize },
    /// `*` or `+` applied to something that can match the empty string
    EmptyRepeatOperand { offset: usize },
    /// Pattern ends with an unescaped `\`
    TrailingBackslash { offset: usize },
    /// Compiled program exceeds the configured size limit
    ProgramTooLarge { limit: usize },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::UnmatchedParenthesis { offset } => {
                write!(f, "unmatched () at offset {}", offset)
            }
            PatternError::TooManyCaptureGroups { offset } => {
                write!(f, "too many () at offset {}", offset)
            }
            PatternError::InvalidBracketExpression { offset } => {
                write!(f, "invalid [] at offset {}", offset)
            }
            PatternError::DanglingQuantifier { offset } => {
                write!(f, "*+? follows nothing at offset {}", offset)
            }
            PatternError::EmptyRepeatOperand { offset } => {
                write!(f, "*+ operand could be empty at offset {}", offset)
            }
            PatternError::TrailingBackslash { offset } => {
                write!(f, "trailing \\ at offset {}", offset)
            }
            PatternError::ProgramTooLarge { limit } => {
                write!(f, "regular expression too big (limit {} units)", limit)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Reasons a search stops without a definite answer.
/// "No match" is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Search on a pattern object that holds no compiled program
    NoProgram,
    /// More backtrack points were pending than the configured limit allows
    TooComplex { depth: usize },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::NoProgram => write!(f, "no compiled regular expression"),
            MatchError::TooComplex { depth } => {
                write!(f, "pattern too complex (backtrack limit {})", depth)
            }
        }
    }
}

impl std::error::Error for MatchError {}
