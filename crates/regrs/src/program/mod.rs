mod op;

pub use op::{CharSet, ClassItem, Op};

use crate::matcher::{self, Matches};
use crate::regex_error::{MatchError, PatternError};
use crate::regex_options::RegexOptions;
use crate::submatch::Submatches;

/// A single instruction plus its link to the following one.
///
/// The link is relative so that inserting a node in front of an operand
/// during compilation keeps every link inside the operand valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub op: Op,
    pub(crate) next: Option<isize>,
}

impl Node {
    pub(crate) fn new(op: Op) -> Self {
        Self { op, next: None }
    }
}

/// Facts derived once at compile time that let a search reject
/// start positions without running the backtracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchHints {
    /// Character every match begins with
    pub start: Option<char>,
    /// Every match begins at the start of the text
    pub anchored: bool,
    /// Longest literal every match contains
    pub must: Option<String>,
}

impl SearchHints {
    /// Byte length of the required literal, 0 when there is none.
    pub fn must_len(&self) -> usize {
        self.must.as_ref().map_or(0, |m| m.len())
    }
}

/// A compiled pattern: the node sequence and its search hints.
///
/// Immutable once built. Every search creates its own match state, so
/// one `Program` can be shared by any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub(crate) nodes: Vec<Node>,
    pub(crate) hints: SearchHints,
    pub(crate) groups: usize,
    pub(crate) size: usize,
}

impl Program {
    /// Compile `pattern` with the default limits.
    pub fn compile(pattern: &str) -> Result<Program, PatternError> {
        Self::compile_with(pattern, &RegexOptions::default())
    }

    pub fn compile_with(pattern: &str, options: &RegexOptions) -> Result<Program, PatternError> {
        crate::compiler::compile(pattern, options)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn hints(&self) -> &SearchHints {
        &self.hints
    }

    /// Number of capture groups in the pattern.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Program size in units (see [`Op::size`]).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the node following `index`, if linked.
    #[inline(always)]
    pub fn next(&self, index: usize) -> Option<usize> {
        let offset = self.nodes.get(index)?.next?;
        Some(index.wrapping_add_signed(offset))
    }

    /// Leftmost match of the program in `text`, trying start positions
    /// from byte offset `from` onwards.
    pub fn search(
        &self,
        text: &str,
        from: usize,
        options: &RegexOptions,
    ) -> Result<Option<Submatches>, MatchError> {
        matcher::search(self, text, from, options)
    }

    /// True if the program matches anywhere in `text`.
    /// A search that exceeds the backtrack limit counts as no match.
    pub fn is_match(&self, text: &str) -> bool {
        matches!(self.search(text, 0, &RegexOptions::default()), Ok(Some(_)))
    }

    /// Successive non-overlapping matches in `text`.
    pub fn find_iter<'p, 't>(
        &'p self,
        text: &'t str,
        options: &RegexOptions,
    ) -> Matches<'p, 't> {
        Matches::new(self, text, options)
    }
}

impl std::str::FromStr for Program {
    type Err = PatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Program::compile(pattern)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, node) in self.nodes.iter().enumerate() {
            write!(f, "{:3}: {}", index, node.op)?;
            if let Some(next) = self.next(index) {
                write!(f, " -> {}", next)?;
            }
            writeln!(f)?;
        }
        write!(f, "size {}, groups {}", self.size, self.groups)?;
        if self.hints.anchored {
            f.write_str(", anchored")?;
        }
        if let Some(c) = self.hints.start {
            write!(f, ", start {:?}", c)?;
        }
        if let Some(must) = &self.hints.must {
            write!(f, ", must {:?}", must)?;
        }
        Ok(())
    }
}
