// Regular expression engine
// A compact compiler from classic regular expression syntax to a node
// program, and a backtracking matcher with up to nine capture groups.

#[cfg(test)]
mod test;

mod compiler;
mod matcher;
pub mod program;
pub mod regex_error;
pub mod regex_limits;
pub mod regex_options;
pub mod regular_expression;
pub mod submatch;

pub use matcher::Matches;
pub use program::{CharSet, ClassItem, Node, Op, Program, SearchHints};
pub use regex_error::{MatchError, PatternError};
pub use regex_limits::NSUBEXP;
pub use regex_options::RegexOptions;
pub use regular_expression::RegularExpression;
pub use submatch::Submatches;
