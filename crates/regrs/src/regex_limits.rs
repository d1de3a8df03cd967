//! Centralized engine limits and configuration constants.
//!
//! All magic numbers that bound compilation and matching are collected
//! here; [`RegexOptions`](crate::RegexOptions) takes its defaults from them.

// ===== Submatches =====

/// Number of submatch slots: slot 0 is the whole match, 1..=9 are the
/// parenthesized groups.
pub const NSUBEXP: usize = 10;

/// Highest capture group index a pattern may use.
pub const MAX_CAPTURE_GROUP: usize = NSUBEXP - 1;

// ===== Compiler =====

/// Maximum size of a compiled program, in program units
/// (one per node, plus one per stored literal character or class item).
pub const MAX_PROGRAM_SIZE: usize = 32767;

// ===== Matcher =====

/// Maximum number of pending backtrack points of the matcher.
/// Each untaken alternative and each STAR/PLUS that could still give back
/// a character holds one, so a looped group costs one per iteration.
pub const MAX_MATCH_DEPTH: usize = 1_000_000;
