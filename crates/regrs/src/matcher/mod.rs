// Backtracking matcher
//
// - MatchState holds the text, the program, the submatch slots and the
//   stack of pending backtrack points
// - match_impl runs the node chain forward; every choice (BRANCH, the
//   give-back of STAR/PLUS) pushes the alternative not taken, and a
//   failure resumes the most recent one
// - OPEN/CLOSE overwrite their slot as control passes, logging the old
//   value so a backtrack can restore it; the last pass through a looped
//   group therefore wins
// - The number of pending backtrack points is bounded by RegexOptions

mod search;

pub use search::Matches;
pub(crate) use search::search;

use crate::program::{Op, Program};
use crate::regex_error::MatchError;
use crate::regex_options::RegexOptions;
use crate::submatch::Submatches;

/// A choice not taken yet.
#[derive(Debug, Clone, Copy)]
enum Backtrack {
    /// Resume at node `pc` with the text at `si`
    Resume { pc: usize, si: usize, undo: usize },
    /// Retry the continuation of the STAR/PLUS node `index` with one
    /// repetition fewer than `count` (which ended at `end`)
    GiveBack {
        index: usize,
        end: usize,
        count: usize,
        undo: usize,
    },
}

/// Old value of a submatch slot, restored on backtrack.
#[derive(Debug, Clone, Copy)]
struct Saved {
    n: usize,
    is_end: bool,
    old: Option<usize>,
}

/// Match state for one search. Never shared between searches.
pub(crate) struct MatchState<'a> {
    pub text: &'a str,
    pub program: &'a Program,
    pub subs: Submatches,
    pub max_depth: usize,
    pub error: Option<MatchError>, // set when the search has to be abandoned
    stack: Vec<Backtrack>,
    undo: Vec<Saved>,
}

impl<'a> MatchState<'a> {
    pub fn new(program: &'a Program, text: &'a str, options: &RegexOptions) -> Self {
        Self {
            text,
            program,
            subs: Submatches::default(),
            max_depth: options.max_match_depth,
            error: None,
            stack: Vec::new(),
            undo: Vec::new(),
        }
    }

    /// Reset for the next candidate start position.
    #[inline]
    pub fn reset(&mut self) {
        self.subs = Submatches::default();
        self.stack.clear();
        self.undo.clear();
    }

    #[inline(always)]
    fn char_at(&self, si: usize) -> Option<char> {
        self.text.get(si..)?.chars().next()
    }

    /// Remember a choice. Fails the search once too many are pending.
    fn push(&mut self, entry: Backtrack) -> bool {
        if self.stack.len() >= self.max_depth {
            self.error = Some(MatchError::TooComplex {
                depth: self.max_depth,
            });
            return false;
        }
        self.stack.push(entry);
        true
    }

    fn set_slot(&mut self, n: usize, is_end: bool, si: usize) {
        let slots = if is_end {
            &mut self.subs.ends
        } else {
            &mut self.subs.starts
        };
        if let Some(slot) = slots.get_mut(n) {
            // nothing to restore while no choice is pending
            if !self.stack.is_empty() {
                self.undo.push(Saved { n, is_end, old: *slot });
            }
            *slot = Some(si);
        }
    }

    fn rollback(&mut self, len: usize) {
        while self.undo.len() > len {
            let Some(saved) = self.undo.pop() else {
                break;
            };
            let slots = if saved.is_end {
                &mut self.subs.ends
            } else {
                &mut self.subs.starts
            };
            if let Some(slot) = slots.get_mut(saved.n) {
                *slot = saved.old;
            }
        }
    }
}

/// Run the program from node `pc` against the text at byte offset `si`.
/// Returns the byte offset where a trace reached END, `None` on failure
/// (with `ms.error` set if the search was abandoned).
pub(crate) fn match_impl(ms: &mut MatchState, si: usize, pc: Option<usize>) -> Option<usize> {
    let mut pos = pc.map(|pc| (pc, si));
    loop {
        if let Some((pc, si)) = pos {
            if let Some(end) = run(ms, si, pc) {
                return Some(end);
            }
        }
        if ms.error.is_some() {
            return None;
        }
        pos = Some(resume(ms)?);
    }
}

/// Pop backtrack points until one yields a place to continue from.
fn resume(ms: &mut MatchState) -> Option<(usize, usize)> {
    while let Some(entry) = ms.stack.pop() {
        match entry {
            Backtrack::Resume { pc, si, undo } => {
                ms.rollback(undo);
                return Some((pc, si));
            }
            Backtrack::GiveBack {
                index,
                end,
                count,
                undo,
            } => {
                ms.rollback(undo);
                if count == 0 {
                    continue;
                }
                let back = ms.text[..end].chars().next_back().map_or(0, char::len_utf8);
                if let Some(pos) = greedy(ms, index, end - back, count - 1) {
                    return Some(pos);
                }
                if ms.error.is_some() {
                    return None;
                }
            }
        }
    }
    None
}

/// Walk forward from `pc` until END or a failure.
fn run(ms: &mut MatchState, mut si: usize, pc: usize) -> Option<usize> {
    let program = ms.program;
    let text = ms.text;
    let mut pc = Some(pc);

    while let Some(index) = pc {
        let node = program.nodes.get(index)?;
        let next = program.next(index);

        match &node.op {
            Op::Bol => {
                if si != 0 {
                    return None;
                }
            }
            Op::Eol => {
                if si != text.len() {
                    return None;
                }
            }
            Op::Any => {
                si += ms.char_at(si)?.len_utf8();
            }
            Op::Exactly(lit) => {
                if !text.get(si..)?.starts_with(lit.as_str()) {
                    return None;
                }
                si += lit.len();
            }
            Op::AnyOf(set) => {
                let c = ms.char_at(si)?;
                if !set.contains(c) {
                    return None;
                }
                si += c.len_utf8();
            }
            Op::AnyBut(set) => {
                let c = ms.char_at(si)?;
                if set.contains(c) {
                    return None;
                }
                si += c.len_utf8();
            }
            Op::Nothing | Op::Back => {}
            Op::Open(n) => ms.set_slot(*n, false, si),
            Op::Close(n) => ms.set_slot(*n, true, si),
            Op::Branch => {
                // the next alternative, if any, is tried on failure
                if let Some(alt) = next.filter(|&n| is_branch(program, n)) {
                    let undo = ms.undo.len();
                    if !ms.push(Backtrack::Resume { pc: alt, si, undo }) {
                        return None;
                    }
                }
                pc = Some(index + 1);
                continue;
            }
            Op::Star | Op::Plus => {
                let operand = &program.nodes.get(index + 1)?.op;
                let (end, count) = repeat(text, si, operand);
                let (resume_at, resume_si) = greedy(ms, index, end, count)?;
                pc = Some(resume_at);
                si = resume_si;
                continue;
            }
            Op::End => return Some(si),
        }

        pc = next;
    }

    // fell off the chain without reaching END
    None
}

#[inline]
fn is_branch(program: &Program, index: usize) -> bool {
    program
        .nodes
        .get(index)
        .is_some_and(|node| matches!(node.op, Op::Branch))
}

/// Greedy repetition (STAR, PLUS)
///
/// Starting from `count` repetitions ending at `end`, give back one
/// character at a time until the continuation is worth trying. Pushes the
/// remaining give-backs and returns where to continue.
fn greedy(
    ms: &mut MatchState,
    index: usize, // the STAR/PLUS node; its operand follows it
    mut end: usize,
    mut count: usize,
) -> Option<(usize, usize)> {
    let program = ms.program;
    let text = ms.text;
    let min = match program.nodes.get(index)?.op {
        Op::Plus => 1,
        _ => 0,
    };
    let next = program.next(index)?;

    // When the continuation is a literal, only positions where its first
    // character appears are worth trying.
    let next_char = match &program.nodes.get(next)?.op {
        Op::Exactly(lit) => lit.chars().next(),
        _ => None,
    };

    // Try from most to least (greedy)
    while count >= min {
        if next_char.is_none_or(|c| text[end..].starts_with(c)) {
            let undo = ms.undo.len();
            if !ms.push(Backtrack::GiveBack {
                index,
                end,
                count,
                undo,
            }) {
                return None;
            }
            return Some((next, end));
        }
        if count == 0 {
            break;
        }
        // give back one character
        end -= text[..end].chars().next_back().map_or(0, char::len_utf8);
        count -= 1;
    }
    None
}

/// Count how many consecutive characters from `si` the single-character
/// `operand` matches. Returns the byte offset past the run and the count.
fn repeat(text: &str, si: usize, operand: &Op) -> (usize, usize) {
    let single = match operand {
        Op::Exactly(lit) => lit.chars().next(),
        _ => None,
    };

    let mut end = si;
    let mut count = 0;
    for c in text[si..].chars() {
        let matched = match operand {
            Op::Any => true,
            Op::Exactly(_) => single == Some(c),
            Op::AnyOf(set) => set.contains(c),
            Op::AnyBut(set) => !set.contains(c),
            _ => false,
        };
        if !matched {
            break;
        }
        end += c.len_utf8();
        count += 1;
    }
    (end, count)
}
