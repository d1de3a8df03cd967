// Pattern compiler
// Single left-to-right recursive-descent pass from pattern text to a
// node program, followed by a pass deriving the search hints.
//
// Grammar:
//   reg    := branch                  (top level, ends the program with END)
//           | '(' branch ')'          (group, bracketed by OPEN n / CLOSE n)
//   branch := piece*                  (empty branch compiles to NOTHING)
//   piece  := atom ('*' | '+' | '?')?
//   atom   := literal run | '.' | '[' class ']' | '(' reg ')' | '^' | '$'

mod class;
mod hints;

use crate::program::{Node, Op, Program, SearchHints};
use crate::regex_error::PatternError;
use crate::regex_limits::MAX_CAPTURE_GROUP;
use crate::regex_options::RegexOptions;

/// What the compiler knows about a compiled fragment.
#[derive(Debug, Clone, Copy)]
struct Flags {
    /// Cannot match the empty string
    has_width: bool,
    /// Matches exactly one character; eligible for STAR/PLUS
    simple: bool,
}

const WORST: Flags = Flags {
    has_width: false,
    simple: false,
};

const SIMPLE: Flags = Flags {
    has_width: true,
    simple: true,
};

#[inline]
fn is_mult(c: char) -> bool {
    matches!(c, '*' | '+' | '?')
}

/// Compile `pattern` into a program.
pub(crate) fn compile(pattern: &str, options: &RegexOptions) -> Result<Program, PatternError> {
    let mut compiler = Compiler {
        pat: pattern.chars().collect(),
        pos: 0,
        nodes: Vec::new(),
        groups: 0,
        size: 0,
        max_size: options.max_program_size,
    };
    let (first, _) = compiler.reg(false)?;
    debug_assert_eq!(first, 0);

    let mut program = Program {
        nodes: compiler.nodes,
        hints: SearchHints::default(),
        groups: compiler.groups,
        size: compiler.size,
    };
    program.hints = hints::derive(&program, first);
    Ok(program)
}

struct Compiler {
    pat: Vec<char>,
    pos: usize,
    nodes: Vec<Node>,
    groups: usize,
    size: usize,
    max_size: usize,
}

impl Compiler {
    #[inline]
    fn peek(&self) -> Option<char> {
        self.pat.get(self.pos).copied()
    }

    fn grow(&mut self, op: &Op) -> Result<(), PatternError> {
        self.size += op.size();
        if self.size > self.max_size {
            return Err(PatternError::ProgramTooLarge {
                limit: self.max_size,
            });
        }
        Ok(())
    }

    /// Append a node, returning its index.
    fn emit(&mut self, op: Op) -> Result<usize, PatternError> {
        self.grow(&op)?;
        self.nodes.push(Node::new(op));
        Ok(self.nodes.len() - 1)
    }

    /// Insert a node in front of the operand starting at `at`.
    /// Nothing outside the operand links into it yet, and links inside
    /// it are relative, so shifting it by one is safe.
    fn insert(&mut self, op: Op, at: usize) -> Result<(), PatternError> {
        self.grow(&op)?;
        self.nodes.insert(at, Node::new(op));
        Ok(())
    }

    fn next_of(&self, index: usize) -> Option<usize> {
        let offset = self.nodes[index].next?;
        Some(index.wrapping_add_signed(offset))
    }

    /// Link the last node of the chain starting at `p` to `target`.
    fn tail(&mut self, p: usize, target: usize) {
        let mut scan = p;
        while let Some(next) = self.next_of(scan) {
            scan = next;
        }
        self.nodes[scan].next = Some(target as isize - scan as isize);
    }

    /// `tail` applied to the operand of a BRANCH; no-op on other nodes.
    fn op_tail(&mut self, p: usize, target: usize) {
        if matches!(self.nodes[p].op, Op::Branch) {
            self.tail(p + 1, target);
        }
    }

    /// Top level (`paren == false`) or the inside of a group.
    fn reg(&mut self, paren: bool) -> Result<(usize, Flags), PatternError> {
        let open_at = self.pos.saturating_sub(1);
        let mut group = 0;
        let mut open = None;
        if paren {
            if self.groups >= MAX_CAPTURE_GROUP {
                return Err(PatternError::TooManyCaptureGroups { offset: open_at });
            }
            self.groups += 1;
            group = self.groups;
            open = Some(self.emit(Op::Open(group))?);
        }

        let (first, branch) = self.branch()?;
        let ret = match open {
            Some(open) => {
                self.tail(open, first);
                open
            }
            None => first,
        };

        let ender = self.emit(if paren { Op::Close(group) } else { Op::End })?;
        self.tail(ret, ender);

        if paren {
            if self.peek() != Some(')') {
                return Err(PatternError::UnmatchedParenthesis { offset: open_at });
            }
            self.pos += 1;
        } else if self.pos < self.pat.len() {
            // a top-level branch only stops early at a stray ')'
            return Err(PatternError::UnmatchedParenthesis { offset: self.pos });
        }

        Ok((
            ret,
            Flags {
                has_width: branch.has_width,
                simple: false,
            },
        ))
    }

    /// A sequence of pieces up to `)` or the end of the pattern.
    fn branch(&mut self) -> Result<(usize, Flags), PatternError> {
        let mut flags = WORST;
        let mut first = None;
        let mut chain = None;

        while let Some(c) = self.peek() {
            if c == ')' {
                break;
            }
            let (latest, piece) = self.piece()?;
            flags.has_width |= piece.has_width;
            match chain {
                Some(prev) => self.tail(prev, latest),
                None => first = Some(latest),
            }
            chain = Some(latest);
        }

        let first = match first {
            Some(first) => first,
            None => self.emit(Op::Nothing)?,
        };
        Ok((first, flags))
    }

    /// An atom and its optional quantifier.
    ///
    /// A single-character operand is wrapped in STAR/PLUS. Anything else
    /// loops through BRANCH/BACK: `x*` as `(x&|)`, `x+` as `x(&|)`, where
    /// `&` loops back to x. `x?` is always `(x|)`.
    fn piece(&mut self) -> Result<(usize, Flags), PatternError> {
        let (ret, flags) = self.atom()?;
        let Some(op) = self.peek().filter(|&c| is_mult(c)) else {
            return Ok((ret, flags));
        };

        if !flags.has_width && op != '?' {
            return Err(PatternError::EmptyRepeatOperand { offset: self.pos });
        }
        let piece = if op == '+' {
            Flags {
                has_width: true,
                simple: false,
            }
        } else {
            WORST
        };

        match op {
            '*' if flags.simple => self.insert(Op::Star, ret)?,
            '+' if flags.simple => self.insert(Op::Plus, ret)?,
            '*' => {
                self.insert(Op::Branch, ret)?;
                let back = self.emit(Op::Back)?;
                self.op_tail(ret, back);
                self.op_tail(ret, ret);
                let alt = self.emit(Op::Branch)?;
                self.tail(ret, alt);
                let nothing = self.emit(Op::Nothing)?;
                self.tail(ret, nothing);
            }
            '+' => {
                let again = self.emit(Op::Branch)?;
                self.tail(ret, again);
                let back = self.emit(Op::Back)?;
                self.tail(back, ret);
                let alt = self.emit(Op::Branch)?;
                self.tail(again, alt);
                let nothing = self.emit(Op::Nothing)?;
                self.tail(ret, nothing);
            }
            _ => {
                self.insert(Op::Branch, ret)?;
                let alt = self.emit(Op::Branch)?;
                self.tail(ret, alt);
                let nothing = self.emit(Op::Nothing)?;
                self.tail(ret, nothing);
                self.op_tail(ret, nothing);
            }
        }
        self.pos += 1;

        if self.peek().is_some_and(is_mult) {
            return Err(PatternError::DanglingQuantifier { offset: self.pos });
        }
        Ok((ret, piece))
    }

    fn atom(&mut self) -> Result<(usize, Flags), PatternError> {
        let at = self.pos;
        match self.pat[at] {
            '^' if at == 0 => {
                self.pos += 1;
                Ok((self.emit(Op::Bol)?, WORST))
            }
            '$' if at + 1 == self.pat.len() => {
                self.pos += 1;
                Ok((self.emit(Op::Eol)?, WORST))
            }
            '.' => {
                self.pos += 1;
                Ok((self.emit(Op::Any)?, SIMPLE))
            }
            '[' => {
                let op = class::parse_bracket(&self.pat, &mut self.pos)?;
                Ok((self.emit(op)?, SIMPLE))
            }
            '(' => {
                self.pos += 1;
                self.reg(true)
            }
            '*' | '+' | '?' => Err(PatternError::DanglingQuantifier { offset: at }),
            _ => self.literal_run(),
        }
    }

    /// True if the pattern character at `i` is special in atom position.
    fn is_meta_at(&self, i: usize) -> bool {
        match self.pat[i] {
            '.' | '[' | '(' | ')' | '*' | '+' | '?' => true,
            '^' => i == 0,
            '$' => i + 1 == self.pat.len(),
            _ => false,
        }
    }

    /// A run of ordinary and escaped characters as one EXACTLY.
    /// If a quantifier follows a run longer than one character, the last
    /// character is left for the next atom so the quantifier binds to it.
    fn literal_run(&mut self) -> Result<(usize, Flags), PatternError> {
        let mut lit = String::new();
        let mut count = 0;
        let mut last_at = self.pos;

        while let Some(c) = self.peek() {
            if self.is_meta_at(self.pos) {
                break;
            }
            last_at = self.pos;
            if c == '\\' {
                let Some(&escaped) = self.pat.get(self.pos + 1) else {
                    return Err(PatternError::TrailingBackslash { offset: self.pos });
                };
                lit.push(escaped);
                self.pos += 2;
            } else {
                lit.push(c);
                self.pos += 1;
            }
            count += 1;
        }

        if count > 1 && self.peek().is_some_and(is_mult) {
            lit.pop();
            self.pos = last_at;
            count -= 1;
        }

        let flags = Flags {
            has_width: true,
            simple: count == 1,
        };
        Ok((self.emit(Op::Exactly(lit))?, flags))
    }
}
