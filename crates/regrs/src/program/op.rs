/// One item of a bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassItem {
    Char(char),
    /// Inclusive range
    Range(char, char),
}

impl ClassItem {
    #[inline(always)]
    pub fn matches(&self, c: char) -> bool {
        match *self {
            ClassItem::Char(ch) => c == ch,
            ClassItem::Range(lo, hi) => lo <= c && c <= hi,
        }
    }
}

/// The members of a `[...]` expression, in pattern order.
/// Negation is not part of the set; it is the difference between
/// [`Op::AnyOf`] and [`Op::AnyBut`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSet {
    items: Vec<ClassItem>,
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ClassItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.items.iter().any(|item| item.matches(c))
    }
}

impl From<Vec<ClassItem>> for CharSet {
    fn from(items: Vec<ClassItem>) -> Self {
        Self { items }
    }
}

impl std::fmt::Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for item in &self.items {
            match item {
                ClassItem::Char(c) => write!(f, "{}", c.escape_debug())?,
                ClassItem::Range(lo, hi) => {
                    write!(f, "{}-{}", lo.escape_debug(), hi.escape_debug())?
                }
            }
        }
        Ok(())
    }
}

/// Program instruction set.
///
/// `Branch`, `Star` and `Plus` take as operand the node stored right
/// after them; every other opcode carries its operand inline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// End of program: the whole trace matched
    End,
    /// Zero-width: start of the searched text
    Bol,
    /// Zero-width: end of the searched text
    Eol,
    /// Any one character
    Any,
    /// One character from the set
    AnyOf(CharSet),
    /// One character not in the set
    AnyBut(CharSet),
    /// Try the operand; on failure continue with the next `Branch`
    Branch,
    /// Jump backwards to close a loop
    Back,
    /// A literal run of characters
    Exactly(String),
    /// Zero-width no-op
    Nothing,
    /// Greedy zero-or-more of the single-character operand
    Star,
    /// Greedy one-or-more of the single-character operand
    Plus,
    /// Start of capture group n
    Open(usize),
    /// End of capture group n
    Close(usize),
}

impl Op {
    /// Size of this instruction in program units.
    pub fn size(&self) -> usize {
        1 + match self {
            Op::Exactly(lit) => lit.chars().count(),
            Op::AnyOf(set) | Op::AnyBut(set) => set.len(),
            _ => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::End => "END",
            Op::Bol => "BOL",
            Op::Eol => "EOL",
            Op::Any => "ANY",
            Op::AnyOf(_) => "ANYOF",
            Op::AnyBut(_) => "ANYBUT",
            Op::Branch => "BRANCH",
            Op::Back => "BACK",
            Op::Exactly(_) => "EXACTLY",
            Op::Nothing => "NOTHING",
            Op::Star => "STAR",
            Op::Plus => "PLUS",
            Op::Open(_) => "OPEN",
            Op::Close(_) => "CLOSE",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::AnyOf(set) | Op::AnyBut(set) => write!(f, "{} [{}]", self.name(), set),
            Op::Exactly(lit) => write!(f, "{} {:?}", self.name(), lit),
            Op::Open(n) | Op::Close(n) => write!(f, "{} {}", self.name(), n),
            _ => f.write_str(self.name()),
        }
    }
}
