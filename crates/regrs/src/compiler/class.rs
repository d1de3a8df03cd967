// Bracket expression parsing
//
// [set]   one character from set
// [^set]  one character not in set
//
// A ']' or '-' right after '[' or '[^' is literal, as is a '-' right
// before the closing ']'. 'x-y' is the inclusive range x..=y. A
// backslash has no special meaning inside brackets.

use crate::program::{CharSet, ClassItem, Op};
use crate::regex_error::PatternError;

/// Parse the bracket expression starting at `pat[*pos]` (which is `[`).
/// On success `*pos` is left just past the closing `]`.
pub(super) fn parse_bracket(pat: &[char], pos: &mut usize) -> Result<Op, PatternError> {
    let open = *pos;
    let mut i = open + 1;

    let negated = pat.get(i) == Some(&'^');
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    if let Some(&c @ (']' | '-')) = pat.get(i) {
        items.push(ClassItem::Char(c));
        i += 1;
    }

    while let Some(&c) = pat.get(i) {
        if c == ']' {
            break;
        }
        if c != '-' {
            items.push(ClassItem::Char(c));
            i += 1;
            continue;
        }
        i += 1;
        match pat.get(i) {
            None | Some(']') => items.push(ClassItem::Char('-')),
            Some(&hi) => {
                // the range starts at the character before the '-'
                let lo = pat[i - 2];
                if lo > hi {
                    return Err(PatternError::InvalidBracketExpression { offset: i - 2 });
                }
                if items.last() == Some(&ClassItem::Char(lo)) {
                    items.pop();
                }
                items.push(ClassItem::Range(lo, hi));
                i += 1;
            }
        }
    }

    if pat.get(i) != Some(&']') {
        return Err(PatternError::InvalidBracketExpression { offset: open });
    }
    *pos = i + 1;

    let set = CharSet::from(items);
    Ok(if negated {
        Op::AnyBut(set)
    } else {
        Op::AnyOf(set)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pattern: &str) -> Result<(Op, usize), PatternError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut pos = 0;
        let op = parse_bracket(&chars, &mut pos)?;
        Ok((op, pos))
    }

    fn set_of(op: &Op) -> &CharSet {
        match op {
            Op::AnyOf(set) | Op::AnyBut(set) => set,
            _ => panic!("not a class: {:?}", op),
        }
    }

    #[test]
    fn test_ranges_and_chars() {
        let (op, end) = parse("[1-9ab]x").unwrap();
        assert!(matches!(op, Op::AnyOf(_)));
        assert_eq!(end, 7);
        assert_eq!(
            set_of(&op).items(),
            &[
                ClassItem::Range('1', '9'),
                ClassItem::Char('a'),
                ClassItem::Char('b'),
            ]
        );
    }

    #[test]
    fn test_negation() {
        let (op, _) = parse("[^1-9ab]").unwrap();
        assert!(matches!(op, Op::AnyBut(_)));
        assert!(set_of(&op).contains('5'));
    }

    #[test]
    fn test_leading_bracket_and_dash_are_literal() {
        let (op, _) = parse("[]a]").unwrap();
        assert!(set_of(&op).contains(']'));
        assert!(set_of(&op).contains('a'));

        let (op, _) = parse("[^-z]").unwrap();
        assert!(matches!(op, Op::AnyBut(_)));
        assert!(set_of(&op).contains('-'));
        assert!(!set_of(&op).contains('y'));

        let (op, _) = parse("[a-]").unwrap();
        assert_eq!(
            set_of(&op).items(),
            &[ClassItem::Char('a'), ClassItem::Char('-')]
        );
    }

    #[test]
    fn test_backslash_is_literal_inside() {
        let (op, end) = parse(r"[\]").unwrap();
        assert_eq!(end, 3);
        assert!(set_of(&op).contains('\\'));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse("[abc").unwrap_err(),
            PatternError::InvalidBracketExpression { offset: 0 }
        );
        assert_eq!(
            parse("[]").unwrap_err(),
            PatternError::InvalidBracketExpression { offset: 0 }
        );
        assert_eq!(
            parse("[z-a]").unwrap_err(),
            PatternError::InvalidBracketExpression { offset: 1 }
        );
    }
}
