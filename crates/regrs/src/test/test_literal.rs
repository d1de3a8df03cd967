// Tests for literal patterns
use crate::*;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn span(pattern: &str, text: &str) -> Option<(usize, usize)> {
    let mut re = RegularExpression::new(pattern);
    if !re.find(text) {
        return None;
    }
    Some((re.match_start()?, re.match_end()?))
}

#[test]
fn test_literal_matches_itself() {
    for pattern in ["abc", "hello world", "x.y", "a|b", "{1}", "path/to/file", "déjà vu"] {
        assert_eq!(span(pattern, pattern), Some((0, pattern.len())), "{}", pattern);
    }
}

#[test]
fn test_random_literals_match_themselves() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let len = rng.gen_range(1..40);
        let pattern: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        let mut re = RegularExpression::new(&pattern);
        assert!(re.find(&pattern), "{}", pattern);
        assert_eq!(re.start(0), Some(0));
        assert_eq!(re.end(0), Some(pattern.len()));
        assert_eq!(re.matched_text(0), Some(pattern.as_str()));
    }
}

#[test]
fn test_literal_inside_text() {
    assert_eq!(span("needle", "haystack with a needle in it"), Some((16, 22)));
    assert_eq!(span("needle", "haystack"), None);
    // leftmost occurrence wins
    assert_eq!(span("ab", "xxabxab"), Some((2, 4)));
}

#[test]
fn test_escaped_metacharacters() {
    assert_eq!(span(r"a\.c", "abc a.c"), Some((4, 7)));
    assert_eq!(span(r"\(x\)", "f(x)"), Some((1, 4)));
    assert_eq!(span(r"1\+1", "1+1=2"), Some((0, 3)));
    assert_eq!(span(r"\[", "a[0]"), Some((1, 2)));
    assert_eq!(span(r"\\", r"C:\dir"), Some((2, 3)));
}

#[test]
fn test_dot_matches_one_character() {
    assert_eq!(span("t..t..g", "testing"), Some((0, 7)));
    assert_eq!(span("t..t..g", "let me test again"), Some((7, 14)));
    assert_eq!(span("t..t..g", "toasting"), None);
    // one character, not one byte
    assert_eq!(span("a.c", "aéc"), Some((0, 4)));
}

#[test]
fn test_empty_pattern_matches_at_start() {
    assert_eq!(span("", "abc"), Some((0, 0)));
    assert_eq!(span("", ""), Some((0, 0)));
}
