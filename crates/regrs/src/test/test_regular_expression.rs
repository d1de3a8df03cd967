// Tests for the RegularExpression object
use crate::*;

#[test]
fn test_default_is_invalid() {
    let mut re = RegularExpression::default();
    assert!(!re.is_valid());
    assert!(!re.find("anything"));
    assert_eq!(re.try_find("anything"), Err(MatchError::NoProgram));
    assert_eq!(re.start(0), None);
    assert_eq!(re.matched_text(0), None);
}

#[test]
fn test_same_pattern_same_program() {
    let a = RegularExpression::new("(..p)[a-z]+x*");
    let b = RegularExpression::new("(..p)[a-z]+x*");
    assert!(a.same_program(&b));
    assert_eq!(a, b);

    let c = RegularExpression::new("(..p)[a-z]+x?");
    assert!(!a.same_program(&c));
    assert_ne!(a, c);
}

#[test]
fn test_unmatched_paren_leaves_object_invalid() {
    let mut re = RegularExpression::new("abc");
    assert!(re.is_valid());
    assert_eq!(
        re.compile("("),
        Err(PatternError::UnmatchedParenthesis { offset: 0 })
    );
    assert!(!re.is_valid());
    assert!(re.program().is_none());
    assert!(!re.find("abc"));

    let re = RegularExpression::new("(");
    assert!(!re.is_valid());
}

#[test]
fn test_recompile_discards_old_program() {
    let mut re = RegularExpression::new("a+");
    let text = "xaay";
    assert!(re.find(text));
    assert_eq!(re.matched_text(0), Some("aa"));

    assert!(re.compile("y").is_ok());
    // the old offsets are gone until the next search
    assert_eq!(re.start(0), None);
    assert_eq!(re.matched_text(0), None);
    assert!(re.find(text));
    assert_eq!(re.matched_text(0), Some("y"));

    assert!(re.compile("a)").is_err());
    assert!(!re.is_valid());
    assert!(re.compile("x").is_ok());
    assert!(re.is_valid());
}

#[test]
fn test_failed_search_keeps_last_match() {
    let mut re = RegularExpression::new("b");
    assert!(re.find("abc"));
    assert!(!re.find("xyz"));
    assert_eq!(re.match_start(), Some(1));
    assert_eq!(re.searched_text(), Some("abc"));
}

#[test]
fn test_find_from_keeps_offsets_absolute() {
    let mut re = RegularExpression::new("ab");
    let text = "ab ab ab";
    assert!(re.find_from(text, 1));
    assert_eq!((re.match_start(), re.match_end()), (Some(3), Some(5)));
    assert!(re.find_from(text, 6));
    assert_eq!(re.match_start(), Some(6));
    assert!(!re.find_from(text, 7));
    assert!(!re.find_from(text, 100));
}

#[test]
fn test_invalidate() {
    let mut re = RegularExpression::new("a");
    assert!(re.find("a"));
    re.invalidate();
    assert!(!re.is_valid());
    assert_eq!(re.start(0), None);
    assert_eq!(re.try_find("a"), Err(MatchError::NoProgram));
}

#[test]
fn test_out_of_range_group() {
    let mut re = RegularExpression::new("(a)");
    assert!(re.find("a"));
    assert_eq!(re.start(10), None);
    assert_eq!(re.end(usize::MAX), None);
    assert_eq!(re.matched_text(NSUBEXP), None);
}

#[test]
fn test_deep_equal() {
    let text = String::from("one two");
    let other = String::from("one two");

    let mut a = RegularExpression::new("t[a-z]+");
    let mut b = RegularExpression::new("t[a-z]+");
    assert!(a.deep_equal(&b));

    assert!(a.find(&text));
    assert!(!a.deep_equal(&b));
    assert!(a.same_program(&b));

    assert!(b.find(&other));
    // same offsets, different text
    assert!(!a.deep_equal(&b));

    assert!(b.find(&text));
    assert!(a.deep_equal(&b));

    let c = a.clone();
    assert!(c.deep_equal(&a));
}

#[test]
fn test_clone_and_shared_program() {
    let program: Program = "[0-9]+".parse().unwrap();
    let mut a = RegularExpression::from_program(program.clone());
    let mut b = RegularExpression::from_program(program);
    assert!(a.find("a1"));
    assert!(b.find("bb22"));
    assert_eq!(a.matched_text(0), Some("1"));
    assert_eq!(b.matched_text(0), Some("22"));
    assert_eq!(a, b);
}

#[test]
fn test_program_shared_across_threads() {
    let program = std::sync::Arc::new(Program::compile("(x+)y").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let program = program.clone();
            std::thread::spawn(move || {
                let text = format!("{}y", "x".repeat(i + 1));
                let mut re = RegularExpression::from_program((*program).clone());
                assert!(re.find(&text));
                re.end(1)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i + 1));
    }
}

#[test]
fn test_too_complex_is_reported() {
    let options = RegexOptions {
        max_match_depth: 30,
        ..RegexOptions::default()
    };
    let mut re = RegularExpression::with_options(options);
    assert!(re.compile("(ab)*c").is_ok());
    let text = "ab".repeat(50) + "c";
    assert_eq!(
        re.try_find(&text),
        Err(MatchError::TooComplex { depth: 30 })
    );
    assert!(!re.find(&text));
    assert_eq!(re.match_start(), None);
}

#[test]
fn test_long_group_loops_match() {
    let text = "ab".repeat(5000) + "c";
    let mut re = RegularExpression::new("(ab)*c");
    assert!(re.find(&text));
    assert_eq!(re.match_start(), Some(0));
    assert_eq!(re.match_end(), Some(10001));
    assert_eq!(re.start(1), Some(9998));
    assert_eq!(re.matched_text(1), Some("ab"));

    let text = "x".repeat(5000) + "y";
    let mut re = RegularExpression::new("(x)+y");
    assert_eq!(re.try_find(&text), Ok(true));
    assert_eq!(re.match_end(), Some(5001));
    assert_eq!(re.start(1), Some(4999));
    assert_eq!(re.end(1), Some(5000));

    // a file-sized run, with the match found past a failed attempt
    let text = format!("{}-{}y", "x".repeat(1000), "x".repeat(200_000));
    let mut re = RegularExpression::new("(x)+y");
    assert!(re.find(&text));
    assert_eq!(re.match_start(), Some(1001));
    assert_eq!(re.match_end(), Some(text.len()));
}

#[test]
fn test_program_size_limit_is_an_error() {
    let options = RegexOptions {
        max_program_size: 10,
        ..RegexOptions::default()
    };
    let mut re = RegularExpression::with_options(options);
    assert_eq!(
        re.compile("a long literal pattern"),
        Err(PatternError::ProgramTooLarge { limit: 10 })
    );
    assert!(!re.is_valid());
    assert!(re.compile("short").is_ok());
}

#[test]
fn test_submatches_iter() {
    let mut re = RegularExpression::new("(a)(x)?(b)");
    assert!(re.find("zab"));
    let slots: Vec<_> = re.submatches().unwrap().iter().collect();
    assert_eq!(slots, vec![(0, 1, 3), (1, 1, 2), (3, 2, 3)]);
}
