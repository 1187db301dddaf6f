//! End-to-end tests for automaton construction and scanning.

use libahocorasick::prelude::*;

/// Dictionary and text from the classic worked example: seven patterns with
/// overlapping prefixes and suffixes scanned over "abccba".
fn abccba_automaton() -> AhoCorasick {
    AhoCorasick::build(["a", "ab", "bab", "bc", "bca", "c", "caa"]).unwrap()
}

#[test]
fn overlapping_dictionary_reports_every_occurrence() {
    let ac = abccba_automaton();
    let matches = ac.scan("abccba");

    assert_eq!(matches.offsets(1), &[0, 5]); // "a"
    assert_eq!(matches.offsets(2), &[1]); // "ab"
    assert_eq!(matches.offsets(3), &[] as &[usize]); // "bab"
    assert_eq!(matches.offsets(4), &[2]); // "bc"
    assert_eq!(matches.offsets(5), &[] as &[usize]); // "bca"
    assert_eq!(matches.offsets(6), &[2, 3]); // "c"
    assert_eq!(matches.offsets(7), &[] as &[usize]); // "caa"
}

#[test]
fn single_character_pattern_matches_every_position() {
    let ac: AhoCorasick = AhoCorasick::build(["x"]).unwrap();
    assert_eq!(ac.scan("xxx").offsets(1), &[0, 1, 2]);
}

#[test]
fn absent_pattern_reports_nothing() {
    let ac: AhoCorasick = AhoCorasick::build(["zzz"]).unwrap();
    let matches = ac.scan("abccba");
    assert_eq!(matches.offsets(1), &[] as &[usize]);
    assert!(matches.is_empty());
}

#[test]
fn rescanning_is_deterministic() {
    let ac = abccba_automaton();
    let first = ac.scan("abccba");
    let second = ac.scan("abccba");
    assert_eq!(first, second);
}

#[test]
fn offsets_are_strictly_increasing_per_pattern() {
    let ac: AhoCorasick = AhoCorasick::build(["aa", "a"]).unwrap();
    let matches = ac.scan("aaaa");

    for (_, offsets) in matches.iter() {
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
    assert_eq!(matches.offsets(1), &[1, 2, 3]);
    assert_eq!(matches.offsets(2), &[0, 1, 2, 3]);
}

#[test]
fn empty_dictionary_scans_anything() {
    let ac: AhoCorasick = AhoCorasick::build(Vec::<String>::new()).unwrap();
    let matches = ac.scan("abccba");
    assert_eq!(matches.pattern_count(), 0);
    assert_eq!(matches.match_count(), 0);
}

#[test]
fn build_aborts_on_empty_entry() {
    let err = AhoCorasick::<char>::build(["fine", ""]).unwrap_err();
    assert_eq!(err, BuildError::EmptyPattern { index: 1 });
}

#[test]
fn paused_scan_resumes_identically() {
    let ac = abccba_automaton();
    let one_shot = ac.scan("abccba");

    let mut scanner = Scanner::new(&ac);
    scanner.feed("abc");
    // Only the state cursor and position carry across the pause.
    assert_eq!(scanner.position(), 3);
    scanner.feed("cba");

    assert_eq!(scanner.finish(), one_shot);
}

#[test]
fn concurrent_scans_share_one_automaton() {
    use std::sync::Arc;
    use std::thread;

    let ac = Arc::new(abccba_automaton());
    let expected = ac.scan("abccba");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ac = Arc::clone(&ac);
            thread::spawn(move || ac.scan("abccba"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn patterns_found_across_different_branches() {
    // "hers" walks the her-branch; "rs" sits on an entirely different
    // branch and must still be reported via the dictionary suffix chain.
    let ac: AhoCorasick = AhoCorasick::build(["hers", "rs", "s"]).unwrap();
    let matches = ac.scan("hers");
    assert_eq!(matches.offsets(1), &[3]);
    assert_eq!(matches.offsets(2), &[3]);
    assert_eq!(matches.offsets(3), &[3]);
}

#[test]
fn unicode_patterns_at_char_granularity() {
    let ac: AhoCorasick = AhoCorasick::build(["über", "ber", "r"]).unwrap();
    let matches = ac.scan("über");
    assert_eq!(matches.offsets(1), &[3]);
    assert_eq!(matches.offsets(2), &[3]);
    assert_eq!(matches.offsets(3), &[3]);
}
