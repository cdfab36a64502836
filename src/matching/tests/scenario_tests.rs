// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reference scenarios run against every matcher.

use test_case::test_case;

use crate::matching::{
    AhoCorasickMatcher, ApproximateAlgorithm, EditCosts, EditValues, ExactAlgorithm, Match,
    MatchError, MatchLocations, PatternSet,
};

const TEXT: &str = "tpyxtpzxtpyxtpr";

#[test_case(ExactAlgorithm::Naive ; "naive")]
#[test_case(ExactAlgorithm::BoyerMoore ; "boyer moore")]
#[test_case(ExactAlgorithm::KnuthMorrisPratt ; "knuth morris pratt")]
#[test_case(ExactAlgorithm::AhoCorasick ; "aho corasick")]
fn test_single_exact_occurrence(algorithm: ExactAlgorithm) {
    let matcher = algorithm.build();
    let locations = matcher.locate_pattern("tpr", TEXT).unwrap();

    assert_eq!(locations, MatchLocations::from([15]));
    assert_eq!(matcher.matches(&PatternSet::single("tpr").unwrap(), TEXT), 1);
}

#[test_case(ExactAlgorithm::Naive ; "naive")]
#[test_case(ExactAlgorithm::BoyerMoore ; "boyer moore")]
#[test_case(ExactAlgorithm::KnuthMorrisPratt ; "knuth morris pratt")]
#[test_case(ExactAlgorithm::AhoCorasick ; "aho corasick")]
fn test_overlapping_occurrences(algorithm: ExactAlgorithm) {
    let locations = algorithm.build().locate_pattern("aaa", "aaaaa").unwrap();
    assert_eq!(locations, MatchLocations::from([3, 4, 5]));
}

#[test_case(ExactAlgorithm::Naive ; "naive")]
#[test_case(ExactAlgorithm::BoyerMoore ; "boyer moore")]
#[test_case(ExactAlgorithm::KnuthMorrisPratt ; "knuth morris pratt")]
#[test_case(ExactAlgorithm::AhoCorasick ; "aho corasick")]
fn test_pattern_set(algorithm: ExactAlgorithm) {
    let locations = algorithm
        .build()
        .locate(&["py", "tpyx", "yx"], "tpyxtpzxtpyxtprpy")
        .unwrap();
    assert_eq!(locations, MatchLocations::from([3, 4, 11, 12, 17]));
}

#[test_case(ExactAlgorithm::Naive ; "naive")]
#[test_case(ExactAlgorithm::BoyerMoore ; "boyer moore")]
#[test_case(ExactAlgorithm::KnuthMorrisPratt ; "knuth morris pratt")]
#[test_case(ExactAlgorithm::AhoCorasick ; "aho corasick")]
fn test_invalid_arguments(algorithm: ExactAlgorithm) {
    let matcher = algorithm.build();
    assert_eq!(matcher.locate(&[], TEXT), Err(MatchError::EmptyPatternSet));
    assert_eq!(
        matcher.locate(&["tp", ""], TEXT),
        Err(MatchError::EmptyPattern { index: 1 })
    );
    assert_eq!(
        matcher.locate_pattern("", TEXT),
        Err(MatchError::EmptyPattern { index: 0 })
    );
}

#[test_case(ExactAlgorithm::Naive ; "naive")]
#[test_case(ExactAlgorithm::BoyerMoore ; "boyer moore")]
#[test_case(ExactAlgorithm::KnuthMorrisPratt ; "knuth morris pratt")]
#[test_case(ExactAlgorithm::AhoCorasick ; "aho corasick")]
fn test_pattern_longer_than_text(algorithm: ExactAlgorithm) {
    let matcher = algorithm.build();
    assert!(matcher.locate_pattern("tpyxtpzx", "tpyx").unwrap().is_empty());
    assert!(matcher.locate_pattern("a", "").unwrap().is_empty());
}

#[test]
fn test_aho_corasick_pairs() {
    let patterns = PatternSet::new(["py", "tpyx", "yx"]).unwrap();
    let pairs = AhoCorasickMatcher::new().match_pairs(&patterns, "tpyxtpzxtpyxtprpy");

    assert_eq!(pairs.len(), 7);
    for expected in [
        Match::exact(1, 4),
        Match::exact(0, 3),
        Match::exact(2, 4),
        Match::exact(0, 17),
    ] {
        assert!(pairs.contains(&expected), "missing {expected:?}");
    }
}

#[test_case(ApproximateAlgorithm::FullDynamic ; "full dynamic")]
#[test_case(ApproximateAlgorithm::LinearDynamic ; "linear dynamic")]
#[test_case(ApproximateAlgorithm::Partitioned ; "partitioned")]
fn test_single_edit(algorithm: ApproximateAlgorithm) {
    let matcher = algorithm.build(EditCosts::new(99, 100));
    let values = matcher.locate_pattern("tpr", TEXT, 1).unwrap();

    assert_eq!(
        values,
        EditValues::from([(3, 99), (7, 99), (11, 99), (15, 0)])
    );
    assert_eq!(matcher.matches(&PatternSet::single("tpr").unwrap(), TEXT, 1), 4);
}

#[test_case(ApproximateAlgorithm::FullDynamic ; "full dynamic")]
#[test_case(ApproximateAlgorithm::LinearDynamic ; "linear dynamic")]
#[test_case(ApproximateAlgorithm::Partitioned ; "partitioned")]
fn test_patterns_within_budget_are_skipped(algorithm: ApproximateAlgorithm) {
    let matcher = algorithm.build(EditCosts::default());
    assert!(matcher.locate_pattern("tp", TEXT, 2).unwrap().is_empty());
    assert!(matcher.locate_pattern("tp", TEXT, 3).unwrap().is_empty());
    assert_eq!(
        matcher.locate(&["tp", ""], TEXT, 1),
        Err(MatchError::EmptyPattern { index: 1 })
    );
}

#[test_case(ApproximateAlgorithm::FullDynamic ; "full dynamic")]
#[test_case(ApproximateAlgorithm::LinearDynamic ; "linear dynamic")]
#[test_case(ApproximateAlgorithm::Partitioned ; "partitioned")]
fn test_zero_edits(algorithm: ApproximateAlgorithm) {
    let locations = algorithm
        .build(EditCosts::default())
        .match_locations(&PatternSet::single("tpr").unwrap(), TEXT, 0);
    assert_eq!(locations, MatchLocations::from([15]));
}
