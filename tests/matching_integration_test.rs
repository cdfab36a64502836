// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests running the matchers through the public API on
//! natural-language text.

use std::thread;

use mauka_match_lib::matching::{
    ApproximateAlgorithm, ApproximateMatcher, BaezaYatesPerlbergMatcher, EditCosts, ExactAlgorithm,
    LinearDynamicMatcher, Matcher, NaiveMatcher, PatternSet,
};

const TITLE: &str = "and chief executive officer";

const REPORT: &str = "The board met on Monday morning to review the quarterly results. \
Maria Lopez, president and chief executive officer of the company, opened the session \
with a summary of the new distribution agreements signed over the summer months. \
Several directors asked how the former chairman and chief executive oficer had \
negotiated the earlier contracts, and the minutes record a long discussion of pricing. \
After lunch the committee heard from the treasurer, who presented the debt schedule \
and the plan to refinance two of the older notes before the end of the year. \
Analysts later questioned the president and chief executve officer about margins, \
staffing and the timing of the next product launch in the northern region. \
The search for a permanent chair and cheif executive offcer continues this autumn, \
while the interim leader keeps both roles until the shareholders vote in December. \
One visitor was introduced as the founder and chef exec officer of a small supplier, \
and the meeting closed with thanks to the outgoing president and chief executive officer.";

fn exact_ends(text: &str, pattern: &str) -> Vec<usize> {
    // The sample is ASCII, so byte offsets are symbol offsets
    text.match_indices(pattern)
        .map(|(start, found)| start + found.len())
        .collect()
}

#[test]
fn test_partitioned_agrees_with_linear_on_prose() {
    let patterns = PatternSet::single(TITLE).unwrap();
    let linear = LinearDynamicMatcher::new().match_edit_values(&patterns, REPORT, 3);
    let partitioned = BaezaYatesPerlbergMatcher::new().match_edit_values(&patterns, REPORT, 3);

    assert!(!linear.is_empty());
    assert_eq!(partitioned, linear);

    for end in exact_ends(REPORT, TITLE) {
        assert_eq!(partitioned.get(&end), Some(&0), "exact title ending at {end}");
    }
}

#[test]
fn test_budget_controls_near_misses() {
    let patterns = PatternSet::single(TITLE).unwrap();
    let matcher = BaezaYatesPerlbergMatcher::new();

    let exact = NaiveMatcher::new().match_locations(&patterns, REPORT);
    let strict = matcher.match_locations(&patterns, REPORT, 0);
    let loose = matcher.match_locations(&patterns, REPORT, 3);

    assert_eq!(strict, exact);
    assert_eq!(exact.len(), 2);
    assert!(strict.is_subset(&loose));
    assert!(loose.len() > strict.len());
}

#[test]
fn test_all_exact_matchers_agree_on_prose() {
    let patterns = PatternSet::new(["the", "president", "officer", "chief executive"]).unwrap();
    let expected = NaiveMatcher::new().match_locations(&patterns, REPORT);

    for algorithm in ExactAlgorithm::ALL {
        assert_eq!(
            algorithm.build().match_locations(&patterns, REPORT),
            expected,
            "{algorithm}"
        );
    }
}

#[test]
fn test_dynamic_matchers_agree_on_prose() {
    let patterns = PatternSet::new([TITLE, "treasurer", "distribution"]).unwrap();
    let full = ApproximateAlgorithm::FullDynamic
        .build(EditCosts::default())
        .match_edit_values(&patterns, REPORT, 2);
    let linear = ApproximateAlgorithm::LinearDynamic
        .build(EditCosts::default())
        .match_edit_values(&patterns, REPORT, 2);

    assert_eq!(full, linear);
}

#[test]
fn test_matchers_are_shareable_across_threads() {
    let patterns = PatternSet::single(TITLE).unwrap();
    let matcher = BaezaYatesPerlbergMatcher::new();
    let expected = matcher.match_edit_values(&patterns, REPORT, 3);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| matcher.match_edit_values(&patterns, REPORT, 3)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
