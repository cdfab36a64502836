// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Construction-time algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::{
    AhoCorasickMatcher, ApproximateMatcher, BaezaYatesPerlbergMatcher, BoyerMooreMatcher,
    EditCosts, FullDynamicMatcher, KnuthMorrisPrattMatcher, LinearDynamicMatcher, Matcher,
    NaiveMatcher,
};

/// The exact matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExactAlgorithm {
    /// Brute-force scan
    Naive,
    /// Boyer-Moore with bad-character and strong good-suffix rules
    BoyerMoore,
    /// Knuth-Morris-Pratt
    KnuthMorrisPratt,
    /// Aho-Corasick automaton over the whole pattern set
    #[default]
    AhoCorasick,
}

impl ExactAlgorithm {
    /// Every exact algorithm, baseline first.
    pub const ALL: [Self; 4] = [
        Self::Naive,
        Self::BoyerMoore,
        Self::KnuthMorrisPratt,
        Self::AhoCorasick,
    ];

    /// The configuration name of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::BoyerMoore => "boyer_moore",
            Self::KnuthMorrisPratt => "knuth_morris_pratt",
            Self::AhoCorasick => "aho_corasick",
        }
    }

    /// Instantiates the matcher.
    pub fn build(&self) -> Box<dyn Matcher> {
        match self {
            Self::Naive => Box::new(NaiveMatcher::new()),
            Self::BoyerMoore => Box::new(BoyerMooreMatcher::new()),
            Self::KnuthMorrisPratt => Box::new(KnuthMorrisPrattMatcher::new()),
            Self::AhoCorasick => Box::new(AhoCorasickMatcher::new()),
        }
    }
}

impl fmt::Display for ExactAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExactAlgorithm {
    type Err = MatchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| MatchError::UnknownAlgorithm(name.to_string()))
    }
}

/// The approximate matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApproximateAlgorithm {
    /// Whole edit table
    FullDynamic,
    /// Two-row edit table
    LinearDynamic,
    /// Partition-and-verify
    #[default]
    Partitioned,
}

impl ApproximateAlgorithm {
    /// Every approximate algorithm, reference first.
    pub const ALL: [Self; 3] = [Self::FullDynamic, Self::LinearDynamic, Self::Partitioned];

    /// The configuration name of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDynamic => "full_dynamic",
            Self::LinearDynamic => "linear_dynamic",
            Self::Partitioned => "partitioned",
        }
    }

    /// Instantiates the matcher with `costs`.
    pub fn build(&self, costs: EditCosts) -> Box<dyn ApproximateMatcher> {
        match self {
            Self::FullDynamic => Box::new(FullDynamicMatcher::with_costs(costs)),
            Self::LinearDynamic => Box::new(LinearDynamicMatcher::with_costs(costs)),
            Self::Partitioned => Box::new(BaezaYatesPerlbergMatcher::with_costs(costs)),
        }
    }
}

impl fmt::Display for ApproximateAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApproximateAlgorithm {
    type Err = MatchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| MatchError::UnknownAlgorithm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for algorithm in ExactAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<ExactAlgorithm>(), Ok(algorithm));
            assert_eq!(algorithm.build().name(), algorithm.as_str());
        }
        for algorithm in ApproximateAlgorithm::ALL {
            assert_eq!(
                algorithm.to_string().parse::<ApproximateAlgorithm>(),
                Ok(algorithm)
            );
            assert_eq!(
                algorithm.build(EditCosts::default()).name(),
                algorithm.as_str()
            );
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "regex".parse::<ExactAlgorithm>(),
            Err(MatchError::UnknownAlgorithm("regex".to_string()))
        );
        assert!("naive".parse::<ApproximateAlgorithm>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&ExactAlgorithm::KnuthMorrisPratt).unwrap();
        assert_eq!(json, "\"knuth_morris_pratt\"");

        let parsed: ApproximateAlgorithm = serde_json::from_str("\"linear_dynamic\"").unwrap();
        assert_eq!(parsed, ApproximateAlgorithm::LinearDynamic);
        assert_eq!(ApproximateAlgorithm::default(), ApproximateAlgorithm::Partitioned);
    }
}
