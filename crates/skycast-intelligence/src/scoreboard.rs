// ABOUTME: Per-call category score accumulation and winner selection
// ABOUTME: Immutable score table built by folding rule groups, reduced left-to-right for the winner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use skycast_core::constants::MAX_CONFIDENCE;
use skycast_core::models::{Category, ClassificationResult, Observation};

use crate::config::ClassificationConfig;

/// Accumulated score per category, held in canonical order
///
/// Built fresh for each observation and never shared between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBoard {
    scores: [f64; 4],
}

impl ScoreBoard {
    /// Board with every category at zero
    #[must_use]
    pub const fn empty() -> Self {
        Self { scores: [0.0; 4] }
    }

    /// Score every rule group of `config` against `observation`
    ///
    /// The observation must already be validated; NaN readings simply fail
    /// every comparison.
    #[must_use]
    pub fn tally(config: &ClassificationConfig, observation: &Observation) -> Self {
        config
            .groups()
            .fold(Self::empty(), |board, (category, group)| {
                board.with_score(category, group.score(observation))
            })
    }

    /// Copy of this board with `category` set to `score`
    #[must_use]
    pub fn with_score(mut self, category: Category, score: f64) -> Self {
        self.scores[category.canonical_index()] = score;
        self
    }

    /// Score accumulated by `category`
    #[must_use]
    pub fn score(&self, category: Category) -> f64 {
        self.scores[category.canonical_index()]
    }

    /// `(category, score)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.score(category)))
    }

    /// Winning category and its raw score
    ///
    /// Starts from `(Sunny, 0.0)` and scans in canonical order, replacing the
    /// leader only on a strictly greater score. Among tied categories the
    /// earliest in canonical order therefore wins, and a board with no
    /// positive score yields `(Sunny, 0.0)`.
    #[must_use]
    pub fn leader(&self) -> (Category, f64) {
        self.iter().fold(
            (Category::NO_EVIDENCE, 0.0),
            |(leader, best), (category, score)| {
                if score > best {
                    (category, score)
                } else {
                    (leader, best)
                }
            },
        )
    }

    /// Classification result derived from the leader
    #[must_use]
    pub fn result(&self) -> ClassificationResult {
        let (category, score) = self.leader();
        ClassificationResult::new(category, score.min(MAX_CONFIDENCE))
    }

    /// Categories that accumulated a positive score
    #[must_use]
    pub fn contenders(&self) -> Vec<Category> {
        self.iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(category, _)| category)
            .collect()
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for ScoreBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.as_str(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_defaults_to_sunny_without_evidence() {
        let result = ScoreBoard::empty().result();
        assert_eq!(result.category, Category::Sunny);
        assert!(result.confidence.abs() < f64::EPSILON);
        assert!(!result.has_evidence());
    }

    #[test]
    fn test_earliest_category_wins_ties() {
        let board = ScoreBoard::empty()
            .with_score(Category::Rainy, 0.6)
            .with_score(Category::Cloudy, 0.6)
            .with_score(Category::PartlyCloudy, 0.6);
        assert_eq!(board.leader(), (Category::Rainy, 0.6));
    }

    #[test]
    fn test_later_category_wins_with_strictly_greater_score() {
        let board = ScoreBoard::empty()
            .with_score(Category::Sunny, 0.5)
            .with_score(Category::PartlyCloudy, 0.7);
        assert_eq!(board.leader(), (Category::PartlyCloudy, 0.7));
    }

    #[test]
    fn test_confidence_capped_at_one() {
        let board = ScoreBoard::empty().with_score(Category::Cloudy, 1.3);
        let result = board.result();
        assert_eq!(result.category, Category::Cloudy);
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_in_canonical_order() {
        let board = ScoreBoard::empty().with_score(Category::Rainy, 0.3);
        let json = serde_json::to_string(&board).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"Sunny":0.0,"Rainy":0.3,"Cloudy":0.0,"PartlyCloudy":0.0}"#
        );
    }
}
