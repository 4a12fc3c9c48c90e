// ABOUTME: Rule-by-rule explanation of a weather classification
// ABOUTME: Records which rules fired, their weights, and the resulting score board
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use skycast_core::models::{Category, ClassificationResult, Observation, ObservationField};

use crate::config::{ClassificationConfig, Condition};
use crate::scoreboard::ScoreBoard;

/// Outcome of evaluating a single rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleOutcome {
    /// Category the rule contributes to
    pub category: Category,
    /// Observation field the rule reads
    pub metric: ObservationField,
    /// Threshold test
    pub condition: Condition,
    /// Reading the condition was tested against
    pub reading: f64,
    /// Configured weight
    pub weight: f64,
    /// Whether the condition held
    pub fired: bool,
}

/// Classification result together with the evidence behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// Winning category and confidence
    pub result: ClassificationResult,
    /// Score accumulated by every category
    pub scores: ScoreBoard,
    /// Every rule in canonical category order, then rule order
    pub rules: Vec<RuleOutcome>,
}

impl ClassificationReport {
    /// Evaluate every rule of `config` against an already validated observation
    #[must_use]
    pub fn build(config: &ClassificationConfig, observation: &Observation) -> Self {
        let rules = config
            .groups()
            .flat_map(|(category, group)| {
                group.rules.iter().map(move |rule| RuleOutcome {
                    category,
                    metric: rule.metric,
                    condition: rule.condition,
                    reading: observation.get(rule.metric),
                    weight: rule.weight,
                    fired: rule.fires(observation),
                })
            })
            .collect();

        let scores = ScoreBoard::tally(config, observation);

        Self {
            result: scores.result(),
            scores,
            rules,
        }
    }

    /// Rules that fired
    pub fn fired(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules.iter().filter(|outcome| outcome.fired)
    }

    /// Rules that fired for `category`
    pub fn fired_for(&self, category: Category) -> impl Iterator<Item = &RuleOutcome> {
        self.fired()
            .filter(move |outcome| outcome.category == category)
    }
}
