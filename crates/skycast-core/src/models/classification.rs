// ABOUTME: Classification result handed from the classifier to the presentation layer
// ABOUTME: Two-field record of winning category and confidence in [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

use super::Category;

/// Outcome of classifying one observation
///
/// A confidence of `0.0` means no rule fired and the category is only the
/// default; it is not evidence for that category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ClassificationResult {
    /// Winning weather category
    pub category: Category,
    /// Strength of evidence for the winning category, in [0, 1]
    pub confidence: f64,
}

impl ClassificationResult {
    /// Build a result, clamping confidence into [0, 1]
    #[must_use]
    pub fn new(category: Category, confidence: f64) -> Self {
        Self {
            category,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Result reported when no rule fired
    #[must_use]
    pub const fn no_evidence() -> Self {
        Self {
            category: Category::NO_EVIDENCE,
            confidence: 0.0,
        }
    }

    /// Whether any rule contributed to this result
    #[must_use]
    pub fn has_evidence(&self) -> bool {
        self.confidence > 0.0
    }

    /// Confidence expressed as a percentage
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}% confidence)",
            self.category.label(),
            self.confidence_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped_into_unit_range() {
        let high = ClassificationResult::new(Category::Rainy, 1.4);
        assert!((high.confidence - 1.0).abs() < f64::EPSILON);

        let low = ClassificationResult::new(Category::Cloudy, -0.2);
        assert!(low.confidence.abs() < f64::EPSILON);
        assert!(!low.has_evidence());
    }

    #[test]
    fn test_serializes_variant_name_and_confidence() {
        let value = serde_json::to_value(ClassificationResult::new(Category::PartlyCloudy, 0.5))
            .unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({ "category": "PartlyCloudy", "confidence": 0.5 })
        );
    }
}
