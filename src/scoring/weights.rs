use crate::error::PrdError;
use crate::types::scoring::{Category, CategoryWeight};
use std::collections::HashMap;

const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Category weight table applied during aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    values: [f64; 10],
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            values: [0.20, 0.15, 0.10, 0.10, 0.10, 0.10, 0.10, 0.05, 0.05, 0.05],
        }
    }
}

impl Weights {
    /// Applies per-category overrides on top of the default table.
    ///
    /// Unknown keys, weights outside `(0, 1]` and tables that no longer sum
    /// to 1.0 are rejected rather than normalized.
    pub fn from_overrides(overrides: &HashMap<String, f64>) -> Result<Self, PrdError> {
        let mut unknown = overrides
            .keys()
            .filter(|key| Category::from_key(key).is_none())
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(PrdError::InvalidWeights(format!(
                "unknown key(s): {}",
                unknown.join(", ")
            )));
        }

        let mut weights = Self::default();
        for category in Category::ALL {
            if let Some(weight) = overrides.get(category.key()) {
                if !(*weight > 0.0 && *weight <= 1.0) {
                    return Err(PrdError::InvalidWeights(format!(
                        "{} must be within (0.0, 1.0] (found {})",
                        category.key(),
                        weight
                    )));
                }
                weights.values[category as usize] = *weight;
            }
        }

        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PrdError::InvalidWeights(format!(
                "weights must sum to 1.0 (found {:.3})",
                total
            )));
        }
        Ok(weights)
    }

    pub fn weight(&self, category: Category) -> f64 {
        self.values[category as usize]
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn entries(&self) -> Vec<CategoryWeight> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryWeight {
                category,
                weight: self.weight(category),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = Weights::default().entries();
        assert_eq!(weights.len(), 10);
        let total: f64 = weights.iter().map(|entry| entry.weight).sum();
        assert!((total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn problem_definition_carries_highest_weight() {
        let weights = Weights::default();
        assert_eq!(weights.weight(Category::ProblemDefinition), 0.20);
        assert!(Category::ALL
            .into_iter()
            .all(|category| weights.weight(category) <= 0.20));
    }

    #[test]
    fn overrides_replace_only_named_categories() {
        let overrides = HashMap::from([
            ("ux_coverage".to_string(), 0.10),
            ("market_awareness".to_string(), 0.05),
        ]);
        let weights = Weights::from_overrides(&overrides).expect("overrides should apply");
        assert_eq!(weights.weight(Category::UxCoverage), 0.10);
        assert_eq!(weights.weight(Category::MarketAwareness), 0.05);
        assert_eq!(weights.weight(Category::SolutionFit), 0.15);
    }

    #[test]
    fn overrides_reject_zero_weight() {
        let overrides = HashMap::from([("risk_management".to_string(), 0.0)]);
        let err = Weights::from_overrides(&overrides).expect_err("zero weight should fail");
        assert!(err.to_string().contains("risk_management"));
    }

    #[test]
    fn overrides_reject_unbalanced_table() {
        let overrides = HashMap::from([("solution_fit".to_string(), 0.5)]);
        let err = Weights::from_overrides(&overrides).expect_err("sum check should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }
}
