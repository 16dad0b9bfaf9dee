pub mod decision;
pub mod market;
pub mod metrics;
pub mod problem;
pub mod requirements;
pub mod risk;
pub mod scope;
pub mod solution;
pub mod technical;
pub mod users;
pub mod ux;
pub mod weights;

use crate::types::document::Document;
use crate::types::scoring::{Category, CategoryScore, Score, ScoringResult};
use weights::Weights;

pub const THRESHOLD_APPROVE: Score = 8.0;
pub const THRESHOLD_REVISE: Score = 6.5;
pub const THRESHOLD_BLOCKER: Score = 3.0;
pub const MAX_SCORE: Score = 10.0;

/// A missing quality signal found by a category evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Gap {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Raw output of one category evaluator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub score: Score,
    pub found: Vec<&'static str>,
    pub gaps: Vec<Gap>,
}

impl Evaluation {
    pub fn credit(&mut self, points: Score, label: &'static str) {
        self.score += points;
        self.found.push(label);
    }

    pub fn gap(&mut self, key: &'static str, label: &'static str, description: &'static str) {
        self.gaps.push(Gap {
            key,
            label,
            description,
        });
    }

    /// Full credit when `present`, otherwise records the gap.
    pub fn check(
        &mut self,
        present: bool,
        points: Score,
        label: &'static str,
        gap: (&'static str, &'static str),
    ) {
        if present {
            self.credit(points, label);
        } else {
            self.gap(gap.0, label, gap.1);
        }
    }

    /// Full credit once any of `total` items carries the signal. Items still
    /// missing it are reported as a gap but never withdraw earned credit, so
    /// adding items cannot lower a score. An empty collection is skipped; its
    /// presence check already reports the gap.
    pub fn coverage(
        &mut self,
        matched: usize,
        total: usize,
        points: Score,
        label: &'static str,
        gap: (&'static str, &'static str),
    ) {
        if total == 0 {
            return;
        }
        if matched > 0 {
            self.credit(points, label);
        }
        if matched < total {
            self.gap(gap.0, label, gap.1);
        }
    }

    pub fn final_score(&self) -> Score {
        round_to(self.score.clamp(0.0, MAX_SCORE), 1)
    }

    pub fn justification(&self) -> String {
        let missing = self.gaps.iter().map(|gap| gap.label).collect::<Vec<_>>();
        match (self.found.is_empty(), missing.is_empty()) {
            (_, true) => format!("All quality signals present: {}.", self.found.join(", ")),
            (true, false) => format!("Missing {}.", missing.join(", ")),
            (false, false) => format!(
                "Found {}; missing {}.",
                self.found.join(", "),
                missing.join(", ")
            ),
        }
    }
}

pub fn evaluate(category: Category, document: &Document) -> Evaluation {
    match category {
        Category::ProblemDefinition => problem::problem_definition_score(document),
        Category::SolutionFit => solution::solution_fit_score(document),
        Category::UserUnderstanding => users::user_understanding_score(document),
        Category::MarketAwareness => market::market_awareness_score(document),
        Category::ScopeDiscipline => scope::scope_discipline_score(document),
        Category::RequirementsQuality => requirements::requirements_quality_score(document),
        Category::MetricsQuality => metrics::metrics_quality_score(document),
        Category::UxCoverage => ux::ux_coverage_score(document),
        Category::TechnicalFeasibility => technical::technical_feasibility_score(document),
        Category::RiskManagement => risk::risk_management_score(document),
    }
}

pub fn score(document: &Document) -> ScoringResult {
    score_with_weights(document, &Weights::default())
}

pub fn score_with_weights(document: &Document, weights: &Weights) -> ScoringResult {
    let evaluations = Category::ALL
        .into_iter()
        .map(|category| (category, evaluate(category, document)))
        .collect::<Vec<_>>();

    let category_scores = evaluations
        .iter()
        .map(|(category, evaluation)| {
            let score = evaluation.final_score();
            tracing::debug!(category = %category, score, "category scored");
            CategoryScore {
                category: *category,
                score,
                weight: weights.weight(*category),
                justification: evaluation.justification(),
                below_threshold: score <= THRESHOLD_BLOCKER,
            }
        })
        .collect::<Vec<_>>();

    let weighted_score = aggregate(&category_scores);
    let outcome = decision::decide(weighted_score, &category_scores, &evaluations);
    let summary = decision::summarize(weighted_score, &outcome, &category_scores);
    tracing::info!(
        weighted_score,
        decision = %outcome.decision,
        blockers = outcome.blockers.len(),
        triggers = outcome.revision_triggers.len(),
        "PRD scored"
    );

    ScoringResult {
        weighted_score,
        category_scores,
        decision: outcome.decision,
        blockers: outcome.blockers,
        revision_triggers: outcome.revision_triggers,
        summary,
    }
}

/// Weighted sum over category scores, clamped to `[0, 10]`. Left unrounded
/// so thresholds apply to the exact value.
pub fn aggregate(category_scores: &[CategoryScore]) -> Score {
    category_scores
        .iter()
        .map(|score| score.score * score.weight)
        .sum::<Score>()
        .clamp(0.0, MAX_SCORE)
}

/// Truncates to one decimal for display, so a score that missed a threshold
/// never prints as if it met it.
pub fn display_score(value: Score) -> Score {
    (value * 10.0 + 1e-9).floor() / 10.0
}

fn round_to(value: Score, decimals: i32) -> Score {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
