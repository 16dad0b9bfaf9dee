use serde::Serialize;
use std::fmt;

pub type Score = f64;

/// Rubric categories in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProblemDefinition,
    SolutionFit,
    UserUnderstanding,
    MarketAwareness,
    ScopeDiscipline,
    RequirementsQuality,
    MetricsQuality,
    UxCoverage,
    TechnicalFeasibility,
    RiskManagement,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::ProblemDefinition,
        Category::SolutionFit,
        Category::UserUnderstanding,
        Category::MarketAwareness,
        Category::ScopeDiscipline,
        Category::RequirementsQuality,
        Category::MetricsQuality,
        Category::UxCoverage,
        Category::TechnicalFeasibility,
        Category::RiskManagement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ProblemDefinition => "problem_definition",
            Self::SolutionFit => "solution_fit",
            Self::UserUnderstanding => "user_understanding",
            Self::MarketAwareness => "market_awareness",
            Self::ScopeDiscipline => "scope_discipline",
            Self::RequirementsQuality => "requirements_quality",
            Self::MetricsQuality => "metrics_quality",
            Self::UxCoverage => "ux_coverage",
            Self::TechnicalFeasibility => "technical_feasibility",
            Self::RiskManagement => "risk_management",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::ProblemDefinition => "Problem Definition",
            Self::SolutionFit => "Solution Fit",
            Self::UserUnderstanding => "User Understanding",
            Self::MarketAwareness => "Market Awareness",
            Self::ScopeDiscipline => "Scope Discipline",
            Self::RequirementsQuality => "Requirements Quality",
            Self::MetricsQuality => "Metrics Quality",
            Self::UxCoverage => "UX Coverage",
            Self::TechnicalFeasibility => "Technical Feasibility",
            Self::RiskManagement => "Risk Management",
        }
    }

    /// Role expected to close gaps in this category.
    pub fn owner(self) -> &'static str {
        match self {
            Self::ProblemDefinition => "Product Manager",
            Self::SolutionFit => "Product Manager",
            Self::UserUnderstanding => "UX Researcher",
            Self::MarketAwareness => "Product Marketing",
            Self::ScopeDiscipline => "Product Manager",
            Self::RequirementsQuality => "Product Manager",
            Self::MetricsQuality => "Data Analyst",
            Self::UxCoverage => "UX Designer",
            Self::TechnicalFeasibility => "Engineering Lead",
            Self::RiskManagement => "Program Manager",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeight {
    pub category: Category,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Score,
    pub weight: f64,
    pub justification: String,
    pub below_threshold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Revise,
    HumanReview,
    Reject,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Revise => "revise",
            Self::HumanReview => "human_review",
            Self::Reject => "reject",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE - Ready for implementation",
            Self::Revise => "REVISE - Minor issues need attention",
            Self::HumanReview => "HUMAN REVIEW - Significant gaps identified",
            Self::Reject => "REJECT - Critical blockers must be resolved",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocker,
    Major,
    Minor,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocker => "blocker",
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevisionTrigger {
    pub issue_id: String,
    pub category: Category,
    pub description: String,
    pub severity: Severity,
    pub recommended_owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub weighted_score: Score,
    pub category_scores: Vec<CategoryScore>,
    pub decision: Decision,
    pub blockers: Vec<String>,
    pub revision_triggers: Vec<RevisionTrigger>,
    pub summary: String,
}

impl ScoringResult {
    #[cfg(test)]
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.category_scores
            .iter()
            .find(|score| score.category == category)
    }

    /// Categories at or above the approval threshold, best first, capped at `limit`.
    pub fn strengths(&self, limit: usize) -> Vec<&CategoryScore> {
        let mut strong = self
            .category_scores
            .iter()
            .filter(|score| score.score >= crate::scoring::THRESHOLD_APPROVE)
            .collect::<Vec<_>>();
        strong.sort_by(|a, b| b.score.total_cmp(&a.score));
        strong.truncate(limit);
        strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_score(category: Category, score: f64) -> CategoryScore {
        CategoryScore {
            category,
            score,
            weight: 0.1,
            justification: String::new(),
            below_threshold: score <= 3.0,
        }
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("velocity"), None);
    }

    #[test]
    fn strengths_are_sorted_and_capped() {
        let result = ScoringResult {
            weighted_score: 7.0,
            category_scores: vec![
                category_score(Category::ProblemDefinition, 8.5),
                category_score(Category::SolutionFit, 9.5),
                category_score(Category::UserUnderstanding, 7.9),
                category_score(Category::MarketAwareness, 10.0),
                category_score(Category::ScopeDiscipline, 8.0),
            ],
            decision: Decision::Revise,
            blockers: vec![],
            revision_triggers: vec![],
            summary: String::new(),
        };

        let strengths = result
            .strengths(3)
            .into_iter()
            .map(|score| score.category)
            .collect::<Vec<_>>();
        assert_eq!(
            strengths,
            vec![
                Category::MarketAwareness,
                Category::SolutionFit,
                Category::ProblemDefinition
            ]
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        let rendered = serde_json::to_string(&Severity::Blocker).expect("severity should serialize");
        assert_eq!(rendered, "\"blocker\"");
        let rendered =
            serde_json::to_string(&Decision::HumanReview).expect("decision should serialize");
        assert_eq!(rendered, "\"human_review\"");
    }
}
