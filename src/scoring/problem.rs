use super::Evaluation;
use crate::types::document::{Document, EvidenceStrength};

const HIGH_CONFIDENCE: f64 = 0.7;
const MODERATE_CONFIDENCE: f64 = 0.5;

pub fn problem_definition_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let problem = document.problem.as_ref();

    let statement = problem
        .map(|problem| problem.statement.trim())
        .filter(|statement| !statement.is_empty())
        .or_else(|| {
            Some(document.executive_summary.problem_statement.trim())
                .filter(|statement| !statement.is_empty())
        });
    evaluation.check(
        statement.is_some(),
        3.0,
        "problem statement",
        (
            "missing_statement",
            "Write a problem statement naming who is affected and what is broken.",
        ),
    );

    evaluation.check(
        problem.is_some_and(|problem| !problem.user_impact.trim().is_empty()),
        2.0,
        "user impact",
        (
            "missing_impact",
            "Quantify the user or business impact of the problem.",
        ),
    );

    let confidence = problem.map(|problem| problem.confidence).unwrap_or(0.0);
    if confidence >= HIGH_CONFIDENCE {
        evaluation.credit(1.0, "high confidence");
    } else {
        if confidence >= MODERATE_CONFIDENCE {
            evaluation.score += 0.5;
        }
        evaluation.gap(
            "low_confidence",
            "high confidence",
            "Raise confidence in the problem framing with validated research.",
        );
    }

    let evidence = problem.map(|problem| problem.evidence.as_slice()).unwrap_or(&[]);
    if evidence.is_empty() {
        evaluation.gap(
            "missing_evidence",
            "supporting evidence",
            "Back the problem with evidence such as interviews, analytics or support tickets.",
        );
    } else {
        evaluation.credit(1.5, "supporting evidence");
        evaluation.check(
            evidence
                .iter()
                .any(|item| item.strength == EvidenceStrength::High),
            0.5,
            "strong evidence",
            (
                "weak_evidence",
                "Add at least one high-strength evidence source.",
            ),
        );
    }

    evaluation.check(
        problem.is_some_and(|problem| !problem.root_causes.is_empty()),
        2.0,
        "root causes",
        (
            "missing_root_causes",
            "Identify the root causes behind the problem.",
        ),
    );

    evaluation
}
