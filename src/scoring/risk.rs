use super::Evaluation;
use crate::types::document::Document;

pub fn risk_management_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let risks = &document.risks;
    if risks.is_empty() {
        evaluation.gap(
            "missing_risks",
            "risks",
            "Identify delivery and product risks with mitigations.",
        );
        return evaluation;
    }

    evaluation.credit(4.0, "risks");
    evaluation.coverage(
        risks
            .iter()
            .filter(|risk| !risk.mitigation.trim().is_empty())
            .count(),
        risks.len(),
        4.0,
        "mitigations",
        (
            "unmitigated_risks",
            "Add a mitigation strategy for every risk.",
        ),
    );
    evaluation.check(
        risks.len() >= 2,
        1.0,
        "multiple risks",
        (
            "single_risk",
            "Review technical, adoption and dependency risks beyond the first one.",
        ),
    );
    evaluation.coverage(
        risks
            .iter()
            .filter(|risk| risk.owner.as_deref().is_some_and(|owner| !owner.trim().is_empty()))
            .count(),
        risks.len(),
        1.0,
        "risk owners",
        ("unowned_risks", "Assign an owner to every risk."),
    );

    evaluation
}
