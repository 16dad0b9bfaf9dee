use super::Evaluation;
use crate::types::document::Document;

pub fn scope_discipline_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let objectives = &document.objectives;

    evaluation.check(
        !objectives.product_goals.is_empty() || !objectives.business_objectives.is_empty(),
        5.0,
        "goals",
        ("missing_goals", "Define the goals this PRD commits to."),
    );

    let non_goals = document
        .out_of_scope
        .iter()
        .filter(|item| !item.trim().is_empty())
        .count();
    evaluation.check(
        non_goals >= 1,
        4.0,
        "non-goals",
        (
            "missing_non_goals",
            "List explicit non-goals so scope boundaries are clear.",
        ),
    );
    if non_goals >= 1 {
        evaluation.check(
            non_goals >= 2,
            1.0,
            "multiple non-goals",
            (
                "thin_non_goals",
                "Call out more out-of-scope items that stakeholders may assume are included.",
            ),
        );
    }

    evaluation
}
