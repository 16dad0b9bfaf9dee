use super::Evaluation;
use crate::types::document::Document;

pub fn ux_coverage_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let Some(ux) = document.ux_requirements.as_ref() else {
        evaluation.gap(
            "missing_ux",
            "UX requirements",
            "Add UX requirements: design principles and key interaction flows.",
        );
        return evaluation;
    };

    evaluation.check(
        !ux.design_principles.is_empty(),
        3.0,
        "design principles",
        (
            "missing_design_principles",
            "State the design principles guiding the experience.",
        ),
    );
    evaluation.check(
        !ux.interaction_flows.is_empty(),
        4.0,
        "interaction flows",
        (
            "missing_interaction_flows",
            "Describe the primary interaction flows step by step.",
        ),
    );
    evaluation.check(
        ux.accessibility.as_ref().is_some_and(|accessibility| {
            !accessibility.standard.trim().is_empty() || !accessibility.requirements.is_empty()
        }),
        3.0,
        "accessibility",
        (
            "missing_accessibility",
            "Name the accessibility standard the experience must meet.",
        ),
    );

    evaluation
}
