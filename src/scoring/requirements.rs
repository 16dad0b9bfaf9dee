use super::Evaluation;
use crate::types::document::Document;

pub fn requirements_quality_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let functional = &document.requirements.functional;
    let non_functional = &document.requirements.non_functional;

    evaluation.check(
        !functional.is_empty(),
        4.0,
        "functional requirements",
        (
            "missing_functional",
            "Capture the functional requirements the solution must satisfy.",
        ),
    );
    evaluation.coverage(
        functional
            .iter()
            .filter(|requirement| requirement.priority.is_some())
            .count(),
        functional.len(),
        2.0,
        "priorities",
        (
            "unprioritized",
            "Assign a MoSCoW priority to every functional requirement.",
        ),
    );
    evaluation.coverage(
        functional
            .iter()
            .filter(|requirement| !requirement.acceptance_criteria.is_empty())
            .count(),
        functional.len(),
        2.0,
        "acceptance criteria",
        (
            "missing_acceptance_criteria",
            "Add testable acceptance criteria to each functional requirement.",
        ),
    );

    evaluation.check(
        !non_functional.is_empty(),
        1.0,
        "non-functional requirements",
        (
            "missing_nfr",
            "Specify non-functional requirements such as performance and security.",
        ),
    );
    evaluation.coverage(
        non_functional
            .iter()
            .filter(|requirement| !requirement.target.trim().is_empty())
            .count(),
        non_functional.len(),
        1.0,
        "measurable NFR targets",
        (
            "nfr_without_targets",
            "Give every non-functional requirement a measurable target.",
        ),
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{empty_document, well_defined_document};
    use crate::types::document::AcceptanceCriterion;

    #[test]
    fn empty_requirements_score_zero() {
        let evaluation = requirements_quality_score(&empty_document());
        assert_eq!(evaluation.final_score(), 0.0);
        assert_eq!(evaluation.gaps.len(), 2);
    }

    #[test]
    fn acceptance_criteria_complete_the_category() {
        let mut doc = well_defined_document();
        assert_eq!(requirements_quality_score(&doc).final_score(), 8.0);

        doc.requirements.functional[0]
            .acceptance_criteria
            .push(AcceptanceCriterion {
                id: "AC-1".to_string(),
                description: "Google sign-in succeeds with a valid account".to_string(),
            });
        assert_eq!(requirements_quality_score(&doc).final_score(), 10.0);
    }
}
