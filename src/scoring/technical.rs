use super::Evaluation;
use crate::types::document::Document;

pub fn technical_feasibility_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let Some(architecture) = document.tech_architecture.as_ref() else {
        evaluation.gap(
            "missing_architecture",
            "technical architecture",
            "Outline the technical architecture and integration points.",
        );
        return evaluation;
    };

    evaluation.check(
        !architecture.overview.trim().is_empty(),
        3.0,
        "architecture overview",
        (
            "missing_overview",
            "Summarize the proposed architecture.",
        ),
    );
    evaluation.check(
        !architecture.integrations.is_empty(),
        4.0,
        "integration points",
        (
            "missing_integrations",
            "List the systems this work integrates with.",
        ),
    );
    evaluation.check(
        !architecture.technology_stack.is_empty(),
        3.0,
        "technology stack",
        (
            "missing_stack",
            "Record the technology stack and any new dependencies.",
        ),
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::empty_document;
    use crate::types::document::TechnicalArchitecture;

    #[test]
    fn present_but_empty_architecture_scores_like_absent() {
        let mut doc = empty_document();
        let absent = technical_feasibility_score(&doc).final_score();
        doc.tech_architecture = Some(TechnicalArchitecture::default());
        let empty = technical_feasibility_score(&doc);

        assert_eq!(absent, 0.0);
        assert_eq!(empty.final_score(), 0.0);
        assert_eq!(empty.gaps.len(), 3);
    }
}
