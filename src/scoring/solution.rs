use super::Evaluation;
use crate::types::document::Document;

pub fn solution_fit_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let Some(solution) = document
        .solution
        .as_ref()
        .filter(|solution| !solution.solution_options.is_empty())
    else {
        evaluation.gap(
            "missing_options",
            "solution options",
            "Document candidate solution options and select one.",
        );
        return evaluation;
    };

    evaluation.credit(3.0, "solution options");
    evaluation.check(
        solution.solution_options.len() >= 2,
        2.0,
        "multiple options",
        (
            "single_option",
            "Compare at least two solution options so the choice is deliberate.",
        ),
    );

    let selected = solution.selected();
    evaluation.check(
        selected.is_some(),
        2.0,
        "selected solution",
        (
            "no_selection",
            "Select one of the documented solution options.",
        ),
    );
    evaluation.check(
        selected.is_some() && !solution.solution_rationale.trim().is_empty(),
        2.0,
        "selection rationale",
        (
            "missing_rationale",
            "Explain why the selected solution was chosen over the alternatives.",
        ),
    );

    let tradeoffs_documented = match selected {
        Some(option) => !option.tradeoffs.is_empty(),
        None => solution
            .solution_options
            .iter()
            .any(|option| !option.tradeoffs.is_empty()),
    };
    evaluation.check(
        tradeoffs_documented,
        1.0,
        "tradeoffs",
        (
            "missing_tradeoffs",
            "Record the tradeoffs of the chosen solution.",
        ),
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{empty_document, well_defined_document};
    use crate::types::document::SolutionOption;

    #[test]
    fn no_solution_scores_zero() {
        assert_eq!(solution_fit_score(&empty_document()).final_score(), 0.0);
    }

    #[test]
    fn second_option_completes_solution_fit() {
        let mut doc = well_defined_document();
        let before = solution_fit_score(&doc).final_score();
        if let Some(solution) = doc.solution.as_mut() {
            solution.solution_options.push(SolutionOption {
                id: "SOL-2".to_string(),
                name: "Magic links".to_string(),
                description: "Passwordless email login".to_string(),
                tradeoffs: vec![],
            });
        }
        let after = solution_fit_score(&doc);
        assert_eq!(before, 8.0);
        assert_eq!(after.final_score(), 10.0);
        assert!(after.gaps.is_empty());
    }

    #[test]
    fn rationale_without_selection_earns_nothing() {
        let mut doc = well_defined_document();
        if let Some(solution) = doc.solution.as_mut() {
            solution.selected_solution_id = "SOL-404".to_string();
        }
        let evaluation = solution_fit_score(&doc);
        assert!(evaluation.gaps.iter().any(|gap| gap.key == "no_selection"));
        assert!(evaluation
            .gaps
            .iter()
            .any(|gap| gap.key == "missing_rationale"));
    }
}
