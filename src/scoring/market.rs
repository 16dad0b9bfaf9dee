use super::Evaluation;
use crate::types::document::Document;

pub fn market_awareness_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let alternatives = document
        .market
        .as_ref()
        .map(|market| market.alternatives.as_slice())
        .unwrap_or(&[]);
    if alternatives.is_empty() {
        evaluation.gap(
            "missing_alternatives",
            "alternatives",
            "Document competitors, workarounds or the do-nothing alternative.",
        );
        return evaluation;
    }

    evaluation.credit(5.0, "alternatives");
    evaluation.check(
        alternatives.len() >= 2,
        2.0,
        "multiple alternatives",
        (
            "single_alternative",
            "Cover more than one alternative users could choose instead.",
        ),
    );
    evaluation.coverage(
        alternatives
            .iter()
            .filter(|alternative| {
                !alternative.strengths.is_empty() || !alternative.weaknesses.is_empty()
            })
            .count(),
        alternatives.len(),
        1.5,
        "alternative analysis",
        (
            "shallow_alternatives",
            "Note strengths and weaknesses for each alternative.",
        ),
    );
    evaluation.check(
        document
            .market
            .as_ref()
            .is_some_and(|market| !market.differentiation.is_empty()),
        1.5,
        "differentiation",
        (
            "missing_differentiation",
            "State how the product differentiates from the alternatives.",
        ),
    );

    evaluation
}
