use super::Evaluation;
use crate::types::document::Document;

pub fn user_understanding_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let personas = &document.personas;
    if personas.is_empty() {
        evaluation.gap(
            "missing_personas",
            "personas",
            "Define at least one target persona with their pain points.",
        );
        return evaluation;
    }

    evaluation.credit(4.0, "personas");
    evaluation.check(
        personas.len() >= 2,
        1.0,
        "multiple personas",
        (
            "single_persona",
            "Consider secondary personas affected by the change.",
        ),
    );
    evaluation.coverage(
        personas
            .iter()
            .filter(|persona| !persona.pain_points.is_empty())
            .count(),
        personas.len(),
        3.0,
        "pain points",
        (
            "missing_pain_points",
            "List concrete pain points for every persona.",
        ),
    );
    evaluation.check(
        personas.iter().any(|persona| persona.is_primary),
        2.0,
        "primary persona",
        (
            "no_primary_persona",
            "Mark the primary persona the product is built for.",
        ),
    );

    evaluation
}
