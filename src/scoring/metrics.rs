use super::Evaluation;
use crate::types::document::Document;

pub fn metrics_quality_score(document: &Document) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let metrics = &document.objectives.success_metrics;
    if metrics.is_empty() {
        evaluation.gap(
            "missing_metrics",
            "success metrics",
            "Define success metrics with target values.",
        );
        return evaluation;
    }

    evaluation.credit(4.0, "success metrics");
    evaluation.coverage(
        metrics
            .iter()
            .filter(|metric| !metric.target.trim().is_empty())
            .count(),
        metrics.len(),
        3.0,
        "targets",
        (
            "metrics_without_targets",
            "Set a target value for every success metric.",
        ),
    );
    evaluation.check(
        metrics.iter().any(|metric| metric.is_north_star),
        2.0,
        "North Star metric",
        (
            "missing_north_star",
            "Designate one metric as the North Star.",
        ),
    );
    evaluation.check(
        metrics.len() >= 2,
        1.0,
        "supporting metrics",
        (
            "single_metric",
            "Add supporting or guardrail metrics alongside the primary one.",
        ),
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{empty_document, metric};

    #[test]
    fn north_star_and_guardrail_reach_full_score() {
        let mut doc = empty_document();
        let mut primary = metric("Weekly active teams", "5000");
        primary.is_north_star = true;
        doc.objectives.success_metrics.push(primary);
        doc.objectives
            .success_metrics
            .push(metric("p95 latency", "< 200ms"));

        let evaluation = metrics_quality_score(&doc);
        assert_eq!(evaluation.final_score(), 10.0);
        assert!(evaluation.gaps.is_empty());
    }

    #[test]
    fn metric_without_target_loses_target_credit() {
        let mut doc = empty_document();
        doc.objectives.success_metrics.push(metric("Signups", ""));
        let evaluation = metrics_quality_score(&doc);
        assert_eq!(evaluation.final_score(), 4.0);
    }
}
