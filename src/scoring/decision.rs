use super::{display_score, Evaluation, THRESHOLD_APPROVE, THRESHOLD_BLOCKER, THRESHOLD_REVISE};
use crate::types::scoring::{
    Category, CategoryScore, Decision, RevisionTrigger, Score, Severity,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub decision: Decision,
    pub blockers: Vec<String>,
    pub revision_triggers: Vec<RevisionTrigger>,
}

/// Severity for a category score, or `None` once it meets the approval bar.
pub fn severity_for(score: Score) -> Option<Severity> {
    if score <= THRESHOLD_BLOCKER {
        Some(Severity::Blocker)
    } else if score < THRESHOLD_REVISE {
        Some(Severity::Major)
    } else if score < THRESHOLD_APPROVE {
        Some(Severity::Minor)
    } else {
        None
    }
}

pub fn classify(weighted_score: Score, has_blockers: bool) -> Decision {
    if has_blockers {
        Decision::Reject
    } else if weighted_score >= THRESHOLD_APPROVE {
        Decision::Approve
    } else if weighted_score >= THRESHOLD_REVISE {
        Decision::Revise
    } else {
        Decision::HumanReview
    }
}

pub fn decide(
    weighted_score: Score,
    category_scores: &[CategoryScore],
    evaluations: &[(Category, Evaluation)],
) -> Outcome {
    let blockers = category_scores
        .iter()
        .filter(|score| score.below_threshold)
        .map(|score| format!("{}: {}", score.category.display_name(), score.justification))
        .collect::<Vec<_>>();

    let mut revision_triggers = Vec::new();
    for score in category_scores {
        let Some(severity) = severity_for(score.score) else {
            continue;
        };
        let gaps = evaluations
            .iter()
            .find(|(category, _)| *category == score.category)
            .map(|(_, evaluation)| evaluation.gaps.as_slice())
            .unwrap_or(&[]);

        if gaps.is_empty() {
            revision_triggers.push(trigger(
                score.category,
                "below_target",
                &score.justification,
                severity,
            ));
        }
        for gap in gaps {
            revision_triggers.push(trigger(score.category, gap.key, gap.description, severity));
        }
    }

    Outcome {
        decision: classify(weighted_score, !blockers.is_empty()),
        blockers,
        revision_triggers,
    }
}

fn trigger(category: Category, key: &str, description: &str, severity: Severity) -> RevisionTrigger {
    RevisionTrigger {
        issue_id: format!("{}.{}", category.key(), key),
        category,
        description: description.to_string(),
        severity,
        recommended_owner: Some(category.owner().to_string()),
    }
}

/// Highest-severity trigger, preferring heavier categories on ties.
pub fn most_significant<'a>(
    triggers: &'a [RevisionTrigger],
    category_scores: &[CategoryScore],
) -> Option<&'a RevisionTrigger> {
    let weight_of = |category: Category| {
        category_scores
            .iter()
            .find(|score| score.category == category)
            .map(|score| score.weight)
            .unwrap_or(0.0)
    };
    triggers.iter().reduce(|best, candidate| {
        let more_severe = candidate.severity < best.severity;
        let heavier = candidate.severity == best.severity
            && weight_of(candidate.category) > weight_of(best.category);
        if more_severe || heavier {
            candidate
        } else {
            best
        }
    })
}

pub fn summarize(weighted_score: Score, outcome: &Outcome, category_scores: &[CategoryScore]) -> String {
    let issue = most_significant(&outcome.revision_triggers, category_scores).map(|trigger| {
        format!(
            " Most significant issue ({}): {}",
            trigger.category.display_name(),
            trigger.description
        )
    });
    let issue = issue.unwrap_or_default();
    let shown = display_score(weighted_score);

    match outcome.decision {
        Decision::Reject => {
            let names = category_scores
                .iter()
                .filter(|score| score.below_threshold)
                .map(|score| score.category.display_name())
                .collect::<Vec<_>>();
            format!(
                "Rejected with a weighted score of {:.1}/10: {} {} at or below the blocker threshold ({}).{}",
                shown,
                names.len(),
                if names.len() == 1 { "category is" } else { "categories are" },
                names.join(", "),
                issue
            )
        }
        Decision::HumanReview => format!(
            "Needs human review: the weighted score of {:.1}/10 is below the {:.1} revise threshold.{}",
            shown, THRESHOLD_REVISE, issue
        ),
        Decision::Revise => format!(
            "Revise before approval: weighted score {:.1}/10 with {} open issue(s).{}",
            shown,
            outcome.revision_triggers.len(),
            issue
        ),
        Decision::Approve if outcome.revision_triggers.is_empty() => format!(
            "Approved with a weighted score of {:.1}/10 and no open issues.",
            shown
        ),
        Decision::Approve => format!(
            "Approved with a weighted score of {:.1}/10; {} minor issue(s) remain.{}",
            shown,
            outcome.revision_triggers.len(),
            issue
        ),
    }
}
