use crate::scoring::display_score;
use crate::types::scoring::ScoringResult;

const STRENGTH_LIMIT: usize = 3;

pub fn to_markdown(result: &ScoringResult, title: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("# PRD Quality Score: {title}\n\n"));
    output.push_str(&format!(
        "Overall score: {:.1} / 10.0\n\n",
        display_score(result.weighted_score)
    ));
    output.push_str(&format!("Decision: {}\n\n", result.decision.headline()));

    output.push_str("## Category Breakdown\n\n");
    for category in &result.category_scores {
        output.push_str(&format!(
            "- {}: {:.1} (weight {:.0}%){}\n  {}\n",
            category.category.display_name(),
            category.score,
            category.weight * 100.0,
            if category.below_threshold {
                " [blocker]"
            } else {
                ""
            },
            category.justification
        ));
    }
    output.push('\n');

    let strengths = result.strengths(STRENGTH_LIMIT);
    if !strengths.is_empty() {
        output.push_str("## Strengths\n\n");
        for strength in strengths {
            output.push_str(&format!(
                "- {} ({:.1})\n",
                strength.category.display_name(),
                strength.score
            ));
        }
        output.push('\n');
    }

    output.push_str("## Blockers\n\n");
    if result.blockers.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for blocker in &result.blockers {
            output.push_str(&format!("- {blocker}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Issues to Address\n\n");
    if result.revision_triggers.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for trigger in &result.revision_triggers {
            output.push_str(&format!(
                "- [{}] {}: {}",
                trigger.severity.as_str(),
                trigger.category,
                trigger.description
            ));
            if let Some(owner) = &trigger.recommended_owner {
                output.push_str(&format!(" (owner: {owner})"));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str("## Summary\n\n");
    output.push_str(&result.summary);
    output.push('\n');
    output
}
