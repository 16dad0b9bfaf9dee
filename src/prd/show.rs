use crate::error::Result;
use crate::types::document::{Document, MoSCoW, RiskImpact};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

/// Document sections that can be displayed on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Metadata,
    Problem,
    #[value(alias = "users")]
    Personas,
    Market,
    #[value(alias = "goals")]
    Objectives,
    Solution,
    Requirements,
    Ux,
    Technical,
    Risks,
    Decisions,
}

/// Pretty JSON for the whole document or a single section.
pub fn to_json(document: &Document, section: Option<Section>) -> Result<String> {
    let value = match section {
        None => serde_json::to_value(document)?,
        Some(Section::Metadata) => serde_json::to_value(&document.metadata)?,
        Some(Section::Problem) => serde_json::to_value(&document.problem)?,
        Some(Section::Personas) => serde_json::to_value(&document.personas)?,
        Some(Section::Market) => serde_json::to_value(&document.market)?,
        Some(Section::Objectives) => {
            let mut map = Map::new();
            map.insert(
                "objectives".to_string(),
                serde_json::to_value(&document.objectives)?,
            );
            map.insert(
                "out_of_scope".to_string(),
                serde_json::to_value(&document.out_of_scope)?,
            );
            Value::Object(map)
        }
        Some(Section::Solution) => serde_json::to_value(&document.solution)?,
        Some(Section::Requirements) => serde_json::to_value(&document.requirements)?,
        Some(Section::Ux) => serde_json::to_value(&document.ux_requirements)?,
        Some(Section::Technical) => serde_json::to_value(&document.tech_architecture)?,
        Some(Section::Risks) => serde_json::to_value(&document.risks)?,
        Some(Section::Decisions) => serde_json::to_value(&document.decisions)?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

pub fn render_section(document: &Document, section: Section) -> String {
    let mut output = String::new();
    match section {
        Section::Metadata => {
            let metadata = &document.metadata;
            output.push_str("METADATA\n\n");
            output.push_str(&format!("  PRD ID:    {}\n", metadata.id));
            output.push_str(&format!("  Title:     {}\n", metadata.title));
            if let Some(owner) = metadata.authors.first() {
                output.push_str(&format!("  Owner:     {}\n", owner.name));
            }
            output.push_str(&format!(
                "  Status:    {}\n",
                metadata.status.map(|status| status.as_str()).unwrap_or("")
            ));
            output.push_str(&format!("  Version:   {}\n", metadata.version));
            if let Some(created) = metadata.created_at {
                output.push_str(&format!("  Created:   {}\n", created.format("%Y-%m-%d")));
            }
        }
        Section::Problem => {
            output.push_str("PROBLEM DEFINITION\n\n");
            match document.problem.as_ref() {
                Some(problem) => {
                    output.push_str(&format!("  Problem ({}):\n", problem.id));
                    output.push_str(&format!("    Statement: {}\n", problem.statement));
                    if !problem.user_impact.is_empty() {
                        output.push_str(&format!("    Impact:    {}\n", problem.user_impact));
                    }
                    if problem.confidence > 0.0 {
                        output.push_str(&format!(
                            "    Confidence: {:.0}%\n",
                            problem.confidence * 100.0
                        ));
                    }
                    if !problem.evidence.is_empty() {
                        output.push_str("    Evidence:\n");
                        for evidence in &problem.evidence {
                            output.push_str(&format!(
                                "      - [{}] {}\n",
                                label(&evidence.kind),
                                evidence.summary
                            ));
                        }
                    }
                    if !problem.root_causes.is_empty() {
                        output.push_str("\n  Root Causes:\n");
                        for cause in &problem.root_causes {
                            output.push_str(&format!("    - {cause}\n"));
                        }
                    }
                }
                None if !document.executive_summary.problem_statement.is_empty() => {
                    output.push_str(&format!(
                        "  Statement: {}\n",
                        document.executive_summary.problem_statement
                    ));
                }
                None => output.push_str("  No problem defined\n"),
            }
        }
        Section::Personas => {
            output.push_str("PERSONAS\n\n");
            if document.personas.is_empty() {
                output.push_str("  No personas defined\n");
            }
            for persona in &document.personas {
                output.push_str(&format!(
                    "  {}{}\n",
                    persona.name,
                    if persona.is_primary { " (Primary)" } else { "" }
                ));
                output.push_str(&format!("    ID:   {}\n", persona.id));
                output.push_str(&format!("    Role: {}\n", persona.role));
                if !persona.pain_points.is_empty() {
                    output.push_str("    Pain Points:\n");
                    for point in &persona.pain_points {
                        output.push_str(&format!("      - {point}\n"));
                    }
                }
                output.push('\n');
            }
        }
        Section::Market => {
            output.push_str("MARKET\n\n");
            let alternatives = document
                .market
                .as_ref()
                .map(|market| market.alternatives.as_slice())
                .unwrap_or(&[]);
            if alternatives.is_empty() {
                output.push_str("  No alternatives defined\n");
            }
            for alternative in alternatives {
                output.push_str(&format!(
                    "  [{}] {} ({})\n",
                    alternative.id,
                    alternative.name,
                    label(&alternative.kind)
                ));
                if !alternative.description.is_empty() {
                    output.push_str(&format!("    {}\n", alternative.description));
                }
            }
            if let Some(market) = document
                .market
                .as_ref()
                .filter(|market| !market.differentiation.is_empty())
            {
                output.push_str("\n  Differentiation:\n");
                for item in &market.differentiation {
                    output.push_str(&format!("    - {item}\n"));
                }
            }
        }
        Section::Objectives => {
            let objectives = &document.objectives;
            output.push_str("OBJECTIVES\n\n");
            let goals = objectives
                .business_objectives
                .iter()
                .chain(&objectives.product_goals)
                .collect::<Vec<_>>();
            if goals.is_empty() {
                output.push_str("  No objectives defined\n");
            }
            for goal in goals {
                output.push_str(&format!("  [{}] {}\n", goal.id, goal.description));
            }
            if !objectives.success_metrics.is_empty() {
                output.push_str("\n  Success Metrics:\n");
                for metric in &objectives.success_metrics {
                    output.push_str(&format!("    [{}] {}", metric.id, metric.name));
                    if !metric.target.is_empty() {
                        output.push_str(&format!(" (Target: {})", metric.target));
                    }
                    if metric.is_north_star {
                        output.push_str(" [NORTH STAR]");
                    }
                    output.push('\n');
                }
            }
            if !document.out_of_scope.is_empty() {
                output.push_str("\n  Out of Scope:\n");
                for item in &document.out_of_scope {
                    output.push_str(&format!("    - {item}\n"));
                }
            }
        }
        Section::Solution => {
            output.push_str("SOLUTION\n\n");
            let Some(solution) = document.solution.as_ref() else {
                output.push_str("  No solution defined\n");
                return output;
            };
            for option in &solution.solution_options {
                let selected = if option.id == solution.selected_solution_id {
                    " [SELECTED]"
                } else {
                    ""
                };
                output.push_str(&format!("  {}: {}{}\n", option.id, option.name, selected));
                output.push_str(&format!("    {}\n", option.description));
                if !option.tradeoffs.is_empty() {
                    output.push_str("    Tradeoffs:\n");
                    for tradeoff in &option.tradeoffs {
                        output.push_str(&format!("      - {tradeoff}\n"));
                    }
                }
                output.push('\n');
            }
            if !solution.solution_rationale.is_empty() {
                output.push_str(&format!(
                    "  Selection Rationale: {}\n",
                    solution.solution_rationale
                ));
            }
        }
        Section::Requirements => {
            let requirements = &document.requirements;
            output.push_str("REQUIREMENTS\n\n");
            if !requirements.functional.is_empty() {
                output.push_str("  Functional Requirements:\n");
                for requirement in &requirements.functional {
                    output.push_str(&format!(
                        "    [{}] ({}) {}\n",
                        requirement.id,
                        requirement
                            .priority
                            .map(|priority| label(&priority))
                            .unwrap_or_else(|| "unprioritized".to_string()),
                        requirement.description
                    ));
                }
            }
            if !requirements.non_functional.is_empty() {
                output.push_str("\n  Non-Functional Requirements:\n");
                for requirement in &requirements.non_functional {
                    output.push_str(&format!(
                        "    [{}] ({}) {}\n",
                        requirement.id,
                        label(&requirement.category),
                        requirement.description
                    ));
                }
            }
            if requirements.functional.is_empty() && requirements.non_functional.is_empty() {
                output.push_str("  No requirements defined\n");
            }
        }
        Section::Ux => {
            output.push_str("UX REQUIREMENTS\n\n");
            let Some(ux) = document.ux_requirements.as_ref() else {
                output.push_str("  No UX requirements defined\n");
                return output;
            };
            if !ux.design_principles.is_empty() {
                output.push_str("  Design Principles:\n");
                for principle in &ux.design_principles {
                    output.push_str(&format!("    - {principle}\n"));
                }
            }
            if !ux.interaction_flows.is_empty() {
                output.push_str("\n  Interaction Flows:\n");
                for flow in &ux.interaction_flows {
                    output.push_str(&format!("    - {}: {}\n", flow.name, flow.steps.join(" -> ")));
                }
            }
            if let Some(accessibility) = ux.accessibility.as_ref() {
                output.push_str(&format!("\n  Accessibility: {}\n", accessibility.standard));
            }
        }
        Section::Technical => {
            output.push_str("TECHNICAL ARCHITECTURE\n\n");
            let Some(architecture) = document.tech_architecture.as_ref() else {
                output.push_str("  No technical architecture defined\n");
                return output;
            };
            if !architecture.overview.is_empty() {
                output.push_str(&format!("  Overview: {}\n", architecture.overview));
            }
            if !architecture.integrations.is_empty() {
                output.push_str("\n  Integration Points:\n");
                for integration in &architecture.integrations {
                    output.push_str(&format!(
                        "    - {}: {}\n",
                        integration.name, integration.description
                    ));
                }
            }
            if !architecture.technology_stack.is_empty() {
                output.push_str(&format!(
                    "\n  Stack: {}\n",
                    architecture.technology_stack.join(", ")
                ));
            }
        }
        Section::Risks => {
            output.push_str("RISKS\n\n");
            if document.risks.is_empty() {
                output.push_str("  No risks defined\n");
            }
            for risk in &document.risks {
                output.push_str(&format!(
                    "  [{}] ({} impact) {}\n",
                    risk.id,
                    label(&risk.impact),
                    risk.description
                ));
                if !risk.mitigation.is_empty() {
                    output.push_str(&format!("    Mitigation: {}\n", risk.mitigation));
                }
                if let Some(owner) = risk.owner.as_deref() {
                    output.push_str(&format!("    Owner: {owner}\n"));
                }
            }
        }
        Section::Decisions => {
            output.push_str("DECISIONS\n\n");
            let records = document
                .decisions
                .as_ref()
                .map(|decisions| decisions.records.as_slice())
                .unwrap_or(&[]);
            if records.is_empty() {
                output.push_str("  No decisions recorded\n");
            }
            for record in records {
                output.push_str(&format!("  [{}] {}\n", record.id, record.decision));
                if !record.rationale.is_empty() {
                    output.push_str(&format!("    Rationale: {}\n", record.rationale));
                }
                if !record.made_by.is_empty() {
                    output.push_str(&format!("    Made by: {}\n", record.made_by));
                }
                output.push('\n');
            }
        }
    }
    output
}

/// One-screen summary of the document.
pub fn render_overview(document: &Document) -> String {
    let metadata = &document.metadata;
    let mut output = String::new();
    output.push_str(&format!("{}\n\n", metadata.title));
    output.push_str(&format!(
        "ID: {} | Status: {} | Version: {}\n\n",
        metadata.id,
        metadata.status.map(|status| status.as_str()).unwrap_or(""),
        metadata.version
    ));

    output.push_str("PROBLEM\n");
    let statement = document
        .problem
        .as_ref()
        .map(|problem| problem.statement.as_str())
        .filter(|statement| !statement.is_empty())
        .unwrap_or(document.executive_summary.problem_statement.as_str());
    if statement.is_empty() {
        output.push_str("  No problem statement defined\n\n");
    } else {
        output.push_str(&format!("  {statement}\n\n"));
    }

    let objectives = &document.objectives;
    if !objectives.business_objectives.is_empty() || !objectives.product_goals.is_empty() {
        output.push_str("OBJECTIVES\n");
        for goal in objectives
            .business_objectives
            .iter()
            .chain(&objectives.product_goals)
        {
            output.push_str(&format!("  - {}\n", goal.description));
        }
        output.push('\n');
    }

    if let Some(option) = document
        .solution
        .as_ref()
        .and_then(|solution| solution.selected())
    {
        output.push_str("SOLUTION\n");
        output.push_str(&format!("  {}: {}\n\n", option.name, option.description));
    }

    let functional = &document.requirements.functional;
    if !functional.is_empty() {
        let count = |priority: MoSCoW| {
            functional
                .iter()
                .filter(|requirement| requirement.priority == Some(priority))
                .count()
        };
        output.push_str("REQUIREMENTS\n");
        output.push_str(&format!(
            "  {} must, {} should, {} could\n",
            count(MoSCoW::Must),
            count(MoSCoW::Should),
            count(MoSCoW::Could)
        ));
        output.push_str(&format!(
            "  {} NFRs\n\n",
            document.requirements.non_functional.len()
        ));
    }

    if let Some(metric) = objectives
        .success_metrics
        .iter()
        .find(|metric| metric.is_north_star)
        .or_else(|| objectives.success_metrics.first())
    {
        output.push_str("SUCCESS METRICS\n");
        output.push_str(&format!("  {}\n\n", metric.name));
    }

    if !document.risks.is_empty() {
        let high = document
            .risks
            .iter()
            .filter(|risk| matches!(risk.impact, RiskImpact::High | RiskImpact::Critical))
            .count();
        output.push_str("RISKS\n");
        output.push_str(&format!(
            "  {} total, {} high/critical impact\n\n",
            document.risks.len(),
            high
        ));
    }

    output.push_str("Use 'prdtool show --section <name>' for a detailed section view\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{empty_document, well_defined_document};

    #[test]
    fn section_json_contains_only_that_section() {
        let rendered = to_json(&well_defined_document(), Some(Section::Requirements))
            .expect("requirements should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be valid json");
        assert_eq!(value["functional"][0]["id"], "FR-1");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn objectives_json_includes_out_of_scope() {
        let rendered = to_json(&well_defined_document(), Some(Section::Objectives))
            .expect("objectives should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be valid json");
        assert_eq!(value["out_of_scope"][0], "Mobile biometric support");
        assert_eq!(value["objectives"]["product_goals"][0]["id"], "PG-1");
    }

    #[test]
    fn whole_document_json_round_trips() {
        let doc = well_defined_document();
        let rendered = to_json(&doc, None).expect("document should serialize");
        let parsed: Document = serde_json::from_str(&rendered).expect("document should parse");
        assert_eq!(parsed, doc);
    }

    #[test]
    fn problem_section_lists_evidence_and_root_causes() {
        let rendered = render_section(&well_defined_document(), Section::Problem);
        assert!(rendered.starts_with("PROBLEM DEFINITION"));
        assert!(rendered.contains("Confidence: 85%"));
        assert!(rendered.contains("- [analytics] Support ticket analysis"));
        assert!(rendered.contains("- Complex password requirements"));
    }

    #[test]
    fn empty_sections_say_so() {
        let doc = empty_document();
        assert!(render_section(&doc, Section::Personas).contains("No personas defined"));
        assert!(render_section(&doc, Section::Solution).contains("No solution defined"));
        assert!(render_section(&doc, Section::Decisions).contains("No decisions recorded"));
    }

    #[test]
    fn overview_counts_requirements_and_risks() {
        let rendered = render_overview(&well_defined_document());
        assert!(rendered.starts_with("User Authentication"));
        assert!(rendered.contains("ID: PRD-2026-001 | Status: draft | Version: 1.0.0"));
        assert!(rendered.contains("OAuth 2.0: Standard authentication"));
        assert!(rendered.contains("1 must, 0 should, 0 could"));
        assert!(rendered.contains("1 total, 1 high/critical impact"));
    }

    #[test]
    fn section_aliases_parse() {
        assert_eq!(
            Section::from_str("users", true).expect("alias should parse"),
            Section::Personas
        );
        assert_eq!(
            Section::from_str("goals", true).expect("alias should parse"),
            Section::Objectives
        );
    }
}
