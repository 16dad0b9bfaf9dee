use crate::types::document::Document;
use serde::Serialize;

const MIN_TITLE_LEN: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, field: &str, message: &str) {
        self.valid = false;
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

/// Structural checks on required metadata plus content warnings.
pub fn validate(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();
    let metadata = &document.metadata;

    if metadata.id.trim().is_empty() {
        result.error("metadata.id", "PRD ID is required");
    }

    let title = metadata.title.trim();
    if title.is_empty() {
        result.error("metadata.title", "Title is required");
    } else if title.chars().count() < MIN_TITLE_LEN {
        result.error("metadata.title", "Title must be at least 5 characters");
    }

    if metadata.status.is_none() {
        result.error("metadata.status", "Status is required");
    }

    let has_problem_statement = !document.executive_summary.problem_statement.trim().is_empty()
        || document
            .problem
            .as_ref()
            .is_some_and(|problem| !problem.statement.trim().is_empty());
    if !has_problem_statement {
        result.warning(
            "executive_summary.problem_statement",
            "Problem statement is empty",
        );
    }

    if document.objectives.business_objectives.is_empty()
        && document.objectives.product_goals.is_empty()
    {
        result.warning("objectives", "No objectives defined");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::{Objective, Person, ProblemDefinition};

    fn document(title: &str) -> Document {
        Document::new(
            "PRD-2026-001",
            title,
            Person {
                name: "Owner".to_string(),
                ..Person::default()
            },
        )
    }

    #[test]
    fn fresh_document_is_valid_with_content_warnings() {
        let result = validate(&document("User Authentication"));
        assert!(result.valid);
        assert!(result.errors.is_empty());
        let fields = result
            .warnings
            .iter()
            .map(|warning| warning.field.as_str())
            .collect::<Vec<_>>();
        assert_eq!(fields, vec!["executive_summary.problem_statement", "objectives"]);
    }

    #[test]
    fn short_title_and_missing_metadata_are_errors() {
        let mut doc = document("Auth");
        doc.metadata.id.clear();
        doc.metadata.status = None;

        let result = validate(&doc);
        assert!(!result.valid);
        let fields = result
            .errors
            .iter()
            .map(|error| error.field.as_str())
            .collect::<Vec<_>>();
        assert_eq!(fields, vec!["metadata.id", "metadata.title", "metadata.status"]);
    }

    #[test]
    fn problem_definition_statement_satisfies_warning() {
        let mut doc = document("User Authentication");
        doc.problem = Some(ProblemDefinition {
            statement: "Users cannot log in securely".to_string(),
            ..ProblemDefinition::default()
        });
        doc.objectives.product_goals.push(Objective {
            id: "PG-1".to_string(),
            description: "Halve password tickets".to_string(),
            rationale: String::new(),
        });

        let result = validate(&doc);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }
}
