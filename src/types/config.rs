use crate::error::PrdError;
use crate::scoring::weights::Weights;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_DOCUMENT_FILE: &str = "PRD.json";
pub const DEFAULT_ID_PREFIX: &str = "PRD";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrdToolConfig {
    pub document: Option<DocumentConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub default_file: Option<String>,
    pub id_prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

impl PrdToolConfig {
    pub fn default_file(&self) -> &str {
        self.document
            .as_ref()
            .and_then(|document| document.default_file.as_deref())
            .unwrap_or(DEFAULT_DOCUMENT_FILE)
    }

    pub fn id_prefix(&self) -> &str {
        self.document
            .as_ref()
            .and_then(|document| document.id_prefix.as_deref())
            .unwrap_or(DEFAULT_ID_PREFIX)
    }

    pub fn has_weight_overrides(&self) -> bool {
        self.scoring
            .as_ref()
            .is_some_and(|scoring| scoring.weights.is_some())
    }

    pub fn weights(&self) -> Result<Weights, PrdError> {
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(overrides) => Weights::from_overrides(overrides),
            None => Ok(Weights::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PrdError> {
        if let Some(prefix) = self
            .document
            .as_ref()
            .and_then(|document| document.id_prefix.as_ref())
        {
            if prefix.trim().is_empty() {
                return Err(PrdError::ConfigParse(
                    "document.id_prefix must be non-empty".to_string(),
                ));
            }
        }
        if let Some(file) = self
            .document
            .as_ref()
            .and_then(|document| document.default_file.as_ref())
        {
            if file.trim().is_empty() {
                return Err(PrdError::ConfigParse(
                    "document.default_file must be non-empty".to_string(),
                ));
            }
        }

        self.weights()
            .map_err(|e| PrdError::ConfigParse(format!("scoring.weights: {e}")))?;
        Ok(())
    }
}
