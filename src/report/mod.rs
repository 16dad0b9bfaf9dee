pub mod json;
pub mod md;

use crate::error::PrdError;
use crate::types::scoring::ScoringResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &ScoringResult, title: &str, format: OutputFormat) -> Result<String, PrdError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(PrdError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result, title)),
    }
}
