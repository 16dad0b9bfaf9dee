use crate::types::scoring::ScoringResult;

pub fn to_json(result: &ScoringResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
