//! Ask an LLM for one real and one fabricated headline
//!
//! The client prefills the reply with `[`, so the model answers with a
//! JSON array; anything it still wraps around the array is ignored. Validation happens in `fetch_statements`, so a
//! response that parses but labels both headlines the same still ends
//! up as the fallback set.

use crate::core::error::{Result, RouletteError};
use crate::llm::client::LlmClient;
use crate::statements::{StatementProvider, StatementSet};

/// Statement provider that generates headlines with an LLM
pub struct HeadlineProvider {
    client: LlmClient,
}

impl HeadlineProvider {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Build from `LLM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(LlmClient::from_env()?))
    }
}

impl StatementProvider for HeadlineProvider {
    async fn fetch(&self) -> Result<StatementSet> {
        let response = self
            .client
            .json_array(HEADLINE_SYSTEM_PROMPT, HEADLINE_USER_PROMPT)
            .await?;
        parse_headlines(&response)
    }
}

/// Parse an LLM response into a statement set
pub fn parse_headlines(response: &str) -> Result<StatementSet> {
    let json_str = extract_json_array(response)?;
    serde_json::from_str(json_str).map_err(|e| {
        RouletteError::MalformedStatements(format!(
            "Failed to parse headlines: {} - Response: {}",
            e, response
        ))
    })
}

/// Extract JSON array from LLM response (handles surrounding text)
fn extract_json_array(response: &str) -> Result<&str> {
    let start = response
        .find('[')
        .ok_or_else(|| RouletteError::MalformedStatements("No JSON array found in response".into()))?;
    let end = response.rfind(']').ok_or_else(|| {
        RouletteError::MalformedStatements("No closing bracket found in response".into())
    })?;
    if end < start {
        return Err(RouletteError::MalformedStatements(
            "Closing bracket precedes opening bracket".into(),
        ));
    }
    Ok(&response[start..=end])
}

const HEADLINE_SYSTEM_PROMPT: &str = r#"You write news headlines for a true-or-false party game.
Produce exactly two short headlines:
- one describing a REAL, verifiable fact or event
- one that sounds plausible but is FALSE

Shuffle their order. Keep each headline under 15 words.

OUTPUT FORMAT (JSON only, no explanation):
[
  {"text": "headline", "isTrue": true},
  {"text": "headline", "isTrue": false}
]
"#;

const HEADLINE_USER_PROMPT: &str = "Generate the next pair of headlines.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_array() {
        let response = r#"[{"text": "Real", "isTrue": true}, {"text": "Fake", "isTrue": false}]"#;
        let set = parse_headlines(response).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().text, "Fake");
    }

    #[test]
    fn test_parse_with_surrounding_text() {
        let response = r#"Here are your headlines:
[
  {"text": "Moon drifts 3.8cm from Earth each year", "isTrue": true},
  {"text": "Eiffel Tower moved to Lyon", "isTrue": false}
]
Enjoy the game!"#;
        let set = parse_headlines(response).unwrap();
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_parse_no_array() {
        assert!(matches!(
            parse_headlines("Sorry, I can't do that."),
            Err(RouletteError::MalformedStatements(_))
        ));
    }

    #[test]
    fn test_parse_missing_label() {
        let response = r#"[{"text": "Real"}, {"text": "Fake", "isTrue": false}]"#;
        assert!(parse_headlines(response).is_err());
    }

    #[test]
    fn test_extract_reversed_brackets() {
        assert!(extract_json_array("] nothing [").is_err());
    }
}
