//! Labeled statements shown together at a decision point

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RouletteError};

/// A claim shown to the player, with its ground truth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub text: String,
    pub is_true: bool,
}

impl Statement {
    pub fn new(text: impl Into<String>, is_true: bool) -> Self {
        Self {
            text: text.into(),
            is_true,
        }
    }
}

/// Ordered statements presented together
///
/// Usually two, but consumers index into it rather than assuming a size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementSet(Vec<Statement>);

impl StatementSet {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self(statements)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.0.iter()
    }

    pub fn true_count(&self) -> usize {
        self.0.iter().filter(|s| s.is_true).count()
    }

    pub fn false_count(&self) -> usize {
        self.len() - self.true_count()
    }

    /// Check that the set can drive a decision
    ///
    /// Needs at least two entries with non-blank text, and both a true and
    /// a false label among them.
    pub fn validate(&self) -> Result<()> {
        if self.len() < 2 {
            return Err(RouletteError::MalformedStatements(format!(
                "expected at least 2 statements, got {}",
                self.len()
            )));
        }

        if let Some(index) = self.0.iter().position(|s| s.text.trim().is_empty()) {
            return Err(RouletteError::MalformedStatements(format!(
                "statement {} has no text",
                index
            )));
        }

        if self.true_count() == 0 || self.false_count() == 0 {
            return Err(RouletteError::MalformedStatements(
                "statements must mix true and false labels".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> StatementSet {
        StatementSet::new(vec![
            Statement::new("Real headline", true),
            Statement::new("Fake headline", false),
        ])
    }

    #[test]
    fn test_valid_pair() {
        let set = pair();
        assert!(set.validate().is_ok());
        assert_eq!(set.true_count(), 1);
        assert_eq!(set.false_count(), 1);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(StatementSet::empty().validate().is_err());
    }

    #[test]
    fn test_single_statement_rejected() {
        let set = StatementSet::new(vec![Statement::new("Alone", true)]);
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_all_true_rejected() {
        let set = StatementSet::new(vec![
            Statement::new("One", true),
            Statement::new("Two", true),
        ]);
        assert!(matches!(
            set.validate(),
            Err(RouletteError::MalformedStatements(_))
        ));
    }

    #[test]
    fn test_blank_text_rejected() {
        let set = StatementSet::new(vec![
            Statement::new("   ", true),
            Statement::new("Fake", false),
        ]);
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_larger_mixed_set_accepted() {
        let set = StatementSet::new(vec![
            Statement::new("A", true),
            Statement::new("B", false),
            Statement::new("C", false),
        ]);
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_deserialize_camel_case_array() {
        let json = r#"[{"text": "Real", "isTrue": true}, {"text": "Fake", "isTrue": false}]"#;
        let set: StatementSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get(0).unwrap().is_true);
        assert!(!set.get(1).unwrap().is_true);
    }

    #[test]
    fn test_missing_label_fails_to_parse() {
        let json = r#"[{"text": "Real"}, {"text": "Fake", "isTrue": false}]"#;
        let result: std::result::Result<StatementSet, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
