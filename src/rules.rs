//! Field-level validation rules shared by all prompt questions.

use crate::error::{PromptError, Result};

/// Validation policy for one free-text prompt field.
///
/// A rule never mutates the answer; [`normalize`] produces the stored
/// value and [`annotate`] the interactive feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
   pub required:   bool,
   pub max_length: usize,
}

impl FieldRule {
   pub const fn new(required: bool, max_length: usize) -> Self {
      Self { required, max_length }
   }

   /// Check a raw answer against this rule.
   ///
   /// Whitespace-only input counts as empty for the required check.
   pub fn validate(&self, raw: &str) -> Result<()> {
      let len = raw.trim().chars().count();

      if self.required && len == 0 {
         return Err(PromptError::MissingRequiredField);
      }

      if len > self.max_length {
         return Err(PromptError::FieldTooLong { len, max: self.max_length });
      }

      Ok(())
   }
}

/// Trimmed answer value. Case folding is per field, done by the caller.
pub fn normalize(raw: &str) -> String {
   raw.trim().to_string()
}

/// Character-count annotation shown as interactive feedback, never stored:
/// `(<trimmed length>) <original value>`.
pub fn annotate(raw: &str) -> String {
   format!("({}) {raw}", raw.trim().chars().count())
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_validate_required_rejects_whitespace() {
      let rule = FieldRule::new(true, 20);
      let result = rule.validate("   ");
      assert!(result.is_err());
      assert!(matches!(result.unwrap_err(), PromptError::MissingRequiredField));
   }

   #[test]
   fn test_validate_required_rejects_empty() {
      let rule = FieldRule::new(true, 20);
      assert!(matches!(rule.validate("").unwrap_err(), PromptError::MissingRequiredField));
   }

   #[test]
   fn test_validate_optional_accepts_empty() {
      let rule = FieldRule::new(false, 20);
      assert!(rule.validate("").is_ok());
      assert!(rule.validate("  \t ").is_ok());
   }

   #[test]
   fn test_validate_rejects_over_limit() {
      let rule = FieldRule::new(true, 20);
      let result = rule.validate(&"A".repeat(21));
      assert!(result.is_err());
      match result.unwrap_err() {
         PromptError::FieldTooLong { len, max } => {
            assert_eq!(len, 21);
            assert_eq!(max, 20);
         },
         other => panic!("expected FieldTooLong, got {other:?}"),
      }
   }

   #[test]
   fn test_validate_accepts_at_limit() {
      let rule = FieldRule::new(true, 20);
      assert!(rule.validate(&"A".repeat(20)).is_ok());
      assert!(rule.validate("ok").is_ok());
   }

   #[test]
   fn test_validate_measures_trimmed_length() {
      // 20 chars of payload plus surrounding whitespace still fits
      let rule = FieldRule::new(true, 20);
      let padded = format!("  {}  ", "A".repeat(20));
      assert!(rule.validate(&padded).is_ok());
   }

   #[test]
   fn test_normalize_trims() {
      assert_eq!(normalize("  ABC-123  "), "ABC-123");
      assert_eq!(normalize("\tui\n"), "ui");
      assert_eq!(normalize("   "), "");
   }

   #[test]
   fn test_annotate_counts_trimmed_keeps_original() {
      assert_eq!(annotate("  add x "), "(5)   add x ");
      assert_eq!(annotate(""), "(0) ");
      assert_eq!(annotate("fix"), "(3) fix");
   }
}
