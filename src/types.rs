use std::{fmt, path::PathBuf};

use clap::Parser;
use serde::Serialize;

use crate::{
   catalog::TypeCatalog,
   error::{PromptError, Result},
   rules::{self, FieldRule},
};

/// Type-safe issue reference, stored trimmed and uppercase (`ABC-123`)
#[derive(Clone, PartialEq, Eq)]
pub struct IssueRef(String);

impl IssueRef {
   /// Create a new `IssueRef` with validation
   ///
   /// Input case is free; the stored value is always uppercase.
   pub fn new(s: impl Into<String>, max_len: usize) -> Result<Self> {
      let s = s.into();
      FieldRule::new(true, max_len).validate(&s)?;
      Ok(Self(rules::normalize(&s).to_uppercase()))
   }

   /// Returns inner string slice
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for IssueRef {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

impl fmt::Debug for IssueRef {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_tuple("IssueRef").field(&self.0).finish()
   }
}

impl Serialize for IssueRef {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: serde::Serializer,
   {
      serializer.serialize_str(&self.0)
   }
}

/// Type-safe scope, stored trimmed and lowercase
///
/// Trimmed-to-empty input means "no scope": [`Scope::new`] returns
/// `Ok(None)` rather than an empty scope, so an existing `Scope` is never
/// the empty string.
#[derive(Clone, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
   /// Create a new optional scope with validation
   pub fn new(s: impl Into<String>, max_len: usize) -> Result<Option<Self>> {
      let s = s.into();
      FieldRule::new(false, max_len).validate(&s)?;

      let normalized = rules::normalize(&s).to_lowercase();
      if normalized.is_empty() {
         return Ok(None);
      }

      Ok(Some(Self(normalized)))
   }

   /// Returns inner string slice
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for Scope {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

impl fmt::Debug for Scope {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_tuple("Scope").field(&self.0).finish()
   }
}

impl Serialize for Scope {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: serde::Serializer,
   {
      serializer.serialize_str(&self.0)
   }
}

/// Type-safe commit subject line, stored trimmed
#[derive(Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
   /// Create a new `Subject` with validation
   pub fn new(s: impl Into<String>, max_len: usize) -> Result<Self> {
      let s = s.into();
      FieldRule::new(true, max_len).validate(&s)?;
      Ok(Self(rules::normalize(&s)))
   }

   /// Returns inner string slice
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for Subject {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

impl fmt::Debug for Subject {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_tuple("Subject").field(&self.0).finish()
   }
}

impl Serialize for Subject {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: serde::Serializer,
   {
      serializer.serialize_str(&self.0)
   }
}

/// Whether this commit references a tracked issue
///
/// Replaces a `linked: bool` plus optional reference pair, so "reference
/// present iff linked" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueLink {
   Linked(IssueRef),
   NoTask,
}

impl IssueLink {
   pub const fn is_linked(&self) -> bool {
      matches!(self, Self::Linked(_))
   }
}

/// The fully collected, validated answers for one commit message
///
/// Constructed field-by-field by the prompt session and consumed exactly
/// once by the formatter; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSet {
   pub issue:       IssueLink,
   #[serde(rename = "type")]
   pub commit_type: String,
   pub scope:       Option<Scope>,
   pub subject:     Subject,
}

impl AnswerSet {
   /// Assemble an answer set, checking `commit_type` against the catalog
   pub fn new(
      issue: IssueLink,
      commit_type: impl Into<String>,
      scope: Option<Scope>,
      subject: Subject,
      catalog: &TypeCatalog,
   ) -> Result<Self> {
      let commit_type = commit_type.into();
      if !catalog.contains(&commit_type) {
         return Err(PromptError::InvalidCommitType(format!(
            "'{commit_type}' is not in the type catalog"
         )));
      }

      Ok(Self { issue, commit_type, scope, subject })
   }
}

// CLI Args
#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive conventional commit prompt", long_about = None)]
pub struct Args {
   /// Directory to run git commands in
   #[arg(long, default_value = ".")]
   pub dir: String,

   /// Preview the git commit invocation without running it
   #[arg(long)]
   pub dry_run: bool,

   /// Copy the message to clipboard
   #[arg(long)]
   pub copy: bool,

   /// GPG sign the commit (equivalent to git commit -S)
   #[arg(long, short = 'S')]
   pub sign: bool,

   /// Path to config file (default: ~/.config/cz-prompt/config.toml)
   #[arg(long)]
   pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::catalog::default_catalog;

   #[test]
   fn test_issue_ref_uppercases_and_trims() {
      let issue = IssueRef::new("  abc-123  ", 20).unwrap();
      assert_eq!(issue.as_str(), "ABC-123");
   }

   #[test]
   fn test_issue_ref_already_uppercase_unchanged() {
      assert_eq!(IssueRef::new("ABC-123", 20).unwrap().as_str(), "ABC-123");
   }

   #[test]
   fn test_issue_ref_rejects_blank() {
      let result = IssueRef::new("   ", 20);
      assert!(matches!(result.unwrap_err(), PromptError::MissingRequiredField));
   }

   #[test]
   fn test_issue_ref_rejects_over_limit() {
      let result = IssueRef::new("A".repeat(21), 20);
      assert!(matches!(result.unwrap_err(), PromptError::FieldTooLong { len: 21, max: 20 }));
   }

   #[test]
   fn test_scope_lowercases_and_trims() {
      let scope = Scope::new(" UI ", 20).unwrap().unwrap();
      assert_eq!(scope.as_str(), "ui");
   }

   #[test]
   fn test_scope_empty_is_absent() {
      assert_eq!(Scope::new("", 20).unwrap(), None);
      assert_eq!(Scope::new("   ", 20).unwrap(), None);
   }

   #[test]
   fn test_scope_rejects_over_limit() {
      let result = Scope::new("a".repeat(21), 20);
      assert!(matches!(result.unwrap_err(), PromptError::FieldTooLong { len: 21, max: 20 }));
   }

   #[test]
   fn test_subject_trims_and_keeps_case() {
      let subject = Subject::new("  Add X  ", 60).unwrap();
      assert_eq!(subject.as_str(), "Add X");
   }

   #[test]
   fn test_subject_rejects_blank_and_over_limit() {
      assert!(matches!(Subject::new(" ", 60).unwrap_err(), PromptError::MissingRequiredField));
      assert!(matches!(
         Subject::new("x".repeat(61), 60).unwrap_err(),
         PromptError::FieldTooLong { len: 61, max: 60 }
      ));
   }

   #[test]
   fn test_answer_set_rejects_unknown_type() {
      let catalog = default_catalog();
      let subject = Subject::new("add x", 60).unwrap();
      let result = AnswerSet::new(IssueLink::NoTask, "feature", None, subject, &catalog);
      assert!(matches!(result.unwrap_err(), PromptError::InvalidCommitType(_)));
   }

   #[test]
   fn test_answer_set_accepts_catalog_type() {
      let catalog = default_catalog();
      let subject = Subject::new("add x", 60).unwrap();
      let answers = AnswerSet::new(IssueLink::NoTask, "feat", None, subject, &catalog).unwrap();
      assert_eq!(answers.commit_type, "feat");
      assert!(!answers.issue.is_linked());
   }

   #[test]
   fn test_answer_set_serializes_flat_strings() {
      let catalog = default_catalog();
      let answers = AnswerSet::new(
         IssueLink::Linked(IssueRef::new("abc-1", 20).unwrap()),
         "fix",
         Scope::new("ui", 20).unwrap(),
         Subject::new("correct alignment", 60).unwrap(),
         &catalog,
      )
      .unwrap();

      let json = serde_json::to_value(&answers).unwrap();
      assert_eq!(json["issue"]["Linked"], "ABC-1");
      assert_eq!(json["type"], "fix");
      assert_eq!(json["scope"], "ui");
      assert_eq!(json["subject"], "correct alignment");
   }
}
