//! Final commit message rendering.

use crate::{
   style,
   types::{AnswerSet, IssueLink},
};

/// Prefix used when the commit is not linked to an issue.
pub const NO_TASK: &str = "(NOTASK)";

/// Render the final single-line commit message:
/// `<ISSUE-ID|(NOTASK)> <type>[(<scope>)]: <subject>`
///
/// Deterministic and total; every field already passed its rule when the
/// answer set was built, so no validation happens here.
pub fn format_commit(answers: &AnswerSet) -> String {
   let prefix = match &answers.issue {
      IssueLink::Linked(issue) => issue.as_str(),
      IssueLink::NoTask => NO_TASK,
   };

   let scope_part = answers
      .scope
      .as_ref()
      .map(|s| format!("({s})"))
      .unwrap_or_default();

   format!("{prefix} {}{scope_part}: {}", answers.commit_type, answers.subject)
}

/// The same line with terminal styling, for the confirmation prompt.
/// Identical to [`format_commit`] output when colors are disabled.
pub fn preview(answers: &AnswerSet) -> String {
   let prefix = match &answers.issue {
      IssueLink::Linked(issue) => style::info(issue.as_str()),
      IssueLink::NoTask => style::dim(NO_TASK),
   };

   let scope_part = answers
      .scope
      .as_ref()
      .map(|s| format!("({})", style::scope(s.as_str())))
      .unwrap_or_default();

   format!(
      "{prefix} {}{scope_part}: {}",
      style::commit_type(&answers.commit_type),
      answers.subject
   )
}
