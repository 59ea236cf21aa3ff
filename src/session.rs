//! The interactive question sequence and its driver.
//!
//! One question at a time, strictly sequential. Field validation failures
//! are re-prompt signals consumed here; they never escape the session.

use crate::{
   catalog::TypeCatalog,
   config::PromptConfig,
   error::{PromptError, Result},
   format,
   prompt::PromptEngine,
   rules, style,
   types::{AnswerSet, IssueLink, IssueRef, Scope, Subject},
};

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
   /// User confirmed; the message was handed to the submission callback.
   Submitted(String),
   /// User declined the final confirmation. Terminal no-op, not a failure.
   Aborted,
}

/// Visibility condition for the issue-reference question: asked only when
/// issue prompting is enabled and the previous answer linked an issue.
pub const fn asks_issue_ref(issue_prompt: bool, issue_linked: bool) -> bool {
   issue_prompt && issue_linked
}

/// Ask one free-text question until the field accepts the answer.
///
/// A rejected answer is echoed with its character-count annotation and
/// the question is asked again.
fn ask_until<E, T>(
   engine: &mut E,
   message: &str,
   default: Option<&str>,
   parse: impl Fn(&str) -> Result<T>,
) -> Result<T>
where
   E: PromptEngine,
{
   loop {
      let raw = engine.input(message, default)?;
      match parse(&raw) {
         Ok(value) => return Ok(value),
         Err(err @ (PromptError::MissingRequiredField | PromptError::FieldTooLong { .. })) => {
            style::warn(&format!("{err}: {}", rules::annotate(&raw)));
         },
         Err(err) => return Err(err),
      }
   }
}

/// Collect a complete, validated answer set from the engine.
pub fn collect_answers<E: PromptEngine>(
   engine: &mut E,
   config: &PromptConfig,
   catalog: &TypeCatalog,
   issue_hint: Option<&str>,
) -> Result<AnswerSet> {
   let issue_linked = if config.issue_prompt {
      engine.confirm("Does this change affect an issue?", true)?
   } else {
      false
   };

   let issue = if asks_issue_ref(config.issue_prompt, issue_linked) {
      let max_len = config.issue_max_len;
      let issue = ask_until(engine, "Issue reference:", issue_hint, |raw| {
         IssueRef::new(raw, max_len)
      })?;
      IssueLink::Linked(issue)
   } else {
      IssueLink::NoTask
   };

   let labels = catalog.menu_labels();
   let index = engine.select("Select the type of change that you're committing:", &labels, 0)?;
   let commit_type = catalog
      .id_at(index)
      .ok_or_else(|| PromptError::Other(format!("type selection out of range: {index}")))?
      .to_string();

   let scope_max = config.scope_max_len;
   let scope = ask_until(
      engine,
      "What is the scope of this change: (press enter to skip)",
      None,
      |raw| Scope::new(raw, scope_max),
   )?;

   let subject_max = config.subject_max_len;
   let subject = ask_until(
      engine,
      "Write a short, imperative tense description of the change:",
      None,
      |raw| Subject::new(raw, subject_max),
   )?;

   AnswerSet::new(issue, commit_type, scope, subject, catalog)
}

/// Preview the collected answers and submit on confirmation.
///
/// The submission callback runs at most once, only on confirmation.
pub fn confirm_and_submit<E, F>(engine: &mut E, answers: &AnswerSet, submit: F) -> Result<Outcome>
where
   E: PromptEngine,
   F: FnOnce(&str) -> Result<()>,
{
   let message = format::format_commit(answers);

   let question = format!("Commit with this message? {}", format::preview(answers));
   if engine.confirm(&question, true)? {
      submit(&message)?;
      Ok(Outcome::Submitted(message))
   } else {
      Ok(Outcome::Aborted)
   }
}

/// Run a full session: collect answers, preview, confirm, submit.
pub fn run<E, F>(
   engine: &mut E,
   config: &PromptConfig,
   catalog: &TypeCatalog,
   issue_hint: Option<&str>,
   submit: F,
) -> Result<Outcome>
where
   E: PromptEngine,
   F: FnOnce(&str) -> Result<()>,
{
   let answers = collect_answers(engine, config, catalog, issue_hint)?;
   confirm_and_submit(engine, &answers, submit)
}
