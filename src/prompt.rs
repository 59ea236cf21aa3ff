//! Prompt engine seam between the session driver and the terminal.

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

/// Raw question/answer primitives. The session driver owns ordering,
/// validation and re-prompting; an engine only collects input.
pub trait PromptEngine {
   /// Yes/no question with a default answer.
   fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

   /// Free-text question; empty input yields the default when present,
   /// otherwise the empty string.
   fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

   /// Menu selection; returns the chosen index.
   fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Interactive terminal engine backed by dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl PromptEngine for TerminalPrompt {
   fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
      Ok(Confirm::new()
         .with_prompt(message)
         .default(default)
         .interact()?)
   }

   fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
      let mut input = Input::<String>::new()
         .with_prompt(message)
         .allow_empty(true);
      if let Some(default) = default {
         input = input.default(default.to_string());
      }
      Ok(input.interact_text()?)
   }

   fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
      Ok(Select::new()
         .with_prompt(message)
         .items(items)
         .default(default)
         .interact()?)
   }
}
