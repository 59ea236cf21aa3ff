use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
   #[error("a value is required")]
   MissingRequiredField,

   #[error("too long: {len} chars (max {max})")]
   FieldTooLong { len: usize, max: usize },

   #[error("Invalid commit type: {0}")]
   InvalidCommitType(String),

   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("Terminal error: {0}")]
   TerminalError(#[from] dialoguer::Error),

   #[error("Clipboard error: {0}")]
   ClipboardError(#[from] arboard::Error),

   #[error("{0}")]
   Other(String),
}

pub type Result<T> = std::result::Result<T, PromptError>;
