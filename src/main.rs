use arboard::Clipboard;
use clap::Parser;
use config::PromptConfig;
use cz_prompt::*;
use error::Result;
use git::{current_branch, git_commit, suggest_issue_ref};
use prompt::TerminalPrompt;
use session::Outcome;
use types::Args;

/// Load config from args or default
fn load_config_from_args(args: &Args) -> Result<PromptConfig> {
   if let Some(ref config_path) = args.config {
      PromptConfig::from_file(config_path)
   } else {
      PromptConfig::load()
   }
}

/// Copy text to clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
   let mut clipboard = Clipboard::new()?;
   clipboard.set_text(text)?;
   Ok(())
}

fn main() -> Result<()> {
   let args = Args::parse();

   let config = load_config_from_args(&args)?;
   let catalog = config.catalog();

   // A failed branch lookup only drops the suggestion, never errors
   let issue_hint = current_branch(&args.dir).and_then(|branch| suggest_issue_ref(&branch));

   let mut engine = TerminalPrompt;
   let answers = session::collect_answers(&mut engine, &config, &catalog, issue_hint.as_deref())?;

   if std::env::var("CZ_PROMPT_VERBOSE").is_ok() {
      println!("\nAnswer Structure:");
      println!("{}", serde_json::to_string_pretty(&answers)?);
   }

   let outcome = session::confirm_and_submit(&mut engine, &answers, |message| {
      git_commit(message, args.dry_run, &args.dir, args.sign)
   })?;

   match outcome {
      Outcome::Submitted(message) => {
         println!("\n{}", style::boxed_message("Commit message", &message, style::term_width()));

         if args.copy {
            match copy_to_clipboard(&message) {
               Ok(()) => println!("{}", style::success("✓ Copied to clipboard")),
               Err(e) => println!("Note: Failed to copy to clipboard: {e}"),
            }
         }
      },
      Outcome::Aborted => {
         println!("{}", style::error("Aborted ..."));
      },
   }

   Ok(())
}
