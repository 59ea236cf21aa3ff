use std::process::Command;

use crate::{
   error::{PromptError, Result},
   style,
};

/// Get the current branch name, or `None` outside a repository
///
/// Branch lookup only seeds the issue-reference default, so every failure
/// (no git, no repo, detached output empty) degrades to `None`.
pub fn current_branch(dir: &str) -> Option<String> {
   let output = Command::new("git")
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .current_dir(dir)
      .output()
      .ok()?;

   if !output.status.success() {
      return None;
   }

   let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
   if branch.is_empty() { None } else { Some(branch) }
}

/// Extract the first `ABC-123`-shaped token from a branch name
///
/// One or more ASCII uppercase letters, a hyphen, one or more ASCII
/// digits. Used only to pre-fill the issue prompt; never checked against
/// a tracker.
pub fn suggest_issue_ref(branch: &str) -> Option<String> {
   let bytes = branch.as_bytes();
   let mut start = 0;

   while start < bytes.len() {
      if !bytes[start].is_ascii_uppercase() {
         start += 1;
         continue;
      }

      // run of uppercase letters
      let mut end = start;
      while end < bytes.len() && bytes[end].is_ascii_uppercase() {
         end += 1;
      }

      // hyphen followed by at least one digit completes a match
      if end < bytes.len() && bytes[end] == b'-' {
         let mut digits = end + 1;
         while digits < bytes.len() && bytes[digits].is_ascii_digit() {
            digits += 1;
         }
         if digits > end + 1 {
            return Some(branch[start..digits].to_string());
         }
      }

      start = end;
   }

   None
}

/// Execute git commit with the given message
pub fn git_commit(message: &str, dry_run: bool, dir: &str, sign: bool) -> Result<()> {
   if dry_run {
      println!("\n{}", "=".repeat(60));
      println!("DRY RUN - Would execute:");
      if sign {
         println!("git commit -S -m \"{message}\"");
      } else {
         println!("git commit -m \"{message}\"");
      }
      println!("{}", "=".repeat(60));
      return Ok(());
   }

   let mut args = vec!["commit"];
   if sign {
      args.push("-S");
   }
   args.push("-m");
   args.push(message);

   let output = Command::new("git")
      .args(&args)
      .current_dir(dir)
      .output()
      .map_err(|e| PromptError::GitError(format!("Failed to run git commit: {e}")))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      return Err(PromptError::GitError(format!(
         "Git commit failed:\nstderr: {stderr}\nstdout: {stdout}"
      )));
   }

   let stdout = String::from_utf8_lossy(&output.stdout);
   println!("\n{stdout}");
   println!("{}", style::success(&format!("{} Committed", style::icons::SUCCESS)));

   Ok(())
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_suggest_from_feature_branch() {
      assert_eq!(
         suggest_issue_ref("feature/ABC-123-do-thing"),
         Some("ABC-123".to_string())
      );
   }

   #[test]
   fn test_suggest_nothing_on_plain_branch() {
      assert_eq!(suggest_issue_ref("main"), None);
      assert_eq!(suggest_issue_ref("develop"), None);
      assert_eq!(suggest_issue_ref(""), None);
   }

   #[test]
   fn test_suggest_requires_digits_after_hyphen() {
      assert_eq!(suggest_issue_ref("ABC-"), None);
      assert_eq!(suggest_issue_ref("ABC-def"), None);
      assert_eq!(suggest_issue_ref("ABC"), None);
   }

   #[test]
   fn test_suggest_requires_uppercase_prefix() {
      assert_eq!(suggest_issue_ref("abc-123"), None);
      // lowercase run before the match does not block it
      assert_eq!(suggest_issue_ref("fix/JIRA-42"), Some("JIRA-42".to_string()));
   }

   #[test]
   fn test_suggest_returns_first_match() {
      assert_eq!(
         suggest_issue_ref("ABC-123-and-XYZ-999"),
         Some("ABC-123".to_string())
      );
   }

   #[test]
   fn test_suggest_skips_incomplete_candidates() {
      // "AB-CD" fails (no digits), the later "CD-12" run matches
      assert_eq!(suggest_issue_ref("AB-CD-12"), Some("CD-12".to_string()));
   }

   #[test]
   fn test_suggest_match_embedded_in_word() {
      assert_eq!(suggest_issue_ref("hotfixABC-7x"), Some("ABC-7".to_string()));
   }
}
