use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
   catalog::{TypeCatalog, default_catalog},
   error::{PromptError, Result},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
   /// Ask whether the change affects an issue; when false every commit
   /// gets the `(NOTASK)` prefix and the issue questions are skipped
   pub issue_prompt: bool,

   pub issue_max_len:   usize,
   pub scope_max_len:   usize,
   pub subject_max_len: usize,

   /// Replacement commit type table (identifier → description); file
   /// order is menu order. Empty means the built-in catalog.
   pub types: IndexMap<String, String>,
}

impl Default for PromptConfig {
   fn default() -> Self {
      Self {
         issue_prompt:    true,
         issue_max_len:   20,
         scope_max_len:   20,
         subject_max_len: 60,
         types:           IndexMap::new(),
      }
   }
}

impl PromptConfig {
   /// Load config from default location (~/.config/cz-prompt/config.toml)
   /// Falls back to Default if the file doesn't exist or no home directory
   /// can be determined. `CZ_PROMPT_CONFIG` overrides the path.
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("CZ_PROMPT_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_else(|_| PathBuf::new())
      };

      if config_path.exists() {
         Self::from_file(&config_path)
      } else {
         Ok(Self::default())
      }
   }

   /// Load config from specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path)
         .map_err(|e| PromptError::Other(format!("Failed to read config: {e}")))?;
      toml::from_str(&contents).map_err(|e| PromptError::Other(format!("Failed to parse config: {e}")))
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      // Try HOME first (Unix/Linux/macOS)
      if let Ok(home) = std::env::var("HOME") {
         return Ok(PathBuf::from(home).join(".config/cz-prompt/config.toml"));
      }

      // Try USERPROFILE on Windows
      if let Ok(home) = std::env::var("USERPROFILE") {
         return Ok(PathBuf::from(home).join(".config/cz-prompt/config.toml"));
      }

      Err(PromptError::Other("No home directory found (tried HOME and USERPROFILE)".to_string()))
   }

   /// Catalog from the config override, or the built-in default when the
   /// `types` table is empty
   pub fn catalog(&self) -> TypeCatalog {
      if self.types.is_empty() {
         default_catalog()
      } else {
         TypeCatalog::new(self.types.clone())
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_default_limits() {
      let config = PromptConfig::default();
      assert!(config.issue_prompt);
      assert_eq!(config.issue_max_len, 20);
      assert_eq!(config.scope_max_len, 20);
      assert_eq!(config.subject_max_len, 60);
      assert!(config.types.is_empty());
   }

   #[test]
   fn test_default_catalog_when_types_empty() {
      let config = PromptConfig::default();
      assert!(config.catalog().contains("feat"));
      assert_eq!(config.catalog().len(), 11);
   }

   #[test]
   fn test_parse_partial_config() {
      let config: PromptConfig = toml::from_str("issue_prompt = false\n").unwrap();
      assert!(!config.issue_prompt);
      // untouched fields keep their defaults
      assert_eq!(config.subject_max_len, 60);
   }

   #[test]
   fn test_parse_custom_types_preserves_order() {
      let toml_src = r#"
[types]
wip = "Work in progress"
feat = "A new feature"
hotfix = "Emergency production fix"
"#;
      let config: PromptConfig = toml::from_str(toml_src).unwrap();
      let catalog = config.catalog();
      assert_eq!(catalog.len(), 3);
      assert_eq!(catalog.id_at(0), Some("wip"));
      assert_eq!(catalog.id_at(1), Some("feat"));
      assert_eq!(catalog.id_at(2), Some("hotfix"));
      assert!(!catalog.contains("fix"));
   }
}
