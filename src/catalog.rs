//! Ordered catalog of recognized commit types.

use indexmap::IndexMap;

/// One entry of the type catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
   pub id:          String,
   pub description: String,
}

/// Immutable identifier → description table. Insertion order is menu
/// order; built once at startup and passed explicitly to consumers.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
   entries: IndexMap<String, String>,
}

impl TypeCatalog {
   pub fn new(entries: IndexMap<String, String>) -> Self {
      Self { entries }
   }

   pub fn len(&self) -> usize {
      self.entries.len()
   }

   pub fn is_empty(&self) -> bool {
      self.entries.is_empty()
   }

   /// Membership check backing the commit-type contract.
   pub fn contains(&self, id: &str) -> bool {
      self.entries.contains_key(id)
   }

   /// Identifier at a menu position (selection index → stored value).
   pub fn id_at(&self, index: usize) -> Option<&str> {
      self.entries.get_index(index).map(|(id, _)| id.as_str())
   }

   /// Entries in catalog order.
   pub fn entries(&self) -> impl Iterator<Item = TypeEntry> + '_ {
      self
         .entries
         .iter()
         .map(|(id, description)| TypeEntry { id: id.clone(), description: description.clone() })
   }

   /// Widest identifier; sets the description column for the menu.
   pub fn column_width(&self) -> usize {
      self
         .entries
         .keys()
         .map(|id| id.chars().count())
         .max()
         .unwrap_or(0)
   }

   /// Menu lines with `<id>:` left-justified so every description starts
   /// at the same column (`column_width + 2`).
   pub fn menu_labels(&self) -> Vec<String> {
      let width = self.column_width() + 2;
      self
         .entries
         .iter()
         .map(|(id, description)| format!("{:<width$}{description}", format!("{id}:")))
         .collect()
   }
}

/// Built-in commit types, in display order.
pub fn default_catalog() -> TypeCatalog {
   TypeCatalog::new(IndexMap::from([
      ("feat".to_string(), "A new feature".to_string()),
      ("fix".to_string(), "A bug fix".to_string()),
      ("docs".to_string(), "Documentation only changes".to_string()),
      (
         "style".to_string(),
         "Changes that do not affect the meaning of the code".to_string(),
      ),
      (
         "refactor".to_string(),
         "A code change that neither fixes a bug nor adds a feature".to_string(),
      ),
      ("perf".to_string(), "A code change that improves performance".to_string()),
      (
         "test".to_string(),
         "Adding missing tests or correcting existing tests".to_string(),
      ),
      (
         "build".to_string(),
         "Changes that affect the build system or external dependencies".to_string(),
      ),
      ("ci".to_string(), "Changes to CI configuration files and scripts".to_string()),
      ("chore".to_string(), "Other changes that don't modify src or test files".to_string()),
      ("revert".to_string(), "Reverts a previous commit".to_string()),
   ]))
}
