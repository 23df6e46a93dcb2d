//! # Catalog Feature
//!
//! The fixed, ordered list of abbreviations every digest and quiz draws from.
//! Order is significant: digest batch `k` is the slice `[5k, 5k + 5)`.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Optional YAML override file with validation
//! - 1.0.0: Built-in UK fintech list

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of catalog entries delivered per digest and drawn per quiz
pub const BATCH_SIZE: usize = 5;

/// A single (code, expansion) pair
///
/// Serialized as a two-element array (`["FCA", "Financial Conduct Authority"]`)
/// so stored quizzes stay readable next to hand-edited store files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Abbreviation {
    pub code: String,
    pub expansion: String,
}

impl Abbreviation {
    pub fn new(code: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            expansion: expansion.into(),
        }
    }
}

impl From<(String, String)> for Abbreviation {
    fn from((code, expansion): (String, String)) -> Self {
        Self { code, expansion }
    }
}

impl From<Abbreviation> for (String, String) {
    fn from(entry: Abbreviation) -> Self {
        (entry.code, entry.expansion)
    }
}

const BUILT_IN: &[(&str, &str)] = &[
    ("FCA", "Financial Conduct Authority"),
    ("PSD2", "Revised Payment Services Directive"),
    ("API", "Application Programming Interface"),
    ("KYC", "Know Your Customer"),
    ("AML", "Anti-Money Laundering"),
    ("CMA", "Competition and Markets Authority"),
    ("BACS", "Bankers’ Automated Clearing Services"),
    ("CHAPS", "Clearing House Automated Payment System"),
    ("FOS", "Financial Ombudsman Service"),
    ("FPC", "Financial Policy Committee"),
];

/// Shape of the optional YAML override file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    abbreviations: Vec<Abbreviation>,
}

/// Immutable, ordered abbreviation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Abbreviation>,
}

impl Catalog {
    /// Build a catalog from entries, rejecting lists a quiz could not be drawn from
    pub fn new(entries: Vec<Abbreviation>) -> Result<Self> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The UK fintech list the bot ships with
    pub fn built_in() -> Self {
        Self {
            entries: BUILT_IN
                .iter()
                .map(|(code, expansion)| Abbreviation::new(*code, *expansion))
                .collect(),
        }
    }

    /// Load a catalog from a YAML file
    ///
    /// ```yaml
    /// abbreviations:
    ///   - [FCA, Financial Conduct Authority]
    ///   - [KYC, Know Your Customer]
    /// ```
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate YAML catalog contents
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(contents)?;
        Self::new(file.abbreviations)
    }

    fn validate(&self) -> Result<()> {
        if self.entries.len() < BATCH_SIZE {
            return Err(anyhow::anyhow!(
                "Catalog needs at least {} entries to draw a quiz, found {}",
                BATCH_SIZE,
                self.entries.len()
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.code.trim().is_empty() || entry.expansion.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "Catalog entry has an empty code or expansion: {:?}",
                    entry
                ));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(anyhow::anyhow!("Duplicate catalog code: {}", entry.code));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[Abbreviation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest batch for a day pointer, clipped to catalog bounds
    ///
    /// Returns `None` once the user has exhausted the catalog.
    pub fn batch(&self, day: u32) -> Option<&[Abbreviation]> {
        let start = (day as usize).checked_mul(BATCH_SIZE)?;
        if start >= self.entries.len() {
            return None;
        }
        let end = (start + BATCH_SIZE).min(self.entries.len());
        Some(&self.entries[start..end])
    }

    /// Total number of non-empty digest batches (`ceil(len / 5)`)
    pub fn batch_count(&self) -> usize {
        self.entries.len().div_ceil(BATCH_SIZE)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Catalog {
        Catalog::new(
            (0..count)
                .map(|i| Abbreviation::new(format!("C{i}"), format!("Entry number {i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_built_in_has_ten_entries_in_order() {
        let catalog = Catalog::built_in();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.entries()[0].code, "FCA");
        assert_eq!(catalog.entries()[9].code, "FPC");
        assert!(Catalog::new(catalog.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_batches_walk_the_catalog() {
        let catalog = Catalog::built_in();

        let first = catalog.batch(0).unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].code, "FCA");

        let second = catalog.batch(1).unwrap();
        assert_eq!(second[0].code, "CMA");
        assert_eq!(second[4].code, "FPC");

        assert!(catalog.batch(2).is_none());
        assert!(catalog.batch(u32::MAX).is_none());
    }

    #[test]
    fn test_last_batch_is_clipped() {
        let catalog = numbered(12);
        assert_eq!(catalog.batch(2).unwrap().len(), 2);
        assert_eq!(catalog.batch(2).unwrap()[0].code, "C10");
        assert!(catalog.batch(3).is_none());
    }

    #[test]
    fn test_batch_count_is_ceiling() {
        assert_eq!(numbered(5).batch_count(), 1);
        assert_eq!(numbered(10).batch_count(), 2);
        assert_eq!(numbered(11).batch_count(), 3);
        assert_eq!(numbered(14).batch_count(), 3);
    }

    #[test]
    fn test_rejects_small_catalog() {
        let entries = vec![Abbreviation::new("A", "Alpha")];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let mut entries = numbered(5).entries().to_vec();
        entries.push(Abbreviation::new("C0", "Another"));
        let err = Catalog::new(entries).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let mut entries = numbered(5).entries().to_vec();
        entries[2].expansion = "  ".to_string();
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
abbreviations:
  - [FCA, Financial Conduct Authority]
  - [PRA, Prudential Regulation Authority]
  - [KYC, Know Your Customer]
  - [AML, Anti-Money Laundering]
  - [SCA, Strong Customer Authentication]
  - [BoE, Bank of England]
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.entries()[1].expansion, "Prudential Regulation Authority");
        assert_eq!(catalog.batch(1).unwrap().len(), 1);
    }

    #[test]
    fn test_from_yaml_rejects_wrong_shape() {
        assert!(Catalog::from_yaml("abbreviations: [FCA]").is_err());
        assert!(Catalog::from_yaml("nothing: here").is_err());
    }

    #[test]
    fn test_abbreviation_serializes_as_pair() {
        let entry = Abbreviation::new("KYC", "Know Your Customer");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"["KYC","Know Your Customer"]"#);

        let back: Abbreviation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
