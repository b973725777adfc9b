//! Condition and red-flag catalogs.
//!
//! A catalog is loaded once at startup, validated, and then only ever read.
//! Entry order is significant: it is the tie-break order for ranking.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CatalogError;

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yml");

/// A candidate condition and the keyword phrases that point to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionEntry {
    pub name: String,
    pub keywords: Vec<String>,
    pub explanation: String,
    pub advice: String,
}

/// An emergency pattern, reported independently of condition ranking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedFlagEntry {
    pub keywords: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub conditions: Vec<ConditionEntry>,
    #[serde(default)]
    pub red_flags: Vec<RedFlagEntry>,
}

impl Catalog {
    /// The catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.normalized().validated()
    }

    /// Read a catalog from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&yaml)?;
        info!(
            "Loaded catalog from {} ({} conditions, {} red flags)",
            path.display(),
            catalog.conditions.len(),
            catalog.red_flags.len()
        );
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    /// Lower-case every keyword so matching only has to fold the input.
    /// Surrounding spaces are kept: `" ache"` must not match inside "headache".
    fn normalized(mut self) -> Self {
        let fold = |keywords: &mut Vec<String>| {
            for k in keywords.iter_mut() {
                *k = k.to_lowercase();
            }
        };
        for c in &mut self.conditions {
            fold(&mut c.keywords);
        }
        for f in &mut self.red_flags {
            fold(&mut f.keywords);
        }
        self
    }

    fn validated(self) -> Result<Self, CatalogError> {
        if self.conditions.is_empty() {
            return Err(CatalogError::Validation(
                "catalog must define at least one condition".into(),
            ));
        }

        let mut names = HashSet::new();
        for (i, c) in self.conditions.iter().enumerate() {
            if c.name.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "condition #{} has an empty name",
                    i + 1
                )));
            }
            if !names.insert(c.name.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate condition name '{}'",
                    c.name
                )));
            }
            check_keywords(&c.keywords, &format!("condition '{}'", c.name))?;
        }

        for (i, f) in self.red_flags.iter().enumerate() {
            let label = format!("red flag #{}", i + 1);
            if f.message.trim().is_empty() {
                return Err(CatalogError::Validation(format!("{label} has an empty message")));
            }
            check_keywords(&f.keywords, &label)?;
        }

        Ok(self)
    }
}

fn check_keywords(keywords: &[String], owner: &str) -> Result<(), CatalogError> {
    if keywords.is_empty() {
        return Err(CatalogError::Validation(format!("{owner} has no keywords")));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(CatalogError::Validation(format!("{owner} has a blank keyword")));
    }
    Ok(())
}
