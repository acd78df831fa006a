//! Per-language terms capacity budgets

use crate::{Language, Result, TermsTextError};
use serde::{Deserialize, Serialize};

/// Maximum characters that fit in one terms region, per language
///
/// Devanagari text sets wider than Latin text at the same point size, and the
/// budgets are tuned per script accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityTable {
    pub english: usize,
    pub hindi: usize,
    pub marathi: usize,
}

impl CapacityTable {
    /// Create a table, rejecting zero budgets
    pub fn new(english: usize, hindi: usize, marathi: usize) -> Result<Self> {
        let table = Self {
            english,
            hindi,
            marathi,
        };
        table.validate()?;
        Ok(table)
    }

    /// Budget for a language
    pub fn get(&self, lang: Language) -> usize {
        match lang {
            Language::English => self.english,
            Language::Hindi => self.hindi,
            Language::Marathi => self.marathi,
        }
    }

    /// Check that every budget is usable
    pub fn validate(&self) -> Result<()> {
        for lang in Language::ALL {
            if self.get(lang) == 0 {
                return Err(TermsTextError::InvalidCapacity(format!(
                    "budget for {} must be greater than zero",
                    lang.key()
                )));
            }
        }
        Ok(())
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self {
            english: 1800,
            hindi: 5500,
            marathi: 4500,
        }
    }
}
