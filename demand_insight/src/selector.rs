//! Stock-code selection choices

use crate::data::TransactionTable;
use crate::error::Result;
use std::collections::HashSet;

/// The set of stock codes a user can pick from.
///
/// Choices keep the order in which each code is first encountered in the
/// table (stable, not sorted), matching how a selection control should
/// present them. The default selection is the first choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCodeSelector {
    choices: Vec<String>,
}

impl StockCodeSelector {
    /// Collect the distinct stock codes from a table.
    ///
    /// An empty table yields an empty choice set; the data-quality gate
    /// downstream is responsible for reporting that.
    pub fn from_table(table: &TransactionTable) -> Result<Self> {
        let codes = table.string_column("StockCode")?;

        let mut seen = HashSet::new();
        let mut choices = Vec::new();
        for code in codes.into_iter().flatten() {
            if seen.insert(code.clone()) {
                choices.push(code);
            }
        }

        Ok(Self { choices })
    }

    /// All distinct stock codes, in first-encountered order
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The choice used when the user has not picked one
    pub fn default_choice(&self) -> Option<&str> {
        self.choices.first().map(String::as_str)
    }

    /// Check whether a stock code is among the choices
    pub fn contains(&self, code: &str) -> bool {
        self.choices.iter().any(|choice| choice == code)
    }

    /// Number of distinct stock codes
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Check whether there are no choices at all
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
