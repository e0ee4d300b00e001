/*!
 * Diagnostics produced while normalizing a subtitle document.
 *
 * Each processing stage returns its own `Diagnostics`; the document processor
 * concatenates them in stage order. Entries are never removed or merged.
 */

use serde::{Deserialize, Serialize};

/// Ordered error and warning messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Format violations and timing errors
    pub errors: Vec<String>,
    /// Recoverable conditions (repairs, overlaps, unresolved placeholders)
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another stage's diagnostics after ours
    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
