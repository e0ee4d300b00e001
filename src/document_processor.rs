/*!
 * Document-level transform.
 *
 * Splits a subtitle document, normalizes its segments, optionally substitutes
 * template variables and serializes the result. Document content never makes
 * this fail: every problem ends up as a diagnostic next to a best-effort
 * output.
 */

use log::debug;

use crate::diagnostics::Diagnostics;
use crate::subtitle_processor::{self, Segment, SegmentNormalizer};
use crate::variables::substitution::{self, SubstitutionStats};
use crate::variables::VariableTable;

/// Result of processing one document
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    /// Serialized, renumbered document
    pub output_text: String,
    /// Normalized segments in output order
    pub segments: Vec<Segment>,
    /// Errors and warnings in stage order
    pub diagnostics: Diagnostics,
    /// Substitution counters (all zero when no table was supplied)
    pub stats: SubstitutionStats,
    /// The table after substitution, `None` when none was supplied
    pub variables: Option<VariableTable>,
}

impl ProcessedDocument {
    pub fn errors(&self) -> &[String] {
        &self.diagnostics.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.diagnostics.warnings
    }
}

/// Serialize segments as `index\ntimecode\ncontent`, one blank line apart
pub fn serialize_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Process a whole document.
///
/// Passing `None` for `variables` disables substitution entirely.
pub fn process_document(text: &str, variables: Option<VariableTable>) -> ProcessedDocument {
    let raw_segments = subtitle_processor::split_document(text);
    let normalized = SegmentNormalizer::normalize(&raw_segments);

    let mut segments = normalized.segments;
    let mut diagnostics = normalized.diagnostics;
    let mut stats = SubstitutionStats::default();

    let variables = variables.map(|mut table| {
        stats = substitution::substitute(&mut segments, &mut table);
        diagnostics.extend(substitution::substitution_diagnostics(&stats, &table));
        table
    });

    let output_text = serialize_segments(&segments);
    debug!(
        "Processed document: {} segments, {} errors, {} warnings",
        segments.len(),
        diagnostics.errors.len(),
        diagnostics.warnings.len()
    );

    ProcessedDocument {
        output_text,
        segments,
        diagnostics,
        stats,
        variables,
    }
}
