/*!
 * Placeholder substitution over normalized segments.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::subtitle_processor::Segment;
use crate::variables::scanner;
use crate::variables::table::{Resolution, VariableTable};

/// Counters collected during one substitution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionStats {
    /// Names seen for the first time and added to the table
    pub new_count: usize,
    /// Placeholder occurrences replaced by a value
    pub substituted_count: usize,
    /// Placeholder occurrences left in place (empty or new names)
    pub unhandled_count: usize,
}

impl SubstitutionStats {
    fn record(&mut self, other: SubstitutionStats) {
        self.new_count += other.new_count;
        self.substituted_count += other.substituted_count;
        self.unhandled_count += other.unhandled_count;
    }
}

/// Replace known placeholders in `text`, registering unknown names.
///
/// Returns the rewritten text and the counters for this text alone.
pub fn substitute_text(text: &str, table: &mut VariableTable) -> (String, SubstitutionStats) {
    let mut stats = SubstitutionStats::default();
    let mut output = String::with_capacity(text.len());
    let mut copied_until = 0;

    for placeholder in scanner::scan(text) {
        output.push_str(&text[copied_until..placeholder.span.start]);
        let literal = &text[placeholder.span.clone()];

        match table.resolve_or_register(placeholder.name) {
            Resolution::Bound(value) => {
                output.push_str(value);
                stats.substituted_count += 1;
            }
            Resolution::Unbound => {
                output.push_str(literal);
                stats.unhandled_count += 1;
            }
            Resolution::Discovered => {
                output.push_str(literal);
                stats.new_count += 1;
                stats.unhandled_count += 1;
            }
        }

        copied_until = placeholder.span.end;
    }
    output.push_str(&text[copied_until..]);

    (output, stats)
}

/// Substitute placeholders in every segment's content, in stream order
pub fn substitute(segments: &mut [Segment], table: &mut VariableTable) -> SubstitutionStats {
    let mut stats = SubstitutionStats::default();

    for segment in segments.iter_mut() {
        let (content, segment_stats) = substitute_text(&segment.content, table);
        segment.content = content;
        stats.record(segment_stats);
    }

    debug!(
        "Substitution: {} new, {} substituted, {} unhandled",
        stats.new_count, stats.substituted_count, stats.unhandled_count
    );
    stats
}

/// Warnings describing what a substitution pass left unresolved
pub fn substitution_diagnostics(stats: &SubstitutionStats, table: &VariableTable) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    if stats.unhandled_count > 0 {
        diagnostics.warning(format!(
            "{} placeholder occurrence(s) left unresolved; variables without a value: {}",
            stats.unhandled_count,
            table.unbound_names().join(", ")
        ));
    }
    diagnostics
}
