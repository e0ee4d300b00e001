use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

use crate::diagnostics::Diagnostics;
use crate::timecode::{self, TimeRange};

// @module: Subtitle segment splitting and timing normalization

// @const: One or more empty lines; whitespace-only lines stay content
static BLANK_LINES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}").expect("Invalid blank line regex")
});

// @struct: Single normalized subtitle segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    // @field: 1-based output position
    pub index: usize,

    // @field: Resolved timecode line, possibly repaired or still invalid
    pub timecode: String,

    // @field: Text lines joined with '\n'
    pub content: String,
}

impl Segment {
    pub fn new(index: usize, timecode: impl Into<String>, content: impl Into<String>) -> Self {
        Segment {
            index,
            timecode: timecode.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.index, self.timecode, self.content)
    }
}

/// One blank-line separated chunk of the input, split into lines.
///
/// Line 0 is the original index (never used), line 1 the timecode line and
/// the rest is content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    lines: Vec<String>,
}

impl RawSegment {
    pub fn new(lines: Vec<String>) -> Self {
        RawSegment { lines }
    }

    pub fn from_chunk(chunk: &str) -> Self {
        Self::new(chunk.split('\n').map(str::to_string).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Original index line as written in the input
    pub fn index_line(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Timecode line, empty when the chunk has a single line
    pub fn timecode_line(&self) -> &str {
        self.lines.get(1).map_or("", String::as_str)
    }

    pub fn content(&self) -> String {
        self.lines.get(2..).map(|rest| rest.join("\n")).unwrap_or_default()
    }
}

/// Normalize line endings to '\n'
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split a document into raw segments on blank lines, dropping empty chunks
pub fn split_document(text: &str) -> Vec<RawSegment> {
    let normalized = normalize_line_endings(text);

    let segments: Vec<RawSegment> = BLANK_LINES_REGEX
        .split(&normalized)
        .map(|chunk| chunk.trim_matches('\n'))
        .filter(|chunk| !chunk.trim().is_empty())
        .map(RawSegment::from_chunk)
        .collect();

    debug!("Split document into {} raw segments", segments.len());
    segments
}

/// Segments plus the diagnostics raised while normalizing them
#[derive(Debug, Clone, Default)]
pub struct NormalizedSegments {
    pub segments: Vec<Segment>,
    pub diagnostics: Diagnostics,
}

/// Repairs, validates and renumbers raw segments
pub struct SegmentNormalizer;

impl SegmentNormalizer {
    /// Normalize raw segments in stream order.
    ///
    /// Output indices are always `position + 1`. Every input segment yields
    /// exactly one output segment, whatever diagnostics it raised.
    pub fn normalize(raw_segments: &[RawSegment]) -> NormalizedSegments {
        let mut diagnostics = Diagnostics::new();
        let mut segments = Vec::with_capacity(raw_segments.len());
        let mut previous_range: Option<TimeRange> = None;

        for (position, raw) in raw_segments.iter().enumerate() {
            let index = position + 1;
            let next = raw_segments.get(position + 1);
            let resolved = Self::resolve_timecode(index, raw.timecode_line(), next, &mut diagnostics);

            let range = TimeRange::parse(&resolved);
            if let Some(range) = range {
                if !range.is_ordered() {
                    diagnostics.error(format!(
                        "Segment {}: invalid time range '{}' (start >= end)",
                        index, resolved
                    ));
                }

                if let Some(previous) = previous_range {
                    if previous.end_ms > range.start_ms {
                        diagnostics.warning(format!(
                            "Segment {}: overlaps previous segment (previous end {} > current start {})",
                            index,
                            timecode::format_timestamp(previous.end_ms),
                            timecode::format_timestamp(range.start_ms)
                        ));
                    }
                }
            }
            previous_range = range;

            segments.push(Segment::new(index, resolved, raw.content()));
        }

        debug!(
            "Normalized {} segments: {} errors, {} warnings",
            segments.len(),
            diagnostics.errors.len(),
            diagnostics.warnings.len()
        );

        NormalizedSegments { segments, diagnostics }
    }

    // A lone timecode is always taken as the start time, even when written as
    // `--> T`; the end comes from the next segment's start. Repair never looks
    // backward.
    fn resolve_timecode(
        index: usize,
        line: &str,
        next: Option<&RawSegment>,
        diagnostics: &mut Diagnostics,
    ) -> String {
        if timecode::is_timecode_range(line) {
            return line.to_string();
        }

        let Some(start) = timecode::single_timecode(line) else {
            diagnostics.error(format!("Segment {}: invalid timecode format '{}'", index, line));
            return line.to_string();
        };

        let next_start = next
            .map(|segment| timecode::start_text(segment.timecode_line()))
            .filter(|start| timecode::timecode_to_milliseconds(start).is_some());

        match next_start {
            Some(next_start) => {
                let repaired = format!("{} {} {}", start, timecode::RANGE_SEPARATOR, next_start);
                diagnostics.warning(format!(
                    "Segment {}: missing end time, timecode '{}' corrected to '{}'",
                    index, line, repaired
                ));
                repaired
            }
            None => {
                diagnostics.error(format!(
                    "Segment {}: timecode '{}' has no end time and no following start time to repair it",
                    index, line
                ));
                line.to_string()
            }
        }
    }
}
