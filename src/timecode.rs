/*!
 * Timecode parsing and formatting.
 *
 * Timecodes use the SRT form `H:M:S,mmm`. They are converted to an absolute
 * millisecond offset from the start of the subtitle stream. Component ranges
 * are not validated: `00:75:00,000` is simply 75 minutes.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between start and end in a timecode line
pub const RANGE_SEPARATOR: &str = "-->";

// @const: Full `start --> end` timecode line
static RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}:\d{1,2}:\d{1,2},\d{3} --> \d{1,2}:\d{1,2}:\d{1,2},\d{3}$")
        .expect("Invalid timecode range regex")
});

// @const: One timecode, optionally with a dangling separator on either side
static SINGLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-->\s*(\d{1,2}:\d{1,2}:\d{1,2},\d{3})|(\d{1,2}:\d{1,2}:\d{1,2},\d{3})(?:\s*-->)?)$")
        .expect("Invalid single timecode regex")
});

/// Convert a `H:M:S,mmm` timecode to milliseconds.
///
/// Returns `None` when any component is missing or not a base-10 integer, or
/// when the total does not fit in a `u64`. Callers treat `None` as an unusable
/// timecode and report it, they never fail on it.
pub fn timecode_to_milliseconds(text: &str) -> Option<u64> {
    let (clock, millis) = text.trim().split_once(',')?;

    let mut parts = clock.split(':');
    let hours = parse_component(parts.next()?)?;
    let minutes = parse_component(parts.next()?)?;
    let seconds = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    let millis = parse_component(millis)?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?
        .checked_mul(1000)?
        .checked_add(millis)
}

fn parse_component(component: &str) -> Option<u64> {
    // str::parse would accept a leading '+'
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Format milliseconds as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Whether the line is a well-formed `start --> end` pair
pub fn is_timecode_range(line: &str) -> bool {
    RANGE_REGEX.is_match(line.trim())
}

/// The only timecode on a line that lacks one side of the range.
///
/// Matches `T`, `T -->` and `--> T`. Returns `None` for full ranges and for
/// anything else.
pub fn single_timecode(line: &str) -> Option<&str> {
    let captures = SINGLE_REGEX.captures(line.trim())?;
    captures.get(1).or_else(|| captures.get(2)).map(|m| m.as_str())
}

/// Text before the first `-->` on a timecode line, trimmed.
///
/// For a line without separator this is the whole trimmed line.
pub fn start_text(line: &str) -> &str {
    match line.split_once(RANGE_SEPARATOR) {
        Some((start, _)) => start.trim(),
        None => line.trim(),
    }
}

/// A start/end pair in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TimeRange {
    pub fn new(start_ms: u64, end_ms: u64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Extract a range from a timecode line.
    ///
    /// Only needs a `-->` separator with a convertible timecode on each side,
    /// so it also works on lines the strict pattern rejects (e.g. `0:0:1,000`
    /// with extra spaces).
    pub fn parse(line: &str) -> Option<Self> {
        let (start, end) = line.split_once(RANGE_SEPARATOR)?;
        let start_ms = timecode_to_milliseconds(start)?;
        let end_ms = timecode_to_milliseconds(end)?;
        Some(Self { start_ms, end_ms })
    }

    /// Start strictly before end
    pub fn is_ordered(&self) -> bool {
        self.start_ms < self.end_ms
    }
}
