/*!
 * Tests for segment splitting and normalization
 */

use srtprep::subtitle_processor::{split_document, RawSegment, Segment, SegmentNormalizer};
use crate::common::{self, VALID_DOCUMENT};

fn normalize(text: &str) -> srtprep::subtitle_processor::NormalizedSegments {
    SegmentNormalizer::normalize(&split_document(text))
}

/// Test parsing a valid document
#[test]
fn test_normalize_withValidDocument_shouldKeepTimecodesAndContent() {
    let result = normalize(VALID_DOCUMENT);

    assert_eq!(result.segments.len(), 3);
    assert_eq!(
        result.segments[1],
        Segment::new(2, "00:00:05,000 --> 00:00:09,000", "It contains multiple entries.\nOn two lines.")
    );
    assert!(result.diagnostics.is_clean());
}

#[test]
fn test_normalize_withArbitraryInputIndices_shouldRenumberSequentially() {
    let text = [
        common::segment("-4", "00:00:01,000 --> 00:00:02,000", "A"),
        common::segment("abc", "00:00:03,000 --> 00:00:04,000", "B"),
        common::segment("7", "00:00:05,000 --> 00:00:06,000", "C"),
        common::segment("7", "00:00:07,000 --> 00:00:08,000", "D"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    let indices: Vec<usize> = result.segments.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
    assert!(result.diagnostics.is_clean());
}

#[test]
fn test_normalize_withStartAfterEnd_shouldReportOneError() {
    let text = [
        common::segment("1", "00:00:01,000 --> 00:00:02,000", "Fine"),
        common::segment("2", "00:00:05,000 --> 00:00:04,000", "Backwards"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("start >= end"));
    assert!(result.diagnostics.errors[0].contains("Segment 2"));
    assert!(result.diagnostics.warnings.is_empty());
}

#[test]
fn test_normalize_withEqualStartAndEnd_shouldReportError() {
    let result = normalize(&common::segment("1", "00:00:02,000 --> 00:00:02,000", "Zero"));

    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("start >= end"));
}

#[test]
fn test_normalize_withMissingEndTime_shouldRepairFromNextStart() {
    let text = [
        common::segment("1", "00:00:01,000", "No end"),
        common::segment("2", "00:00:04,000 --> 00:00:06,000", "Next"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.segments[0].timecode, "00:00:01,000 --> 00:00:04,000");
    assert_eq!(result.diagnostics.warnings.len(), 1);
    let warning = &result.diagnostics.warnings[0];
    assert!(warning.contains("Segment 1"));
    assert!(warning.contains("'00:00:01,000'"));
    assert!(warning.contains("'00:00:01,000 --> 00:00:04,000'"));
    assert!(result.diagnostics.errors.is_empty());
}

#[test]
fn test_normalize_withMissingEndTimeInLastSegment_shouldReportErrorWithoutRepair() {
    let text = [
        common::segment("1", "00:00:01,000 --> 00:00:02,000", "First"),
        common::segment("2", "00:00:04,000", "Last"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.segments[1].timecode, "00:00:04,000");
    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("Segment 2"));
    assert!(result.diagnostics.warnings.is_empty());
}

#[test]
fn test_normalize_withRepairFromLaterStart_shouldStillValidateRange() {
    // The bare timecode is taken as the start even if it was meant as the end
    let text = [
        common::segment("1", "00:00:09,000", "Actually an end time"),
        common::segment("2", "00:00:04,000 --> 00:00:06,000", "Next"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.segments[0].timecode, "00:00:09,000 --> 00:00:04,000");
    // Repair warning only: the inverted range ends where segment 2 starts
    assert_eq!(result.diagnostics.warnings.len(), 1);
    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("start >= end"));
}

#[test]
fn test_normalize_withInvalidFormat_shouldKeepLineAndReportError() {
    let text = [
        common::segment("1", "one second --> two seconds", "Words"),
        common::segment("2", "00:00:04,000 --> 00:00:06,000", "Next"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.segments[0].timecode, "one second --> two seconds");
    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("Segment 1"));
}

#[test]
fn test_normalize_withOverlap_shouldWarnOnLaterSegment() {
    let text = [
        common::segment("1", "00:00:01,000 --> 00:00:05,000", "First"),
        common::segment("2", "00:00:03,000 --> 00:00:08,000", "Second"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    assert_eq!(result.diagnostics.warnings.len(), 1);
    let warning = &result.diagnostics.warnings[0];
    assert!(warning.contains("Segment 2"));
    assert!(warning.contains("00:00:05,000"));
    assert!(warning.contains("00:00:03,000"));
    assert!(result.diagnostics.errors.is_empty());
}

#[test]
fn test_normalize_withTouchingSegments_shouldNotWarn() {
    let text = [
        common::segment("1", "00:00:01,000 --> 00:00:03,000", "First"),
        common::segment("2", "00:00:03,000 --> 00:00:08,000", "Second"),
    ]
    .join("\n\n");

    assert!(normalize(&text).diagnostics.is_clean());
}

#[test]
fn test_normalize_withRepairedPredecessor_shouldUseResolvedTimecodeForOverlap() {
    let text = [
        common::segment("1", "00:00:01,000", "Repaired"),
        common::segment("2", "00:00:02,000 --> 00:00:03,000", "Next"),
    ]
    .join("\n\n");

    let result = normalize(&text);

    // Repaired end equals the next start, so no overlap
    assert_eq!(result.diagnostics.warnings.len(), 1);
    assert!(result.diagnostics.warnings[0].contains("corrected"));
}

#[test]
fn test_rawSegment_withTrailingContentLines_shouldJoinWithNewlines() {
    let raw = RawSegment::from_chunk("1\n00:00:01,000 --> 00:00:02,000\nA\nB\nC");
    assert_eq!(raw.content(), "A\nB\nC");
    assert_eq!(raw.lines().len(), 5);
}

#[test]
fn test_normalize_withDanglingSeparator_shouldRepairFromNextStart() {
    for line in ["--> 00:00:01,000", "00:00:01,000 -->", "00:00:01,000 --> "] {
        let text = [
            common::segment("1", line, "Half a range"),
            common::segment("2", "00:00:04,000 --> 00:00:06,000", "Next"),
        ]
        .join("\n\n");

        let result = normalize(&text);

        assert_eq!(result.segments[0].timecode, "00:00:01,000 --> 00:00:04,000", "line {:?}", line);
        assert_eq!(result.diagnostics.warnings.len(), 1, "line {:?}", line);
        assert!(result.diagnostics.warnings[0].contains("Segment 1"));
        assert!(result.diagnostics.errors.is_empty(), "line {:?}: {:?}", line, result.diagnostics.errors);
    }
}

#[test]
fn test_normalize_withDanglingSeparatorInLastSegment_shouldReportOneError() {
    for line in ["--> 00:00:04,000", "00:00:04,000 -->"] {
        let text = [
            common::segment("1", "00:00:01,000 --> 00:00:02,000", "First"),
            common::segment("2", line, "Last"),
        ]
        .join("\n\n");

        let result = normalize(&text);

        assert_eq!(result.segments[1].timecode, line);
        assert_eq!(result.diagnostics.errors.len(), 1, "line {:?}", line);
        assert!(result.diagnostics.errors[0].contains("no end time"));
        assert!(result.diagnostics.errors[0].contains("Segment 2"));
        assert!(result.diagnostics.warnings.is_empty());
    }
}

#[test]
fn test_normalize_withNonCanonicalSeparatorSpacing_shouldReportInvalidFormat() {
    let result = normalize(&common::segment("1", "00:00:01,000-->00:00:02,000", "Tight"));

    assert_eq!(result.segments[0].timecode, "00:00:01,000-->00:00:02,000");
    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.diagnostics.errors[0].contains("invalid timecode format"));
    assert!(result.diagnostics.warnings.is_empty());
}

#[test]
fn test_normalize_withWhitespaceOnlyContentLine_shouldKeepFollowingText() {
    let result = normalize("1\n00:00:01,000 --> 00:00:02,000\nA\n   \nB");

    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].content, "A\n   \nB");
    assert!(result.diagnostics.is_clean());
}
