/*!
 * Tests for the document-level transform
 */

use srtprep::document_processor::{process_document, serialize_segments};
use srtprep::subtitle_processor::Segment;
use srtprep::variables::VariableTable;
use crate::common::{self, VALID_DOCUMENT};

#[test]
fn test_processDocument_withValidDocument_shouldBeIdentity() {
    let result = process_document(VALID_DOCUMENT, None);

    assert_eq!(result.output_text, VALID_DOCUMENT);
    assert!(result.errors().is_empty());
    assert!(result.warnings().is_empty());
}

#[test]
fn test_processDocument_withInvertedRange_shouldReportAndKeepText() {
    let input = "1\n00:00:03,000 --> 00:00:01,000\nBad.";
    let result = process_document(input, None);

    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].contains("start >= end"));
    assert_eq!(result.output_text, input);
}

#[test]
fn test_processDocument_withOverlap_shouldWarnAboutSecondSegment() {
    let input = [
        common::segment("1", "00:00:01,000 --> 00:00:05,000", "One"),
        common::segment("2", "00:00:03,000 --> 00:00:08,000", "Two"),
    ]
    .join("\n\n");

    let result = process_document(&input, None);

    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].contains("Segment 2"));
    assert!(result.warnings()[0].contains("00:00:05,000"));
    assert!(result.warnings()[0].contains("00:00:03,000"));
}

#[test]
fn test_processDocument_withMessyInput_shouldNormalizeSeparatorsAndIndices() {
    let input = "10\r\n00:00:01,000 --> 00:00:02,000\r\nA\r\n\r\n\r\n\r\n20\r\n00:00:03,000 --> 00:00:04,000\r\nB\r\n\r\n";
    let result = process_document(input, None);

    assert_eq!(
        result.output_text,
        "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB"
    );
    assert!(result.diagnostics.is_clean());
}

#[test]
fn test_processDocument_withWhitespaceOnlyContentLine_shouldNotLoseText() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nA\n   \nB";
    let result = process_document(input, None);

    assert_eq!(result.output_text, input);
    assert_eq!(result.segments.len(), 1);
    assert!(result.diagnostics.is_clean());
}

#[test]
fn test_processDocument_withStartOnlyAfterSeparator_shouldRepair() {
    let input = "1\n--> 00:00:01,000\nA\n\n2\n00:00:04,000 --> 00:00:06,000\nB";
    let result = process_document(input, None);

    assert_eq!(
        result.output_text,
        "1\n00:00:01,000 --> 00:00:04,000\nA\n\n2\n00:00:04,000 --> 00:00:06,000\nB"
    );
    assert!(result.errors().is_empty());
    assert_eq!(result.warnings().len(), 1);
}

#[test]
fn test_processDocument_withErrors_shouldNeverDropSegments() {
    let input = [
        common::segment("1", "garbage", "Kept"),
        common::segment("2", "00:00:09,000 --> 00:00:01,000", "Also kept"),
        common::segment("3", "00:00:10,000", "Last, unrepairable"),
    ]
    .join("\n\n");

    let result = process_document(&input, None);

    assert_eq!(result.segments.len(), 3);
    assert_eq!(result.errors().len(), 3);
    assert!(result.output_text.contains("garbage\nKept"));
    assert!(result.output_text.ends_with("3\n00:00:10,000\nLast, unrepairable"));
}

#[test]
fn test_processDocument_withTable_shouldSubstituteAndReturnTable() {
    let input = common::segment("1", "00:00:01,000 --> 00:00:02,000", "Hi {{name}}, I am {{speaker}}");
    let table: VariableTable = [("name", "Sam")].into_iter().collect();

    let result = process_document(&input, Some(table));

    assert_eq!(
        result.output_text,
        "1\n00:00:01,000 --> 00:00:02,000\nHi Sam, I am {{speaker}}"
    );
    assert_eq!(result.stats.substituted_count, 1);
    assert_eq!(result.stats.new_count, 1);
    assert_eq!(result.stats.unhandled_count, 1);

    let table = result.variables.as_ref().expect("table should be returned");
    assert_eq!(table.get("speaker"), Some(""));

    // Unresolved placeholders produce one summary warning
    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].contains("speaker"));
}

#[test]
fn test_processDocument_secondRunWithFilledTable_shouldResolveEverything() {
    let input = common::segment("1", "00:00:01,000 --> 00:00:02,000", "{{greeting}}, {{名前}}");

    let first = process_document(&input, Some(VariableTable::new()));
    assert_eq!(first.stats.new_count, 2);

    let mut table = first.variables.unwrap();
    table.insert("greeting", "Hello");
    table.insert("名前", "花子");

    let second = process_document(&input, Some(table.clone()));
    let third = process_document(&input, Some(table));

    assert_eq!(second.output_text, "1\n00:00:01,000 --> 00:00:02,000\nHello, 花子");
    assert_eq!(second.output_text, third.output_text);
    assert_eq!(third.stats.new_count, 0);
    assert_eq!(third.stats.unhandled_count, 0);
    assert!(third.diagnostics.is_clean());
}

#[test]
fn test_serializeSegments_shouldSeparateWithSingleBlankLine() {
    let segments = vec![
        Segment::new(1, "00:00:01,000 --> 00:00:02,000", "A"),
        Segment::new(2, "00:00:03,000 --> 00:00:04,000", "B\nC"),
    ];

    assert_eq!(
        serialize_segments(&segments),
        "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB\nC"
    );
}
