use super::*;
use std::io::Cursor;

fn numbered_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}", i as f64 * 0.5)).collect()
}

#[test]
fn test_parse_row_major() {
    let lines = numbered_lines(6);
    let table = TableParser::new(2, 3).parse(&lines).unwrap();

    assert_eq!(table.shape(), (2, 3));
    assert_eq!(table.values(), &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    assert_eq!(table.row(1), Some(&[1.5, 2.0, 2.5][..]));
    assert_eq!(table.get(0, 2), Some(1.0));
    assert_eq!(table.get(2, 0), None);
    assert_eq!(table.phase(), None);
    assert_eq!(table.model(), None);
}

#[test]
fn test_shape_mismatch_short_and_long() {
    let parser = TableParser::new(2, 3);

    match parser.parse(&numbered_lines(5)) {
        Err(TableError::Shape {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 6);
            assert_eq!(actual, 5);
        }
        other => panic!("expected shape error, got {:?}", other),
    }

    assert!(matches!(
        parser.parse(&numbered_lines(7)),
        Err(TableError::Shape { actual: 7, .. })
    ));
}

#[test]
fn test_shape_checked_before_values() {
    let lines = vec!["abc", "1.0"];
    assert!(matches!(
        TableParser::new(3, 1).parse(&lines),
        Err(TableError::Shape { .. })
    ));
}

#[test]
fn test_zero_dimensions_rejected() {
    let lines: Vec<&str> = Vec::new();
    assert!(matches!(
        TableParser::new(0, 4).parse(&lines),
        Err(TableError::InvalidDimensions { nd: 0, nz: 4 })
    ));
}

#[test]
fn test_non_numeric_reports_line() {
    let lines = vec!["1.0", "2.0", "n/a", "4.0"];
    match TableParser::new(2, 2).parse(&lines) {
        Err(TableError::Parse { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "n/a");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_blank_and_multi_token_lines_rejected() {
    let blank = vec!["1.0", "", "3.0", "4.0"];
    assert!(matches!(
        TableParser::new(2, 2).parse(&blank),
        Err(TableError::Parse { line: 2, .. })
    ));

    let pair = vec!["1.0", "2.0 3.0", "3.0", "4.0"];
    assert!(matches!(
        TableParser::new(2, 2).parse(&pair),
        Err(TableError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_surrounding_whitespace_allowed() {
    let lines = vec!["  1.25", "2.5  ", "\t3.75"];
    let table = TableParser::new(3, 1).parse(&lines).unwrap();
    assert_eq!(table.values(), &[1.25, 2.5, 3.75]);
}

#[test]
fn test_metadata_header() {
    let text = "# phase: S\n# model: ak135\n1.0\n2.0\n";
    let table = TableParser::new(1, 2)
        .with_metadata(true)
        .parse_str(text)
        .unwrap();

    assert_eq!(table.phase(), Some("S"));
    assert_eq!(table.model(), Some("ak135"));
    assert_eq!(table.values(), &[1.0, 2.0]);
}

#[test]
fn test_metadata_header_separators() {
    let text = "PHASE Pn\nModel=prem\n1.0\n";
    let table = TableParser::new(1, 1)
        .with_metadata(true)
        .parse_str(text)
        .unwrap();

    assert_eq!(table.phase(), Some("Pn"));
    assert_eq!(table.model(), Some("prem"));
}

#[test]
fn test_metadata_header_errors() {
    let parser = TableParser::new(1, 1).with_metadata(true);

    assert!(matches!(
        parser.parse_str("model: iasp91\nphase: P\n1.0\n"),
        Err(TableError::Header { line: 1, .. })
    ));
    assert!(matches!(
        parser.parse_str("phase: P\n"),
        Err(TableError::Header { line: 2, .. })
    ));
    assert!(matches!(
        parser.parse_str("phase:\nmodel: x\n1.0\n"),
        Err(TableError::Header { line: 1, .. })
    ));
}

#[test]
fn test_parse_error_line_counts_header() {
    let text = "phase: P\nmodel: m\n1.0\nbad\n";
    assert!(matches!(
        TableParser::new(2, 1).with_metadata(true).parse_str(text),
        Err(TableError::Parse { line: 4, .. })
    ));
}

#[test]
fn test_without_metadata_header_is_data() {
    let text = "phase: P\n1.0\n";
    assert!(matches!(
        TableParser::new(2, 1).parse_str(text),
        Err(TableError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_from_reader() {
    let reader = Cursor::new("0.1\n0.2\n0.3\n0.4\n");
    let table = TableParser::new(2, 2).from_reader(reader).unwrap();
    assert_eq!(table.into_values(), vec![0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn test_from_values_checks_shape() {
    let table = TravelTimeTable::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_phase("P")
        .with_model("iasp91");
    assert_eq!(table.phase(), Some("P"));
    assert_eq!(table.model(), Some("iasp91"));

    assert!(matches!(
        TravelTimeTable::from_values(2, 2, vec![1.0]),
        Err(TableError::Shape { expected: 4, actual: 1, .. })
    ));
}
