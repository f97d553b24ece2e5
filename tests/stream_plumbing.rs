use std::io::{BufRead, BufReader, Read};

use linepos::track::TrackingReader;
use linepos::{Position, PositionIndex};

#[test]
fn test_io_copy_into_index() {
    let mut source = std::io::Cursor::new(b"alpha\nbeta\ngamma\n".to_vec());
    let mut index = PositionIndex::new();
    let copied = std::io::copy(&mut source, &mut index).unwrap();
    assert_eq!(copied, 17);
    assert_eq!(index.len(), 17);
    assert_eq!(index.lines().len(), 3);
    assert_eq!(index.line(11).unwrap(), 3);
}

#[test]
fn test_tracking_reader_feeds_index_while_parsing() {
    let source = std::io::Cursor::new(b"fn main() {\n  oops\n}\n".to_vec());
    let mut reader = BufReader::new(TrackingReader::new(source));

    // a line-oriented consumer draining the stream
    let mut line = String::new();
    let mut lines = 0;
    while reader.read_line(&mut line).unwrap() > 0 {
        lines += 1;
        line.clear();
    }
    assert_eq!(lines, 3);

    let index = reader.get_ref().index();
    assert_eq!(index.len(), 21);
    // offset 14 is the 'o' of "oops"
    let pos = index.position(14).unwrap();
    assert_eq!(pos, Position { line: 2, column: 3 });
}

#[test]
fn test_tracking_reader_matches_direct_ingestion() {
    let data = b"one\ntwo\nthree\nfour";
    let mut reader = TrackingReader::new(std::io::Cursor::new(data.to_vec()));
    let mut sink = Vec::new();
    reader.read_to_end(&mut sink).unwrap();
    assert_eq!(sink, data);

    let mut direct = PositionIndex::new();
    direct.ingest(data);

    let (_, tracked) = reader.into_parts();
    for offset in 0..data.len() as u64 {
        assert_eq!(
            tracked.position(offset).unwrap(),
            direct.position(offset).unwrap()
        );
    }
}

#[test]
fn test_position_serializes_for_error_reports() {
    let mut index = PositionIndex::new();
    index.ingest(b"let x =\nlet y = ;\n");

    // offset 16 is the stray ';'
    let pos = index.position(16).unwrap();
    let report = serde_json::json!({
        "message": "unexpected token `;`",
        "position": pos,
    });
    assert_eq!(
        report.to_string(),
        r#"{"message":"unexpected token `;`","position":{"column":9,"line":2}}"#
    );
}
