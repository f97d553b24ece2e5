//! Reads a stream through a `TrackingReader` the way a parser would, then
//! reports a "diagnostic" for a byte offset found during parsing.

use std::io::Read;

use linepos::track::TrackingReader;

fn main() {
    // stand-in for a network stream or a piped file
    let source = std::io::Cursor::new(b"let x = 1\nlet y = ;\nlet z = 3\n".to_vec());
    let mut reader = TrackingReader::new(source);

    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .expect("reading from an in-memory cursor");

    // a parser would discover this offset itself; we just look it up
    let offending = content.find(';').expect("demo input contains a ';'") as u64;

    match reader.index().position(offending) {
        Ok(pos) => println!("unexpected token `;` at {}", pos),
        Err(e) => println!("no position for offset {}: {}", offending, e),
    }
}
