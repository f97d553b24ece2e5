//! Maps every offset of a small buffer to its line and column.

use linepos::PositionIndex;

fn main() {
    let data = b"Write\nmore\nRust!\n";

    let mut index = PositionIndex::new();
    index.ingest(data); // never fails

    for offset in 0..index.len() {
        match index.position(offset) {
            Ok(pos) => println!("offset {} maps to line {}, column {}", offset, pos.line, pos.column),
            Err(e) => println!("offset {}: {}", offset, e),
        }
    }
}
