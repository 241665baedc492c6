#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use ttgrid::table::TableParser;

fuzz_target!(|data: &[u8]| {
    // The first two bytes pick the expected shape; the rest is table text.
    // Parsing must either succeed or fail with an error, never panic.
    if data.len() < 2 {
        return;
    }
    let nd = usize::from(data[0] % 16);
    let nz = usize::from(data[1] % 16);
    let body = &data[2..];

    for with_metadata in [false, true] {
        let parser = TableParser::new(nd, nz).with_metadata(with_metadata);
        if let Ok(table) = parser.from_reader(Cursor::new(body)) {
            assert_eq!(table.values().len(), nd * nz);
        }
    }
});
