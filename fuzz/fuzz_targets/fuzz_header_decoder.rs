#![no_main]

use libfuzzer_sys::fuzz_target;

use ttgrid::format::{decode_header, encode_header};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that decodes must survive a second trip unchanged
    if let Ok(header) = decode_header(text) {
        let reencoded = encode_header(&header);
        assert_eq!(decode_header(&reencoded).ok(), Some(header));
    }
});
