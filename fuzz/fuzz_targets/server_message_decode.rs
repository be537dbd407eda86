//! Fuzz target for ServerMessage::from_json
//!
//! This fuzzer feeds arbitrary text frames to the inbound decoder to find:
//! - Panics on malformed JSON or wrong field types
//! - Wall rows with unexpected characters or lengths
//! - Coordinates that overflow or go negative
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wallgame_proto::ServerMessage;

fuzz_target!(|data: &[u8]| {
    // Text frames are UTF-8 by definition
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(message) = ServerMessage::from_json(text) {
        // Anything that decodes must encode again
        let _ = message.to_json();
    }
});
