#![no_main]
use chess_console::console::Command;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Command::Move { from, to }) = Command::parse(s) {
            assert!(from.in_bounds() && to.in_bounds(), "input: {s:?}");
        }
    }
});
