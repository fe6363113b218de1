#![no_main]

use brightness_tray::brightness::RangeMode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The registry hands back arbitrary strings; parsing must never panic
    // and the canonical representation must round-trip.
    if let Ok(raw) = std::str::from_utf8(data) {
        let mode = RangeMode::from_persisted(raw);
        assert_eq!(RangeMode::from_persisted(mode.as_str()), mode);

        // The brightness value travels the same path
        let _ = raw.parse::<f64>();
    }
});
