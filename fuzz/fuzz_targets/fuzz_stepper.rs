#![no_main]

use brightness_tray::brightness::{MIN_BRIGHTNESS, RangeMode, StepDirection, step};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f64, bool, bool)| {
    let (current, up, extended) = input;
    let direction = if up {
        StepDirection::Up
    } else {
        StepDirection::Down
    };
    let ceiling = if extended {
        RangeMode::Extended.ceiling()
    } else {
        RangeMode::Normal.ceiling()
    };

    // Any input (including NaN and infinities from the debug-set path) must
    // produce either a no-change or a finite value inside the active range.
    if let Some(next) = step(current, direction, ceiling) {
        assert!(next.is_finite());
        assert!(next >= MIN_BRIGHTNESS);
        assert!(next <= ceiling);
    }
});
