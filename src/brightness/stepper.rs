//! Quantized brightness stepping
//!
//! Pure function computing the next boost level from the current value, a
//! direction command, and the active ceiling. Values normally live on a
//! 0.5 grid; arbitrary values can enter through the unrestricted debug-set
//! path and are snapped back onto the grid in the direction of travel, so
//! any starting point converges onto a canonical half-step within one step.

/// Lowest boost level the stepper will produce
pub const MIN_BRIGHTNESS: f64 = 1.0;

/// Grid size for quantized stepping
pub const STEP: f64 = 0.5;

/// Floating-point tolerance for the on-grid check
const EPSILON: f64 = 0.0001;

/// Direction of a brightness step command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Increase brightness
    Up,
    /// Decrease brightness
    Down,
}

/// Compute the next brightness value, or `None` when the current value is
/// already at the boundary in the requested direction.
///
/// `None` is a legitimate outcome: the caller must not apply or persist
/// anything and should report the boundary condition instead.
///
/// The rules, in order:
/// 1. below the floor: stepping up lands on `MIN_BRIGHTNESS + STEP`,
///    stepping down is a no-change
/// 2. above the ceiling: stepping down lands on `ceiling - STEP` (clamped to
///    the floor), stepping up is a no-change
/// 3. on-grid values move by one `STEP`; off-grid values snap to the next
///    half-step in the direction of travel
/// 4. results clamp to `[MIN_BRIGHTNESS, ceiling]`; a clamp that lands back
///    on the current value is a no-change
pub fn step(current: f64, direction: StepDirection, ceiling: f64) -> Option<f64> {
    if current < MIN_BRIGHTNESS {
        return match direction {
            StepDirection::Up => Some(MIN_BRIGHTNESS + STEP),
            StepDirection::Down => None,
        };
    }

    if current > ceiling {
        return match direction {
            StepDirection::Up => None,
            StepDirection::Down => Some((ceiling - STEP).max(MIN_BRIGHTNESS)),
        };
    }

    // Work on doubled values so the 0.5 grid becomes the integer grid.
    let doubled = current * 2.0;
    let on_grid = (doubled - doubled.round()).abs() < EPSILON;

    let next = match direction {
        StepDirection::Up => {
            let candidate = if on_grid {
                current + STEP
            } else {
                doubled.ceil() / 2.0
            };
            candidate.min(ceiling)
        }
        StepDirection::Down => {
            let candidate = if on_grid {
                current - STEP
            } else {
                doubled.floor() / 2.0
            };
            candidate.max(MIN_BRIGHTNESS)
        }
    };

    if (next - current).abs() < EPSILON {
        None
    } else {
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::range::{CEILING_EXTENDED, CEILING_NORMAL};
    use proptest::prelude::*;

    #[test]
    fn test_plain_step_up() {
        assert_eq!(step(3.0, StepDirection::Up, CEILING_NORMAL), Some(3.5));
        assert_eq!(step(1.0, StepDirection::Up, CEILING_NORMAL), Some(1.5));
        assert_eq!(step(5.5, StepDirection::Up, CEILING_NORMAL), Some(6.0));
    }

    #[test]
    fn test_plain_step_down() {
        assert_eq!(step(3.5, StepDirection::Down, CEILING_NORMAL), Some(3.0));
        assert_eq!(step(1.5, StepDirection::Down, CEILING_NORMAL), Some(1.0));
    }

    #[test]
    fn test_no_change_at_ceiling() {
        assert_eq!(step(6.0, StepDirection::Up, CEILING_NORMAL), None);
        assert_eq!(step(12.0, StepDirection::Up, CEILING_EXTENDED), None);
    }

    #[test]
    fn test_no_change_at_floor() {
        assert_eq!(step(1.0, StepDirection::Down, CEILING_NORMAL), None);
    }

    #[test]
    fn test_below_floor_guard() {
        assert_eq!(step(0.25, StepDirection::Up, CEILING_NORMAL), Some(1.5));
        assert_eq!(step(0.25, StepDirection::Down, CEILING_NORMAL), None);
        assert_eq!(step(-3.0, StepDirection::Up, CEILING_NORMAL), Some(1.5));
    }

    #[test]
    fn test_above_ceiling_guard() {
        // Debug-set can leave the value above the active ceiling, e.g. after
        // switching out of extended mode.
        assert_eq!(step(9.0, StepDirection::Down, CEILING_NORMAL), Some(5.5));
        assert_eq!(step(9.0, StepDirection::Up, CEILING_NORMAL), None);
        // ceiling - STEP would undershoot a floor-adjacent ceiling
        assert_eq!(step(2.0, StepDirection::Down, 1.2), Some(1.0));
    }

    #[test]
    fn test_off_grid_snaps_up() {
        // ceil(11.4) / 2 = 6.0, already at the ceiling
        assert_eq!(step(5.7, StepDirection::Up, CEILING_NORMAL), Some(6.0));
        assert_eq!(step(3.2, StepDirection::Up, CEILING_NORMAL), Some(3.5));
        assert_eq!(step(3.7, StepDirection::Up, CEILING_NORMAL), Some(4.0));
    }

    #[test]
    fn test_off_grid_snaps_down() {
        // floor(23.6) / 2 = 11.5
        assert_eq!(step(11.8, StepDirection::Down, CEILING_EXTENDED), Some(11.5));
        assert_eq!(step(3.2, StepDirection::Down, CEILING_NORMAL), Some(3.0));
    }

    #[test]
    fn test_off_grid_up_clamps_to_ceiling() {
        assert_eq!(step(5.9, StepDirection::Up, CEILING_NORMAL), Some(6.0));
    }

    // Same tolerance as the stepper so both sides classify values alike.
    fn on_grid(value: f64) -> bool {
        let doubled = value * 2.0;
        (doubled - doubled.round()).abs() < EPSILON
    }

    proptest! {
        /// Any up-step result stays at or below the ceiling.
        #[test]
        fn prop_up_never_exceeds_ceiling(current in -2.0f64..16.0) {
            if let Some(next) = step(current, StepDirection::Up, CEILING_NORMAL) {
                prop_assert!(next <= CEILING_NORMAL);
            }
        }

        /// Any down-step result stays at or above the floor.
        #[test]
        fn prop_down_never_undershoots_floor(current in -2.0f64..16.0) {
            if let Some(next) = step(current, StepDirection::Down, CEILING_NORMAL) {
                prop_assert!(next >= MIN_BRIGHTNESS);
            }
        }

        /// Off-grid values converge onto the half-step grid in one step,
        /// moving in the direction of travel.
        #[test]
        fn prop_off_grid_convergence(current in 1.0f64..6.0) {
            prop_assume!(!on_grid(current));
            let up = step(current, StepDirection::Up, CEILING_NORMAL)
                .expect("off-grid in range always moves up");
            prop_assert!(on_grid(up));
            prop_assert!(up >= current);
            let down = step(current, StepDirection::Down, CEILING_NORMAL)
                .expect("off-grid in range always moves down");
            prop_assert!(on_grid(down));
            prop_assert!(down <= current);
        }

        /// On-grid values strictly below the ceiling step up and back down
        /// to where they started.
        #[test]
        fn prop_up_down_round_trip(halves in 2u32..11) {
            let current = f64::from(halves) * STEP;
            let up = step(current, StepDirection::Up, CEILING_NORMAL)
                .expect("room to step up");
            let back = step(up, StepDirection::Down, CEILING_NORMAL)
                .expect("room to step down");
            prop_assert!((back - current).abs() < 1e-9);
        }
    }
}
