//! Brightness state machine
//!
//! The heart of the application: the quantized stepping algorithm, the
//! two-mode range policy, and the broadcast-and-persist operation that pushes
//! a boost level to every active display.
//!
//! # Architecture
//!
//! - `RangeMode`: maps the persisted mode tag to its brightness ceiling
//! - `step`: pure function computing the next value from a direction command
//! - `MonitorBroadcaster`: best-effort apply to all displays, then persist
//!
//! All numeric rules live in `stepper`; nothing else in the crate does
//! brightness arithmetic.

pub mod broadcaster;
pub mod range;
pub mod stepper;

pub use broadcaster::MonitorBroadcaster;
pub use range::{CEILING_EXTENDED, CEILING_NORMAL, RangeMode};
pub use stepper::{MIN_BRIGHTNESS, STEP, StepDirection, step};
