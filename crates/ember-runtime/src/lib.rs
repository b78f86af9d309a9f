//! Ember Runtime - Frame loop infrastructure
//!
//! Provides the building blocks shared by every simulation core:
//! - `FrameClock`: monotonic time source with a clamped, non-negative frame delta
//! - `RuntimeSystem`: trait for simulations ticked once per frame

mod clock;
mod system;

pub use clock::{FrameClock, MAX_FRAME_DELTA};
pub use system::RuntimeSystem;
