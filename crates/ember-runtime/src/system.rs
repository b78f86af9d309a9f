//! Runtime system trait

use crate::FrameClock;
use ember_core::Result;

/// A simulation that can be ticked by the frame loop
///
/// Systems are updated in registration order, once per frame, with the clock
/// already advanced to the current frame.
pub trait RuntimeSystem {
    /// Called once before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame
    fn update(&mut self, clock: &FrameClock) -> Result<()>;

    /// Called when the loop is shutting down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
