//! Input abstraction for the frame loop
//!
//! Raw terminal events are folded into one [`InputFrame`] per tick:
//! - keys newly pressed during the tick
//! - keys currently held down
//! - accumulated mouse movement

mod frame;
mod tracker;

pub use frame::InputFrame;
pub use tracker::KeyTracker;
