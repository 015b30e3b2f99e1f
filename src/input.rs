//! Input subsystem: classified samples, their timestamps, and the per-player
//! history the motion matcher reads.

pub mod buffer;
pub mod clock;
pub mod sample;

// Modules outside this crate should prefer importing from `crate::input`
// rather than reaching into submodules.
pub use buffer::{InputBuffer, InputHistory, SubscriptionId, BUFFER_CAPACITY};
pub use clock::{Clock, ManualClock, SystemClock};
pub use sample::{ButtonCategory, Direction, Sample};
