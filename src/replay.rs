//! Deterministic replay of recorded input frames.
//!
//! Frames carry their own timestamps, so replaying the same frames against the
//! same catalog always produces the same results. This is what the CLI and the
//! regression tests drive.

use crate::fighter::{Fighter, PlayerId};
use crate::input::{ButtonCategory, Direction, Sample};
use crate::motion::{FighterDirection, MatchResult, MoveCatalog};
use std::sync::Arc;
use std::time::Duration;

/// One recorded controller reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFrame {
    pub direction: Direction,
    pub button: ButtonCategory,
    /// Offset from the start of the recording.
    pub at: Duration,
}

impl InputFrame {
    pub fn new(direction: Direction, button: ButtonCategory, at: Duration) -> Self {
        Self {
            direction,
            button,
            at,
        }
    }

    pub fn to_sample(self) -> Sample {
        Sample::new(self.direction, self.button, self.at)
    }
}

/// Result of a frame the buffer accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayEvent {
    /// Index of the frame in the input slice.
    pub frame: usize,
    pub at: Duration,
    pub result: MatchResult,
}

/// Feed `frames` through a fresh fighter and collect one event per accepted frame.
pub fn replay(
    frames: &[InputFrame],
    catalog: Arc<MoveCatalog>,
    player: PlayerId,
    facing: FighterDirection,
) -> Vec<ReplayEvent> {
    let mut fighter = Fighter::new(player, catalog);
    fighter.set_facing(facing);

    frames
        .iter()
        .enumerate()
        .filter_map(|(index, frame)| {
            fighter
                .push_sample(frame.to_sample())
                .map(|result| ReplayEvent {
                    frame: index,
                    at: frame.at,
                    result,
                })
        })
        .collect()
}
