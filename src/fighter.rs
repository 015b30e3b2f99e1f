//! Per-player input pipeline.
//!
//! A [`Fighter`] owns one controller's buffer, the clock used to timestamp its
//! samples, and the facing that game logic updates. Catalogs are shared, so
//! two players can run the same move list without sharing any mutable state.

use crate::input::{
    ButtonCategory, Clock, Direction, InputBuffer, InputHistory, Sample, SubscriptionId,
    SystemClock,
};
use crate::motion::{FighterDirection, MatchResult, MotionMatcher, MoveCatalog};
use std::fmt;
use std::sync::Arc;

/// Identity of a monitored controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(1);
    pub const TWO: PlayerId = PlayerId(2);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Buffer, matcher, and facing for one player.
pub struct Fighter<C: Clock = SystemClock> {
    player: PlayerId,
    buffer: InputBuffer,
    matcher: MotionMatcher,
    facing: FighterDirection,
    clock: C,
    last_result: Option<MatchResult>,
}

impl Fighter<SystemClock> {
    /// Fighter timestamped by wall-clock time, facing right.
    pub fn new(player: PlayerId, catalog: Arc<MoveCatalog>) -> Self {
        Self::with_clock(player, catalog, SystemClock::new())
    }
}

impl<C: Clock> Fighter<C> {
    pub fn with_clock(player: PlayerId, catalog: Arc<MoveCatalog>, clock: C) -> Self {
        Self {
            player,
            buffer: InputBuffer::new(),
            matcher: MotionMatcher::new(catalog),
            facing: FighterDirection::default(),
            clock,
            last_result: None,
        }
    }

    /// Timestamp a classified reading and feed it through the pipeline.
    pub fn submit(&mut self, direction: Direction, button: ButtonCategory) -> Option<MatchResult> {
        let sample = Sample::new(direction, button, self.clock.now());
        self.push_sample(sample)
    }

    /// Feed an already timestamped sample. Returns the match result when the
    /// buffer accepted it, `None` for duplicates and no-signal samples.
    pub fn push_sample(&mut self, sample: Sample) -> Option<MatchResult> {
        if !self.buffer.push(sample) {
            return None;
        }

        let result = self
            .matcher
            .on_buffer_changed(self.buffer.history(), self.facing);
        if let MatchResult::Special(activated) = &result {
            log::debug!("{} performed {}", self.player, activated.name);
        }
        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Subscribe to accepted pushes on this fighter's buffer.
    pub fn on_buffer_change<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&InputHistory) + Send + 'static,
    {
        self.buffer.on_change(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.buffer.unsubscribe(id)
    }

    pub fn set_facing(&mut self, facing: FighterDirection) {
        if facing != self.facing {
            log::trace!("{} now facing {}", self.player, facing);
        }
        self.facing = facing;
    }

    pub fn facing(&self) -> FighterDirection {
        self.facing
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn catalog(&self) -> &Arc<MoveCatalog> {
        self.matcher.catalog()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Result of the most recent accepted sample.
    pub fn last_result(&self) -> Option<&MatchResult> {
        self.last_result.as_ref()
    }

    /// Forget buffered input, e.g. between rounds.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_result = None;
    }
}

impl<C: Clock> fmt::Debug for Fighter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fighter")
            .field("player", &self.player)
            .field("facing", &self.facing)
            .field("buffer", &self.buffer)
            .finish()
    }
}
