//! # fightmove - Special-move recognition for fighting games
//!
//! Recognizes motion inputs ("down, down-forward, forward + punch") from a
//! rolling buffer of classified controller samples and decides, every time
//! the buffer changes, which authored move has just been completed.
//!
//! ## Features
//!
//! - **Deduplicating input buffer**: 30 most recent stick/button changes per player
//! - **Facing-aware motions**: one authored motion works for both sides of the screen
//! - **Timing windows**: correct sequences entered too slowly do not count
//! - **Specificity**: the longest satisfied motion wins over incidental sub-motions
//! - **Standard actions**: walking, crouching, and normals when no special fires
//!
//! ## Architecture
//!
//! - [`input`] - Sample model, clocks, and the per-player input buffer
//! - [`motion`] - Move catalog, facing normalization, matcher, and fallback
//! - [`fighter`] - Per-player pipeline tying a buffer to a shared catalog
//! - [`animation`] - Binding table from match results to animation commands
//! - [`replay`] - Deterministic replay of recorded frames
//! - `config` - TOML catalogs and replay scripts (feature `config`)
//! - [`error`] - Centralized error types for the fallible edges

pub mod error;
pub mod input;
pub mod motion;

pub mod animation;
pub mod fighter;
pub mod replay;

#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types for convenience
pub use error::{FightMoveError, Result};

pub use fighter::{Fighter, PlayerId};
pub use input::{ButtonCategory, Direction, InputBuffer, Sample};
pub use motion::{FighterDirection, MatchResult, MotionMatcher, MoveCatalog, MoveDefinition};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
