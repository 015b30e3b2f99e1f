//! Motion recognition: authored move data, facing normalization, the matcher
//! itself, and the standard-action fallback.

pub mod catalog;
pub mod fallback;
pub mod matcher;
pub mod normalize;

pub use catalog::{
    CatalogIssue, Motion, MoveCatalog, MoveDefinition, OutputTag, MAX_AUTHORED_WINDOW,
    MAX_SEQUENCE_LEN, MIN_AUTHORED_WINDOW,
};
pub use fallback::{fallback, Attack, Locomotion, StandardAction};
pub use matcher::{
    activated_moves, relevant_inputs, resolve, ActivatedMove, MatchResult, MotionMatcher,
};
pub use normalize::{normalize, FighterDirection};
