//! Special-move recognition over a player's input history.
//!
//! Every accepted sample triggers one pass over the catalog. A move is checked
//! against the last `sequence.len() + 1` relevant samples: each directional
//! step must line up with the facing-corrected authored direction, the final
//! sample must carry the required button, and the whole window must have been
//! entered within the move's input window. Of all moves satisfied by the same
//! tail, the one with the longest motion wins; earlier catalog entries win ties.
//! When nothing fires, the most recent sample is turned into a standard action.

use crate::input::{Direction, InputHistory, Sample};
use crate::motion::catalog::{MoveCatalog, MoveDefinition, OutputTag};
use crate::motion::fallback::{fallback, StandardAction};
use crate::motion::normalize::{normalize, FighterDirection};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A catalog move whose motion, button, and timing were all satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedMove {
    /// Position of the definition in its catalog.
    pub catalog_index: usize,
    pub name: String,
    pub output_tag: OutputTag,
    pub sequence_len: usize,
    /// Time between the first and last sample of the matched window.
    pub elapsed: Duration,
}

/// Outcome of one matching pass. Exactly one is produced per accepted sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Special(ActivatedMove),
    Standard(StandardAction),
}

impl MatchResult {
    pub fn special(&self) -> Option<&ActivatedMove> {
        match self {
            MatchResult::Special(activated) => Some(activated),
            MatchResult::Standard(_) => None,
        }
    }

    pub fn standard(&self) -> Option<&StandardAction> {
        match self {
            MatchResult::Special(_) => None,
            MatchResult::Standard(action) => Some(action),
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, MatchResult::Special(_))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Special(activated) => write!(
                f,
                "special {} [{}] in {}ms",
                activated.name,
                activated.output_tag,
                activated.elapsed.as_millis()
            ),
            MatchResult::Standard(action) => write!(f, "standard {action}"),
        }
    }
}

/// Why a move did not fire this pass. Only ever logged.
#[derive(Debug)]
enum Rejection {
    InsufficientHistory,
    DirectionMismatch {
        position: usize,
        expected: Direction,
        actual: Direction,
    },
    WrongButton,
    TooSlow {
        elapsed: Duration,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InsufficientHistory => f.write_str("not enough history"),
            Rejection::DirectionMismatch {
                position,
                expected,
                actual,
            } => write!(f, "step {position} expected {expected}, got {actual}"),
            Rejection::WrongButton => f.write_str("wrong button"),
            Rejection::TooSlow { elapsed } => write!(f, "too slow ({}ms)", elapsed.as_millis()),
        }
    }
}

/// Collect the `count` most recent relevant samples, oldest first.
///
/// With `ignore_neutral`, resting samples (neutral stick, no button) are
/// skipped and do not count. Returns an empty vector when the history cannot
/// supply `count` samples.
pub fn relevant_inputs(history: &InputHistory, count: usize, ignore_neutral: bool) -> Vec<Sample> {
    if count > history.len() {
        return Vec::new();
    }

    let mut window: Vec<Sample> = history
        .iter()
        .filter(|sample| !(ignore_neutral && sample.is_resting()))
        .take(count)
        .copied()
        .collect();

    if window.len() < count {
        return Vec::new();
    }
    window.reverse();
    window
}

fn evaluate(
    definition: &MoveDefinition,
    history: &InputHistory,
    facing: FighterDirection,
) -> Result<Duration, Rejection> {
    let required = definition.window_len();
    if history.len() <= required {
        return Err(Rejection::InsufficientHistory);
    }

    let motion = &definition.motion;
    let window = relevant_inputs(history, required, motion.ignore_neutral);
    let Some((last, steps)) = window.split_last() else {
        return Err(Rejection::InsufficientHistory);
    };
    if steps.len() < motion.len() {
        return Err(Rejection::InsufficientHistory);
    }

    for (position, (authored, sample)) in motion.sequence.iter().zip(steps).enumerate() {
        let expected = normalize(*authored, motion.canonical_facing, facing);
        if sample.direction != expected {
            return Err(Rejection::DirectionMismatch {
                position,
                expected,
                actual: sample.direction,
            });
        }
    }

    if !definition.required_button.accepts(last.button) {
        return Err(Rejection::WrongButton);
    }

    let elapsed = last.timestamp.saturating_sub(window[0].timestamp);
    if elapsed > definition.input_window {
        return Err(Rejection::TooSlow { elapsed });
    }
    Ok(elapsed)
}

/// Every move in `catalog` satisfied by the current history, in catalog order.
pub fn activated_moves(
    history: &InputHistory,
    catalog: &MoveCatalog,
    facing: FighterDirection,
) -> Vec<ActivatedMove> {
    catalog
        .iter()
        .enumerate()
        .filter_map(
            |(catalog_index, definition)| match evaluate(definition, history, facing) {
                Ok(elapsed) => Some(ActivatedMove {
                    catalog_index,
                    name: definition.name.clone(),
                    output_tag: definition.output_tag.clone(),
                    sequence_len: definition.motion.len(),
                    elapsed,
                }),
                Err(rejection) => {
                    log::trace!("{} not activated: {}", definition.name, rejection);
                    None
                }
            },
        )
        .collect()
}

/// Run one full matching pass and pick the result for this sample.
pub fn resolve(
    history: &InputHistory,
    catalog: &MoveCatalog,
    facing: FighterDirection,
) -> MatchResult {
    let chosen = activated_moves(history, catalog, facing)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.sequence_len > best.sequence_len {
                candidate
            } else {
                best
            }
        });

    if let Some(activated) = chosen {
        log::debug!(
            "activated {} ({} steps, {}ms)",
            activated.name,
            activated.sequence_len,
            activated.elapsed.as_millis()
        );
        return MatchResult::Special(activated);
    }

    let action = history
        .head()
        .map(fallback)
        .unwrap_or_else(StandardAction::idle);
    log::debug!("no special move, falling back to {action}");
    MatchResult::Standard(action)
}

/// Matcher bound to a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct MotionMatcher {
    catalog: Arc<MoveCatalog>,
}

impl MotionMatcher {
    pub fn new(catalog: Arc<MoveCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<MoveCatalog> {
        &self.catalog
    }

    pub fn activated_moves(
        &self,
        history: &InputHistory,
        facing: FighterDirection,
    ) -> Vec<ActivatedMove> {
        activated_moves(history, &self.catalog, facing)
    }

    /// Entry point for buffer-change events.
    pub fn on_buffer_changed(&self, history: &InputHistory, facing: FighterDirection) -> MatchResult {
        resolve(history, &self.catalog, facing)
    }
}
