//! Authored move data: motions, move definitions, and the catalog a fighter
//! matches against.
//!
//! A catalog is built once (in code or through the `config` loader) and then
//! shared read-only between fighters. Nothing here is checked at match time;
//! [`MoveCatalog::validate`] is the offline pass for catching entries that
//! can never fire.

use crate::input::{ButtonCategory, Direction, BUFFER_CAPACITY};
use crate::motion::normalize::FighterDirection;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Shortest input window the authoring tools offer.
pub const MIN_AUTHORED_WINDOW: Duration = Duration::from_millis(100);
/// Longest input window the authoring tools offer.
pub const MAX_AUTHORED_WINDOW: Duration = Duration::from_millis(500);

/// Longest sequence that still fits in a full buffer alongside its button
/// step and the extra sample the matcher requires.
pub const MAX_SEQUENCE_LEN: usize = BUFFER_CAPACITY - 2;

/// The stick shape of a move, independent of the fighter's current facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motion {
    pub sequence: Vec<Direction>,
    /// Skip resting (neutral, no button) samples when collecting history.
    pub ignore_neutral: bool,
    /// Facing the sequence was authored for.
    pub canonical_facing: FighterDirection,
}

impl Motion {
    pub fn new(sequence: Vec<Direction>, canonical_facing: FighterDirection) -> Self {
        Self {
            sequence,
            ignore_neutral: false,
            canonical_facing,
        }
    }

    pub fn ignoring_neutral(mut self) -> Self {
        self.ignore_neutral = true;
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Opaque tag handed to the animation/combat layer when a move fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(transparent))]
pub struct OutputTag(String);

impl OutputTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OutputTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for OutputTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for OutputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDefinition {
    pub name: String,
    pub motion: Motion,
    /// Button on the final step. May be a wildcard.
    pub required_button: ButtonCategory,
    /// Longest time allowed between the first and last relevant sample.
    pub input_window: Duration,
    pub output_tag: OutputTag,
}

impl MoveDefinition {
    pub fn new(
        name: impl Into<String>,
        motion: Motion,
        required_button: ButtonCategory,
        input_window: Duration,
        output_tag: impl Into<OutputTag>,
    ) -> Self {
        Self {
            name: name.into(),
            motion,
            required_button,
            input_window,
            output_tag: output_tag.into(),
        }
    }

    /// Number of buffered samples the move inspects: one per direction plus
    /// the trailing button step.
    pub fn window_len(&self) -> usize {
        self.motion.len() + 1
    }

    /// Everything wrong with this entry, in a stable order.
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(CatalogIssue::EmptyName);
        }
        if self.output_tag.as_str().trim().is_empty() {
            issues.push(CatalogIssue::EmptyOutputTag);
        }
        if self.motion.len() > MAX_SEQUENCE_LEN {
            issues.push(CatalogIssue::SequenceTooLong {
                len: self.motion.len(),
                max: MAX_SEQUENCE_LEN,
            });
        }
        for (position, direction) in self.motion.sequence.iter().enumerate() {
            match direction {
                Direction::Unknown => issues.push(CatalogIssue::UnknownDirection { position }),
                Direction::Neutral if self.motion.ignore_neutral => {
                    issues.push(CatalogIssue::NeutralStepIgnored { position })
                }
                _ => {}
            }
        }
        if self.input_window.is_zero() && !self.motion.is_empty() {
            issues.push(CatalogIssue::ZeroInputWindow);
        } else if !self.motion.is_empty()
            && (self.input_window < MIN_AUTHORED_WINDOW || self.input_window > MAX_AUTHORED_WINDOW)
        {
            issues.push(CatalogIssue::WindowOutsideAuthoringRange {
                window_ms: self.input_window.as_millis(),
            });
        }

        issues
    }
}

/// A problem found by the offline validation pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("move name is empty")]
    EmptyName,

    #[error("output tag is empty")]
    EmptyOutputTag,

    #[error("sequence step {position} is Unknown, which never appears in buffered input")]
    UnknownDirection { position: usize },

    #[error("sequence step {position} is Neutral but resting samples are ignored")]
    NeutralStepIgnored { position: usize },

    #[error("input window is zero")]
    ZeroInputWindow,

    #[error("sequence has {len} steps, at most {max} fit in the input buffer")]
    SequenceTooLong { len: usize, max: usize },

    #[error("input window of {window_ms}ms is outside the usual 100-500ms range")]
    WindowOutsideAuthoringRange { window_ms: u128 },
}

impl CatalogIssue {
    /// Fatal issues mean the move can never fire. The rest are suspicious
    /// but matchable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CatalogIssue::WindowOutsideAuthoringRange { .. })
    }
}

/// Ordered, read-only collection of moves. Catalog order decides ties between
/// equally long motions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<MoveDefinition>,
}

impl MoveCatalog {
    pub fn new(moves: Vec<MoveDefinition>) -> Self {
        Self { moves }
    }

    pub fn with_move(mut self, definition: MoveDefinition) -> Self {
        self.moves.push(definition);
        self
    }

    pub fn push(&mut self, definition: MoveDefinition) {
        self.moves.push(definition);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveDefinition> {
        self.moves.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MoveDefinition> {
        self.moves.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&MoveDefinition> {
        self.moves.iter().find(|definition| definition.name == name)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Run the offline validation pass over every entry.
    pub fn validate(&self) -> Vec<(&MoveDefinition, CatalogIssue)> {
        self.moves
            .iter()
            .flat_map(|definition| {
                definition
                    .issues()
                    .into_iter()
                    .map(move |issue| (definition, issue))
            })
            .collect()
    }

    /// Fail on the first fatal issue.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        match self
            .validate()
            .into_iter()
            .find(|(_, issue)| issue.is_fatal())
        {
            Some((definition, issue)) => Err(crate::FightMoveError::malformed_move(
                definition.name.clone(),
                issue,
            )),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a MoveCatalog {
    type Item = &'a MoveDefinition;
    type IntoIter = std::slice::Iter<'a, MoveDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<MoveDefinition> for MoveCatalog {
    fn from_iter<I: IntoIterator<Item = MoveDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
