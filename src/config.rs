//! TOML configuration: move catalogs, animation bindings, and replay scripts.
//!
//! Catalog files may define named motions once and reference them from several
//! moves, mirroring how motion assets are shared between moves in authoring
//! tools:
//!
//! ```toml
//! [motions.quarter_circle_forward]
//! sequence = ["down", "right_down", "right"]
//! ignore_neutral = true
//! facing = "right"
//!
//! [[moves]]
//! name = "Fireball"
//! motion = "quarter_circle_forward"
//! button = "any_punch"
//! input_window_ms = 300
//! output_tag = "fireball"
//!
//! [animation.walking]
//! name = "Walking"
//! kind = "bool"
//! ```
//!
//! Validation problems are reported through `log::warn!` and do not stop a
//! catalog from loading; callers wanting strict behaviour use
//! [`MoveCatalog::ensure_valid`].

use crate::animation::AnimationBindings;
use crate::error::{FightMoveError, Result};
use crate::input::{ButtonCategory, Direction};
use crate::motion::{FighterDirection, Motion, MoveCatalog, MoveDefinition};
use crate::replay::InputFrame;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up under the user's configuration directory.
pub const DEFAULT_CATALOG_FILE: &str = "moves.toml";
const CONFIG_DIR_NAME: &str = "fightmove";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    motions: BTreeMap<String, MotionSpec>,
    #[serde(default)]
    moves: Vec<MoveSpec>,
    #[serde(default)]
    animation: AnimationBindings,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotionSpec {
    sequence: Vec<Direction>,
    #[serde(default)]
    ignore_neutral: bool,
    #[serde(default)]
    facing: FighterDirection,
}

impl MotionSpec {
    fn to_motion(&self) -> Motion {
        Motion {
            sequence: self.sequence.clone(),
            ignore_neutral: self.ignore_neutral,
            canonical_facing: self.facing,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoveSpec {
    name: String,
    /// Reference into `[motions]`.
    motion: Option<String>,
    /// Inline motion, used when `motion` is absent.
    sequence: Option<Vec<Direction>>,
    #[serde(default)]
    ignore_neutral: bool,
    #[serde(default)]
    facing: FighterDirection,
    button: ButtonCategory,
    input_window_ms: u64,
    /// Defaults to the move name.
    output_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptFile {
    facing: Option<FighterDirection>,
    #[serde(default)]
    frames: Vec<FrameSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrameSpec {
    direction: Direction,
    #[serde(default = "no_button")]
    button: ButtonCategory,
    at_ms: u64,
}

fn no_button() -> ButtonCategory {
    ButtonCategory::None
}

/// Everything a catalog file describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FightConfig {
    pub catalog: MoveCatalog,
    pub animation: AnimationBindings,
}

/// A replay script: frames plus the facing they were recorded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayScript {
    pub facing: Option<FighterDirection>,
    pub frames: Vec<InputFrame>,
}

/// Parse a catalog file's contents.
pub fn parse_config(contents: &str) -> Result<FightConfig> {
    let file: CatalogFile = toml::from_str(contents)
        .map_err(|err| FightMoveError::config(format!("invalid catalog: {err}")))?;

    let mut catalog = MoveCatalog::default();
    for spec in file.moves {
        catalog.push(build_move(spec, &file.motions)?);
    }
    report_issues(&catalog);

    Ok(FightConfig {
        catalog,
        animation: file.animation,
    })
}

/// Parse only the move catalog from a catalog file's contents.
pub fn parse_catalog(contents: &str) -> Result<MoveCatalog> {
    parse_config(contents).map(|config| config.catalog)
}

pub fn load_config(path: &Path) -> Result<FightConfig> {
    parse_config(&read_file(path)?)
}

pub fn load_catalog(path: &Path) -> Result<MoveCatalog> {
    load_config(path).map(|config| config.catalog)
}

/// Parse a replay script. Frames must be in non-decreasing time order.
pub fn parse_script(contents: &str) -> Result<ReplayScript> {
    let file: ScriptFile = toml::from_str(contents)
        .map_err(|err| FightMoveError::config(format!("invalid replay script: {err}")))?;

    let mut frames = Vec::with_capacity(file.frames.len());
    for (index, spec) in file.frames.into_iter().enumerate() {
        let frame = InputFrame::new(
            spec.direction,
            spec.button,
            Duration::from_millis(spec.at_ms),
        );
        if let Some(previous) = frames.last().map(|previous: &InputFrame| previous.at) {
            if frame.at < previous {
                return Err(FightMoveError::config(format!(
                    "frame {index} at {}ms is earlier than the frame before it",
                    spec.at_ms
                )));
            }
        }
        frames.push(frame);
    }

    Ok(ReplayScript {
        facing: file.facing,
        frames,
    })
}

pub fn load_script(path: &Path) -> Result<ReplayScript> {
    parse_script(&read_file(path)?)
}

/// `<config dir>/fightmove/moves.toml`, when the platform has a config dir.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_CATALOG_FILE))
}

/// Log every validation issue in `catalog`. Returns how many were found.
pub fn report_issues(catalog: &MoveCatalog) -> usize {
    let issues = catalog.validate();
    for (definition, issue) in &issues {
        log::warn!("move '{}': {}", definition.name, issue);
    }
    issues.len()
}

fn build_move(spec: MoveSpec, motions: &BTreeMap<String, MotionSpec>) -> Result<MoveDefinition> {
    let motion = match (&spec.motion, &spec.sequence) {
        (Some(_), Some(_)) => {
            return Err(FightMoveError::config(format!(
                "move '{}' sets both `motion` and `sequence`",
                spec.name
            )))
        }
        (Some(reference), None) => motions
            .get(reference)
            .map(MotionSpec::to_motion)
            .ok_or_else(|| FightMoveError::UnknownMotion {
                motion: reference.clone(),
                referenced_by: spec.name.clone(),
            })?,
        (None, Some(sequence)) => Motion {
            sequence: sequence.clone(),
            ignore_neutral: spec.ignore_neutral,
            canonical_facing: spec.facing,
        },
        (None, None) => {
            return Err(FightMoveError::config(format!(
                "move '{}' needs a `motion` reference or an inline `sequence`",
                spec.name
            )))
        }
    };

    let output_tag = spec.output_tag.unwrap_or_else(|| spec.name.clone());
    Ok(MoveDefinition::new(
        spec.name,
        motion,
        spec.button,
        Duration::from_millis(spec.input_window_ms),
        output_tag,
    ))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => FightMoveError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FightMoveError::file_error(format!("failed to read {}", path.display()), err),
    })
}
