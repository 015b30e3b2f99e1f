//! Facing-relative direction handling.
//!
//! Motions are authored for one facing. When the fighter currently faces the
//! other way, the horizontal half of every authored direction is flipped before
//! it is compared against the stick.

use crate::error::FightMoveError;
use crate::input::Direction;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "config")]
use serde::Deserialize;

/// Which way a fighter is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum FighterDirection {
    Left,
    #[default]
    Right,
}

impl FighterDirection {
    pub fn flipped(self) -> Self {
        match self {
            FighterDirection::Left => FighterDirection::Right,
            FighterDirection::Right => FighterDirection::Left,
        }
    }
}

impl fmt::Display for FighterDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FighterDirection::Left => f.write_str("left"),
            FighterDirection::Right => f.write_str("right"),
        }
    }
}

impl FromStr for FighterDirection {
    type Err = FightMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(FighterDirection::Left),
            "right" => Ok(FighterDirection::Right),
            other => Err(FightMoveError::invalid_argument(format!(
                "facing must be 'left' or 'right', got '{other}'"
            ))),
        }
    }
}

/// Map an authored direction onto the stick direction expected while facing
/// `current_facing`.
pub fn normalize(
    raw: Direction,
    motion_facing: FighterDirection,
    current_facing: FighterDirection,
) -> Direction {
    if motion_facing == current_facing {
        raw
    } else {
        raw.mirrored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FighterDirection::{Left, Right};

    #[test]
    fn same_facing_is_identity() {
        for direction in [Direction::Left, Direction::RightDown, Direction::Up] {
            assert_eq!(normalize(direction, Right, Right), direction);
            assert_eq!(normalize(direction, Left, Left), direction);
        }
    }

    #[test]
    fn opposite_facing_mirrors_horizontal_directions() {
        assert_eq!(normalize(Direction::Left, Right, Left), Direction::Right);
        assert_eq!(normalize(Direction::Right, Right, Left), Direction::Left);
        assert_eq!(normalize(Direction::LeftUp, Left, Right), Direction::RightUp);
        assert_eq!(normalize(Direction::RightDown, Left, Right), Direction::LeftDown);
    }

    #[test]
    fn vertical_and_sentinel_directions_pass_through() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Neutral,
            Direction::Unknown,
        ] {
            assert_eq!(normalize(direction, Right, Left), direction);
        }
    }

    #[test]
    fn two_flips_return_the_original() {
        let once = normalize(Direction::Left, Right, Left);
        assert_eq!(once, Direction::Right);
        assert_eq!(normalize(once, Left, Right), Direction::Left);
    }

    #[test]
    fn facing_parses_from_the_command_line() {
        assert_eq!("left".parse::<FighterDirection>().unwrap(), Left);
        assert_eq!(" Right ".parse::<FighterDirection>().unwrap(), Right);

        let err = "up".parse::<FighterDirection>().unwrap_err();
        assert!(matches!(err, FightMoveError::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid argument: facing must be 'left' or 'right', got 'up'"
        );
    }
}
