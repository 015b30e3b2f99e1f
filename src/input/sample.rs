//! Value types for a single classified controller sample.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::Deserialize;

/// Stick direction after axis thresholding.
///
/// `Unknown` is the no-signal sentinel reported when the platform adapter could
/// not classify the stick at all; it is never stored in an input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Direction {
    Left,
    LeftDown,
    Down,
    RightDown,
    Right,
    RightUp,
    Up,
    LeftUp,
    Neutral,
    Unknown,
}

impl Direction {
    /// Swap the horizontal component, leaving vertical-only directions alone.
    pub fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::LeftUp => Direction::RightUp,
            Direction::RightUp => Direction::LeftUp,
            Direction::LeftDown => Direction::RightDown,
            Direction::RightDown => Direction::LeftDown,
            other => other,
        }
    }

    /// True for the three downward directions.
    pub fn is_down(self) -> bool {
        matches!(
            self,
            Direction::Down | Direction::LeftDown | Direction::RightDown
        )
    }

    /// True for pure horizontal directions.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Short arrow-style label used in logs and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "L",
            Direction::LeftDown => "LD",
            Direction::Down => "D",
            Direction::RightDown => "RD",
            Direction::Right => "R",
            Direction::RightUp => "RU",
            Direction::Up => "U",
            Direction::LeftUp => "LU",
            Direction::Neutral => "N",
            Direction::Unknown => "?",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Button category pressed with a sample, or required by a move.
///
/// `AnyPunch` and `AnyKick` are wildcards for move definitions only. Samples
/// always carry a concrete button or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum ButtonCategory {
    LightPunch,
    MediumPunch,
    HeavyPunch,
    AnyPunch,
    LightKick,
    MediumKick,
    HeavyKick,
    AnyKick,
    None,
}

impl ButtonCategory {
    pub fn is_punch(self) -> bool {
        matches!(
            self,
            ButtonCategory::LightPunch | ButtonCategory::MediumPunch | ButtonCategory::HeavyPunch
        )
    }

    pub fn is_kick(self) -> bool {
        matches!(
            self,
            ButtonCategory::LightKick | ButtonCategory::MediumKick | ButtonCategory::HeavyKick
        )
    }

    /// True for the requirement-only wildcards.
    pub fn is_wildcard(self) -> bool {
        matches!(self, ButtonCategory::AnyPunch | ButtonCategory::AnyKick)
    }

    /// Whether a sample carrying `actual` satisfies this requirement.
    pub fn accepts(self, actual: ButtonCategory) -> bool {
        match self {
            ButtonCategory::AnyPunch => actual.is_punch(),
            ButtonCategory::AnyKick => actual.is_kick(),
            required => required == actual,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonCategory::LightPunch => "LP",
            ButtonCategory::MediumPunch => "MP",
            ButtonCategory::HeavyPunch => "HP",
            ButtonCategory::AnyPunch => "P",
            ButtonCategory::LightKick => "LK",
            ButtonCategory::MediumKick => "MK",
            ButtonCategory::HeavyKick => "HK",
            ButtonCategory::AnyKick => "K",
            ButtonCategory::None => "-",
        }
    }
}

impl fmt::Display for ButtonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified controller reading.
///
/// `timestamp` is an offset from the owning clock's monotonic origin, so a
/// stream of samples compares and subtracts exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub direction: Direction,
    pub button: ButtonCategory,
    pub timestamp: Duration,
}

impl Sample {
    pub fn new(direction: Direction, button: ButtonCategory, timestamp: Duration) -> Self {
        Self {
            direction,
            button,
            timestamp,
        }
    }

    /// Stick centred with no button held.
    pub fn is_resting(&self) -> bool {
        self.direction == Direction::Neutral && self.button == ButtonCategory::None
    }

    /// Same stick position and button as `other`, ignoring time.
    pub fn same_input(&self, other: &Sample) -> bool {
        self.direction == other.direction && self.button == other.button
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{}@{}ms",
            self.direction,
            self.button,
            self.timestamp.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_swaps_horizontal_components_only() {
        assert_eq!(Direction::Left.mirrored(), Direction::Right);
        assert_eq!(Direction::RightDown.mirrored(), Direction::LeftDown);
        assert_eq!(Direction::LeftUp.mirrored(), Direction::RightUp);
        assert_eq!(Direction::Up.mirrored(), Direction::Up);
        assert_eq!(Direction::Down.mirrored(), Direction::Down);
        assert_eq!(Direction::Neutral.mirrored(), Direction::Neutral);
        assert_eq!(Direction::Unknown.mirrored(), Direction::Unknown);
    }

    #[test]
    fn wildcards_accept_their_family() {
        assert!(ButtonCategory::AnyPunch.accepts(ButtonCategory::HeavyPunch));
        assert!(!ButtonCategory::AnyPunch.accepts(ButtonCategory::LightKick));
        assert!(!ButtonCategory::AnyPunch.accepts(ButtonCategory::None));
        assert!(ButtonCategory::AnyKick.accepts(ButtonCategory::MediumKick));
        assert!(!ButtonCategory::AnyKick.accepts(ButtonCategory::AnyKick));
    }

    #[test]
    fn concrete_requirements_need_exact_button() {
        assert!(ButtonCategory::LightPunch.accepts(ButtonCategory::LightPunch));
        assert!(!ButtonCategory::LightPunch.accepts(ButtonCategory::MediumPunch));
        assert!(ButtonCategory::None.accepts(ButtonCategory::None));
    }

    #[test]
    fn resting_sample_is_neutral_without_button() {
        let t = Duration::ZERO;
        assert!(Sample::new(Direction::Neutral, ButtonCategory::None, t).is_resting());
        assert!(!Sample::new(Direction::Neutral, ButtonCategory::LightKick, t).is_resting());
        assert!(!Sample::new(Direction::Down, ButtonCategory::None, t).is_resting());
    }

    #[test]
    fn display_is_compact() {
        let sample = Sample::new(
            Direction::RightDown,
            ButtonCategory::HeavyKick,
            Duration::from_millis(120),
        );
        assert_eq!(sample.to_string(), "RD+HK@120ms");
    }
}
