//! Standard actions derived from a single sample when no special move fired.

use crate::input::{ButtonCategory, Sample};
use std::fmt;

#[cfg(feature = "config")]
use serde::Deserialize;

/// Movement implied by the stick alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locomotion {
    Walk,
    Crouch,
}

/// Normal attack implied by a concrete button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Attack {
    LightPunch,
    MediumPunch,
    HeavyPunch,
    LightKick,
    MediumKick,
    HeavyKick,
}

impl Attack {
    pub const ALL: [Attack; 6] = [
        Attack::LightPunch,
        Attack::MediumPunch,
        Attack::HeavyPunch,
        Attack::LightKick,
        Attack::MediumKick,
        Attack::HeavyKick,
    ];

    /// Wildcards and `None` have no attack of their own.
    pub fn from_button(button: ButtonCategory) -> Option<Self> {
        match button {
            ButtonCategory::LightPunch => Some(Attack::LightPunch),
            ButtonCategory::MediumPunch => Some(Attack::MediumPunch),
            ButtonCategory::HeavyPunch => Some(Attack::HeavyPunch),
            ButtonCategory::LightKick => Some(Attack::LightKick),
            ButtonCategory::MediumKick => Some(Attack::MediumKick),
            ButtonCategory::HeavyKick => Some(Attack::HeavyKick),
            ButtonCategory::AnyPunch | ButtonCategory::AnyKick | ButtonCategory::None => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Attack::LightPunch => "light_punch",
            Attack::MediumPunch => "medium_punch",
            Attack::HeavyPunch => "heavy_punch",
            Attack::LightKick => "light_kick",
            Attack::MediumKick => "medium_kick",
            Attack::HeavyKick => "heavy_kick",
        }
    }
}

/// Composite fallback: locomotion and attack fire independently, so a crouching
/// light punch carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StandardAction {
    pub locomotion: Option<Locomotion>,
    pub attack: Option<Attack>,
}

impl StandardAction {
    /// Neither moving nor attacking.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.locomotion.is_none() && self.attack.is_none()
    }
}

impl fmt::Display for StandardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locomotion = match self.locomotion {
            Some(Locomotion::Walk) => "walk",
            Some(Locomotion::Crouch) => "crouch",
            None => "stand",
        };
        match self.attack {
            Some(attack) => write!(f, "{locomotion}+{}", attack.tag()),
            None => f.write_str(locomotion),
        }
    }
}

/// Derive the standard action for the most recent sample.
pub fn fallback(most_recent: &Sample) -> StandardAction {
    let locomotion = if most_recent.direction.is_horizontal() {
        Some(Locomotion::Walk)
    } else if most_recent.direction.is_down() {
        Some(Locomotion::Crouch)
    } else {
        None
    };

    StandardAction {
        locomotion,
        attack: Attack::from_button(most_recent.button),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use std::time::Duration;

    fn sample(direction: Direction, button: ButtonCategory) -> Sample {
        Sample::new(direction, button, Duration::from_millis(950))
    }

    #[test]
    fn horizontal_walks_and_down_crouches() {
        assert_eq!(
            fallback(&sample(Direction::Left, ButtonCategory::None)).locomotion,
            Some(Locomotion::Walk)
        );
        for direction in [Direction::Down, Direction::LeftDown, Direction::RightDown] {
            assert_eq!(
                fallback(&sample(direction, ButtonCategory::None)).locomotion,
                Some(Locomotion::Crouch)
            );
        }
        for direction in [Direction::Up, Direction::RightUp, Direction::Neutral] {
            assert_eq!(fallback(&sample(direction, ButtonCategory::None)).locomotion, None);
        }
    }

    #[test]
    fn locomotion_and_attack_combine() {
        let action = fallback(&sample(Direction::Right, ButtonCategory::LightPunch));
        assert_eq!(
            action,
            StandardAction {
                locomotion: Some(Locomotion::Walk),
                attack: Some(Attack::LightPunch),
            }
        );
        assert_eq!(action.to_string(), "walk+light_punch");

        let crouch_kick = fallback(&sample(Direction::LeftDown, ButtonCategory::HeavyKick));
        assert_eq!(crouch_kick.to_string(), "crouch+heavy_kick");
    }

    #[test]
    fn resting_sample_is_idle() {
        let action = fallback(&sample(Direction::Neutral, ButtonCategory::None));
        assert!(action.is_idle());
        assert_eq!(action.to_string(), "stand");
    }

    #[test]
    fn fallback_is_pure() {
        let input = sample(Direction::Down, ButtonCategory::MediumKick);
        assert_eq!(fallback(&input), fallback(&input));
    }
}
