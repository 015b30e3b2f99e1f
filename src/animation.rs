//! Binding table from match results to animation-controller commands.
//!
//! The matcher only produces tags. Games drive their animation state machines
//! from the commands produced here: trigger parameters fire once, boolean
//! parameters are held on or off, and numeric parameters are left to the
//! caller.

use crate::motion::{Attack, Locomotion, MatchResult, OutputTag, StandardAction};
use std::collections::BTreeMap;

#[cfg(feature = "config")]
use serde::Deserialize;

/// Data type of an animation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum ParameterKind {
    Trigger,
    Bool,
    Int,
    Float,
}

/// A named parameter on the animation controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Deserialize))]
pub struct AnimationParameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl AnimationParameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn trigger(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Trigger)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Bool)
    }

    fn activate(&self) -> Option<AnimationCommand> {
        match self.kind {
            ParameterKind::Trigger => Some(AnimationCommand::SetTrigger(self.name.clone())),
            ParameterKind::Bool => Some(AnimationCommand::SetBool(self.name.clone(), true)),
            ParameterKind::Int | ParameterKind::Float => None,
        }
    }

    fn deactivate(&self) -> Option<AnimationCommand> {
        match self.kind {
            ParameterKind::Bool => Some(AnimationCommand::SetBool(self.name.clone(), false)),
            _ => None,
        }
    }
}

/// One instruction for the animation controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCommand {
    SetTrigger(String),
    ResetTrigger(String),
    SetBool(String, bool),
}

/// Which parameter each outcome drives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct AnimationBindings {
    pub walking: Option<AnimationParameter>,
    pub crouching: Option<AnimationParameter>,
    pub attacks: BTreeMap<Attack, AnimationParameter>,
    /// Special-move parameters keyed by output tag.
    pub specials: BTreeMap<OutputTag, AnimationParameter>,
}

impl AnimationBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_walking(mut self, parameter: AnimationParameter) -> Self {
        self.walking = Some(parameter);
        self
    }

    pub fn with_crouching(mut self, parameter: AnimationParameter) -> Self {
        self.crouching = Some(parameter);
        self
    }

    pub fn with_attack(mut self, attack: Attack, parameter: AnimationParameter) -> Self {
        self.attacks.insert(attack, parameter);
        self
    }

    pub fn with_special(mut self, tag: impl Into<OutputTag>, parameter: AnimationParameter) -> Self {
        self.specials.insert(tag.into(), parameter);
        self
    }

    /// Commands that apply `result` to the animation controller, in order.
    pub fn commands_for(&self, result: &MatchResult) -> Vec<AnimationCommand> {
        match result {
            MatchResult::Special(activated) => {
                // Attack triggers queued by earlier normals must not fire on
                // top of the special.
                let mut commands: Vec<_> = Attack::ALL
                    .iter()
                    .filter_map(|attack| self.attacks.get(attack))
                    .filter(|parameter| parameter.kind == ParameterKind::Trigger)
                    .map(|parameter| AnimationCommand::ResetTrigger(parameter.name.clone()))
                    .collect();

                match self.specials.get(&activated.output_tag) {
                    Some(parameter) => commands.extend(parameter.activate()),
                    None => log::warn!(
                        "no animation parameter bound to output tag '{}'",
                        activated.output_tag
                    ),
                }
                commands
            }
            MatchResult::Standard(action) => self.standard_commands(action),
        }
    }

    fn standard_commands(&self, action: &StandardAction) -> Vec<AnimationCommand> {
        let walking = self.walking.as_ref();
        let crouching = self.crouching.as_ref();

        let (on, off): (Vec<_>, Vec<_>) = match action.locomotion {
            Some(Locomotion::Walk) => (vec![walking], vec![crouching]),
            Some(Locomotion::Crouch) => (vec![crouching], vec![walking]),
            None => (Vec::new(), vec![walking, crouching]),
        };

        let mut commands: Vec<AnimationCommand> = on
            .into_iter()
            .flatten()
            .filter_map(AnimationParameter::activate)
            .chain(off.into_iter().flatten().filter_map(AnimationParameter::deactivate))
            .collect();

        if let Some(parameter) = action.attack.and_then(|attack| self.attacks.get(&attack)) {
            commands.extend(parameter.activate());
        }
        commands
    }
}
