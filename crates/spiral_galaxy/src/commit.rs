use bevy::color::Color;

use crate::GalaxyParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamName {
    Count,
    Size,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
    InsideColor,
    OutsideColor,
}

impl ParamName {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::Count => "count",
            ParamName::Size => "size",
            ParamName::Radius => "radius",
            ParamName::Branches => "branches",
            ParamName::Spin => "spin",
            ParamName::Randomness => "randomness",
            ParamName::RandomnessPower => "randomnessPower",
            ParamName::InsideColor => "insideColor",
            ParamName::OutsideColor => "outsideColor",
        }
    }
}

/// A committed edit of a single parameter, as raised by whatever editing UI is in front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamChange {
    Count(u32),
    Size(f32),
    Radius(f32),
    Branches(u32),
    Spin(f32),
    Randomness(f32),
    RandomnessPower(f32),
    InsideColor(Color),
    OutsideColor(Color),
}

impl ParamChange {
    pub fn name(&self) -> ParamName {
        match self {
            ParamChange::Count(_) => ParamName::Count,
            ParamChange::Size(_) => ParamName::Size,
            ParamChange::Radius(_) => ParamName::Radius,
            ParamChange::Branches(_) => ParamName::Branches,
            ParamChange::Spin(_) => ParamName::Spin,
            ParamChange::Randomness(_) => ParamName::Randomness,
            ParamChange::RandomnessPower(_) => ParamName::RandomnessPower,
            ParamChange::InsideColor(_) => ParamName::InsideColor,
            ParamChange::OutsideColor(_) => ParamName::OutsideColor,
        }
    }
}

impl GalaxyParameters {
    /// Writes one committed value. Returns false if the value was already current.
    pub fn apply(&mut self, change: ParamChange) -> bool {
        let before = self.clone();
        match change {
            ParamChange::Count(v) => self.count = v,
            ParamChange::Size(v) => self.size = v,
            ParamChange::Radius(v) => self.radius = v,
            ParamChange::Branches(v) => self.branches = v,
            ParamChange::Spin(v) => self.spin = v,
            ParamChange::Randomness(v) => self.randomness = v,
            ParamChange::RandomnessPower(v) => self.randomness_power = v,
            ParamChange::InsideColor(v) => self.inside_color = v,
            ParamChange::OutsideColor(v) => self.outside_color = v,
        }
        *self != before
    }

    /// Every field as a change, in panel order.
    pub fn changes(&self) -> [ParamChange; 9] {
        [
            ParamChange::Count(self.count),
            ParamChange::Size(self.size),
            ParamChange::Radius(self.radius),
            ParamChange::Branches(self.branches),
            ParamChange::Randomness(self.randomness),
            ParamChange::RandomnessPower(self.randomness_power),
            ParamChange::Spin(self.spin),
            ParamChange::InsideColor(self.inside_color),
            ParamChange::OutsideColor(self.outside_color),
        ]
    }
}
