//! Conditions that gate a class token, and the closed sets they range over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;
use crate::facts::RenderFacts;
use crate::theme::ColorMode;

/// A named viewport-width threshold.
///
/// Breakpoints are mobile first: a `laptop:` token applies at `laptop` and
/// every wider breakpoint. Ordering follows the minimum width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Breakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "laptop")]
    Laptop,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint, narrowest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Laptop,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    const NAMES: [&'static str; 5] = ["sm", "md", "laptop", "xl", "2xl"];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Minimum viewport width, in CSS pixels, at which the breakpoint is active.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Laptop => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// The widest breakpoint active at `width` pixels, or `None` below `sm`.
    ///
    /// ```rust
    /// use navstyle::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::from_width(320), None);
    /// assert_eq!(Breakpoint::from_width(1024), Some(Breakpoint::Laptop));
    /// assert_eq!(Breakpoint::from_width(1100), Some(Breakpoint::Laptop));
    /// ```
    pub fn from_width(width: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .rev()
            .find(|bp| width >= bp.min_width())
            .copied()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| UnknownName::new("breakpoint", s, &Self::NAMES))
    }
}

/// Interaction and structural pseudo-classes a token can be gated on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PseudoState {
    Hover,
    Focus,
    /// The element is the first of its siblings.
    First,
    /// The element is the last of its siblings.
    Last,
}

impl PseudoState {
    const ALL: [PseudoState; 4] = [
        PseudoState::Hover,
        PseudoState::Focus,
        PseudoState::First,
        PseudoState::Last,
    ];

    const NAMES: [&'static str; 4] = ["hover", "focus", "first", "last"];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for PseudoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PseudoState {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| UnknownName::new("pseudo-state", s, &Self::NAMES))
    }
}

/// A predicate over render-time facts.
///
/// A token applies only when every one of its conditions holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Viewport is at least this breakpoint.
    Breakpoint(Breakpoint),
    /// Current color mode equals this one.
    Theme(ColorMode),
    /// `data-[name=value]`, or `data-[name]` when `value` is `None`.
    Data { name: String, value: Option<String> },
    /// `aria-[name=value]`, or `aria-[name]` when `value` is `None`.
    Aria { name: String, value: Option<String> },
    /// The element is (or, when negated, is not) in the given state.
    State { state: PseudoState, negated: bool },
}

impl Condition {
    /// Evaluates the condition against a fact set.
    pub fn holds(&self, facts: &RenderFacts) -> bool {
        match self {
            Condition::Breakpoint(bp) => facts.breakpoint().is_some_and(|current| current >= *bp),
            Condition::Theme(mode) => facts.theme() == *mode,
            Condition::Data { name, value } => {
                attribute_matches(facts.data(name), value.as_deref())
            }
            Condition::Aria { name, value } => {
                attribute_matches(facts.aria(name), value.as_deref())
            }
            Condition::State { state, negated } => facts.has_state(*state) != *negated,
        }
    }
}

fn attribute_matches(actual: Option<&str>, expected: Option<&str>) -> bool {
    match (actual, expected) {
        (Some(actual), Some(expected)) => actual == expected,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Breakpoint(bp) => write!(f, "{}", bp),
            Condition::Theme(mode) => write!(f, "{}-theme", mode),
            Condition::Data { name, value: Some(v) } => write!(f, "data-[{}={}]", name, v),
            Condition::Data { name, value: None } => write!(f, "data-[{}]", name),
            Condition::Aria { name, value: Some(v) } => write!(f, "aria-[{}={}]", name, v),
            Condition::Aria { name, value: None } => write!(f, "aria-[{}]", name),
            Condition::State { state, negated: true } => write!(f, "not-{}", state),
            Condition::State { state, negated: false } => write!(f, "{}", state),
        }
    }
}
