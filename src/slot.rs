//! The closed set of navigation slots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// A named sub-part of the navigation component with its own class rule.
///
/// The set is closed: naming a slot that does not exist is a compile error.
///
/// ```compile_fail
/// let _ = navstyle::Slot::Sidebar;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Logo,
    Menu,
    MenuItem,
    NavConnection,
    NavNetwork,
    ThemeToggle,
    ThemeToggleIcon,
    Desktop,
    Mobile,
    NavWrapper,
    MobileContent,
}

impl Slot {
    /// Every slot, in declaration order.
    pub const ALL: [Slot; 11] = [
        Slot::Logo,
        Slot::Menu,
        Slot::MenuItem,
        Slot::NavConnection,
        Slot::NavNetwork,
        Slot::ThemeToggle,
        Slot::ThemeToggleIcon,
        Slot::Desktop,
        Slot::Mobile,
        Slot::NavWrapper,
        Slot::MobileContent,
    ];

    const NAMES: [&'static str; 11] = [
        "logo",
        "menu",
        "menuItem",
        "navConnection",
        "navNetwork",
        "themeToggle",
        "themeToggleIcon",
        "desktop",
        "mobile",
        "navWrapper",
        "mobileContent",
    ];

    /// The slot's name as used by templates and markup.
    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Position of the slot in [`Slot::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| UnknownName::new("slot", s, &Self::NAMES))
    }
}
