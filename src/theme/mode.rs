//! Color mode and the detector that picks it.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// The user's preferred color mode.
///
/// Matched by the `light-theme:` and `dark-theme:` variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    const NAMES: [&'static str; 2] = ["light", "dark"];

    /// Returns the mode reported by the installed detector.
    pub fn detect() -> Self {
        let detector = THEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
        (*detector)()
    }

    /// The other mode, as a theme toggle would switch to.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(UnknownName::new("color mode", s, &Self::NAMES)),
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when the host application owns the mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
    tracing::debug!("color mode detector replaced");
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detect_uses_installed_detector() {
        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(ColorMode::detect(), ColorMode::Dark);

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(ColorMode::detect(), ColorMode::Light);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled().toggled(), ColorMode::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("dark".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert!("dim".parse::<ColorMode>().is_err());
    }
}
