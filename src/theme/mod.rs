//! Light/dark color mode and its detection.
//!
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`set_color_mode_detector`]: Override how the current mode is detected
//!
//! Detection defaults to the operating system's preference. Hosts that track
//! the mode themselves (a theme toggle, a cookie) install their own detector
//! or set the mode on [`RenderFacts`](crate::RenderFacts) directly.

mod mode;

pub use mode::{set_color_mode_detector, ColorMode};
