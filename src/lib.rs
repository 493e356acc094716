//! # navstyle - class variants for the navigation component
//!
//! `navstyle` holds the class table of the navigation bar: one rule per
//! [`Slot`] (logo, menu, menu item, theme toggle, ...) made of utility-class
//! tokens, some of them gated by variants such as `laptop:`, `dark-theme:`,
//! `data-[active=true]:` or `aria-[label=Sun]:`.
//!
//! A renderer either emits a slot's full class attribute and lets the
//! stylesheet evaluate the variants ([`StyleTable::class_attr`]), or resolves
//! the slot against the facts it knows at render time ([`StyleTable::resolve`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use navstyle::{resolve, Breakpoint, ColorMode, RenderFacts, Slot};
//!
//! let page = RenderFacts::new()
//!     .with_theme(ColorMode::Dark)
//!     .at(Breakpoint::Laptop);
//!
//! let item = resolve(Slot::MenuItem, &page.clone().active(true));
//! assert!(item.contains("laptop:data-[active=true]:before:h-1"));
//!
//! let icon = resolve(Slot::ThemeToggleIcon, &page.aria_label("Sun"));
//! assert!(icon.contains("dark-theme:aria-[label=Sun]:opacity-0"));
//! ```
//!
//! ## Core Concepts
//!
//! - [`Slot`]: Closed set of slot names; an unknown slot does not compile
//! - [`StyleTable`]: Immutable slot → [`SlotRule`] mapping, built once
//! - [`ClassToken`]: A token split into [`Condition`]s, a [`Target`] and a utility
//! - [`RenderFacts`]: Theme, breakpoint, attributes and states for one element
//! - [`ResolvedClasses`]: The tokens that apply, with conflicting classes merged last-write-wins
//! - [`ColorMode`]: Light or dark, detected from the OS unless overridden
//!
//! ## Template Integration
//!
//! [`render::register_nav_functions`] exposes the table to MiniJinja
//! templates as `nav_class(...)` and `nav_class_attr(...)`.

pub mod error;
mod facts;
pub mod render;
mod resolve;
mod slot;
pub mod table;
pub mod theme;
pub mod variant;

pub use error::{StyleTableError, TokenParseError, UnknownName};
pub use facts::RenderFacts;
pub use resolve::{resolve, ResolvedClasses};
pub use slot::Slot;
pub use table::{SlotRule, StyleTable, NAV_SLOT_CLASSES};
pub use theme::{set_color_mode_detector, ColorMode};
pub use variant::{
    parse_class_list, Breakpoint, ClassToken, Condition, PseudoElement, PseudoState, Target,
};
