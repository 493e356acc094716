//! Template integration.
//!
//! [`register_nav_functions`] adds two functions to a MiniJinja environment:
//!
//! - `nav_class(slot, **facts)`: the slot's classes resolved against the base
//!   facts, with any keyword arguments overriding them for this call
//! - `nav_class_attr(slot)`: every token of the slot, unevaluated
//!
//! Supported keywords are `active`, `open`, `hover`, `focus`, `first`, `last`
//! (booleans), `label` (the ARIA label), `theme` (`"light"`/`"dark"`) and
//! `breakpoint` (a breakpoint name, or `none`). Any other keyword is an error.
//!
//! # Example
//!
//! ```rust
//! use minijinja::Environment;
//! use navstyle::{render::register_nav_functions, Breakpoint, RenderFacts};
//!
//! let mut env = Environment::new();
//! register_nav_functions(&mut env, RenderFacts::new().at(Breakpoint::Laptop));
//!
//! let html = env
//!     .render_str(r#"<a class="{{ nav_class('menuItem', active=true) }}">Home</a>"#, ())
//!     .unwrap();
//! assert!(html.contains("laptop:data-[active=true]:before:block"));
//! ```

mod functions;

pub use functions::register_nav_functions;
