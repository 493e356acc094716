//! Class tokens and the conditions that gate them.
//!
//! This module provides:
//!
//! - [`ClassToken`]: A parsed token with its conditions, target and utility
//! - [`Condition`]: A predicate over render-time facts
//! - [`Breakpoint`], [`PseudoState`]: The closed sets conditions range over
//! - [`Target`], [`PseudoElement`]: Where a token's utility lands
//! - [`parse_class_list`]: Parse a whitespace-separated class list

mod condition;
mod group;
mod parse;
mod token;

pub use condition::{Breakpoint, Condition, PseudoState};
pub use token::{parse_class_list, ClassToken, PseudoElement, Target};
