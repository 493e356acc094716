//! A single parsed class token.

use std::fmt;

use super::condition::Condition;
use super::group::utility_group;
use super::parse::parse_token;
use crate::error::TokenParseError;
use crate::facts::RenderFacts;

/// Pseudo-element a token styles instead of the element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    Before,
    After,
}

/// The part of the markup a token applies to.
///
/// Targets never gate a token; they only say where its utility lands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Target {
    /// `fuel-[Name]:` styles the named child component.
    pub component: Option<String>,
    /// `before:` / `after:` styles the pseudo-element.
    pub pseudo_element: Option<PseudoElement>,
}

impl Target {
    /// True when the token styles the element itself.
    pub fn is_element(&self) -> bool {
        self.component.is_none() && self.pseudo_element.is_none()
    }
}

/// A class token: its source text, the conditions gating it, where it lands,
/// and the bare utility.
///
/// # Example
///
/// ```rust
/// use navstyle::{Breakpoint, ClassToken, Condition, PseudoElement};
///
/// let token = ClassToken::parse("laptop:data-[active=true]:before:h-1").unwrap();
/// assert_eq!(token.utility(), "h-1");
/// assert_eq!(token.conditions()[0], Condition::Breakpoint(Breakpoint::Laptop));
/// assert_eq!(token.target().pseudo_element, Some(PseudoElement::Before));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassToken {
    pub(crate) raw: String,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) target: Target,
    pub(crate) utility: String,
}

impl ClassToken {
    /// Parses a single token such as `dark-theme:aria-[label=Sun]:opacity-0`.
    pub fn parse(token: &str) -> Result<Self, TokenParseError> {
        parse_token(token)
    }

    /// The token exactly as written; this is what ends up in the class attribute.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The utility with every variant prefix stripped, e.g. `opacity-0`.
    pub fn utility(&self) -> &str {
        &self.utility
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// True when every condition holds for `facts`.
    pub fn applies(&self, facts: &RenderFacts) -> bool {
        self.conditions.iter().all(|c| c.holds(facts))
    }

    /// Tokens with equal keys set the same property on the same target under
    /// the same conditions, so only the last of them can take effect.
    pub(crate) fn conflict_key(&self) -> String {
        let mut parts: Vec<String> = self.conditions.iter().map(Condition::to_string).collect();
        parts.sort();
        if let Some(component) = &self.target.component {
            parts.push(format!("fuel-[{}]", component));
        }
        match self.target.pseudo_element {
            Some(PseudoElement::Before) => parts.push("before".to_string()),
            Some(PseudoElement::After) => parts.push("after".to_string()),
            None => {}
        }
        parts.push(utility_group(&self.utility).into_owned());
        parts.join(":")
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits a whitespace-separated class list into parsed tokens.
pub fn parse_class_list(classes: &str) -> Result<Vec<ClassToken>, TokenParseError> {
    classes.split_whitespace().map(parse_token).collect()
}
