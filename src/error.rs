//! Error types for token parsing, table construction and name lookup.

use crate::slot::Slot;

/// Error returned when a class token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenParseError {
    /// The token was empty or whitespace.
    #[error("empty class token")]
    Empty,
    /// A `[` was never closed, or a `]` had no opener.
    #[error("unbalanced brackets in class token '{token}'")]
    UnbalancedBrackets { token: String },
    /// Two separators with nothing between them, e.g. `md::flex`.
    #[error("empty variant in class token '{token}'")]
    EmptyVariant { token: String },
    /// The token ends with a separator, e.g. `laptop:`.
    #[error("class token '{token}' has no utility")]
    MissingUtility { token: String },
    /// A variant prefix that is not part of the supported set.
    #[error("unknown variant '{variant}' in class token '{token}'")]
    UnknownVariant { token: String, variant: String },
    /// An attribute selector such as `data-[=true]` or `aria-[label=]`.
    #[error("malformed attribute selector '{variant}' in class token '{token}'")]
    MalformedAttribute { token: String, variant: String },
    /// Two targets of the same kind on one token, e.g. `before:after:block`.
    #[error("class token '{token}' targets more than one {kind}")]
    ConflictingTarget { token: String, kind: &'static str },
}

/// Error returned when a [`StyleTable`](crate::StyleTable) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleTableError {
    /// The same slot was defined twice.
    #[error("slot '{slot}' is defined more than once")]
    DuplicateSlot { slot: Slot },
    /// A slot has no definition.
    #[error("slot '{slot}' has no definition")]
    MissingSlot { slot: Slot },
    /// A slot was defined with no tokens at all.
    #[error("slot '{slot}' has no class tokens")]
    EmptySlot { slot: Slot },
    /// One of the slot's tokens does not parse.
    #[error("invalid token in slot '{slot}': {source}")]
    InvalidToken {
        slot: Slot,
        #[source]
        source: TokenParseError,
    },
}

/// Error returned when parsing a name into one of the closed enumerations
/// ([`Slot`], [`Breakpoint`](crate::Breakpoint), [`ColorMode`](crate::ColorMode),
/// [`PseudoState`](crate::PseudoState)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}'. Available: {}", .available.join(", "))]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
    pub available: Vec<&'static str>,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str, available: &[&'static str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            available: available.to_vec(),
        }
    }
}
