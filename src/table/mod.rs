//! The slot → class rule table.
//!
//! A [`StyleTable`] holds one [`SlotRule`] for every [`Slot`]. Tables are built
//! from raw class lists with [`StyleTable::from_definitions`], which parses every
//! token up front; once built, lookups cannot fail and resolution never sees a
//! malformed token.
//!
//! The navigation table itself is built on first use and shared for the life of
//! the process:
//!
//! ```rust
//! use navstyle::{Slot, StyleTable};
//!
//! let table = StyleTable::nav();
//! assert_eq!(table.class_attr(Slot::NavNetwork), "h-8");
//! ```

mod nav;

pub use nav::NAV_SLOT_CLASSES;

use crate::error::StyleTableError;
use crate::slot::Slot;
use crate::variant::{parse_class_list, ClassToken};

/// The ordered class tokens of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRule {
    slot: Slot,
    tokens: Vec<ClassToken>,
}

impl SlotRule {
    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn tokens(&self) -> &[ClassToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token, unevaluated, joined with single spaces.
    pub fn class_attr(&self) -> String {
        let raw: Vec<&str> = self.tokens.iter().map(ClassToken::as_str).collect();
        raw.join(" ")
    }
}

impl<'a> IntoIterator for &'a SlotRule {
    type Item = &'a ClassToken;
    type IntoIter = std::slice::Iter<'a, ClassToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Immutable mapping from every [`Slot`] to its [`SlotRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    /// Indexed by [`Slot::index`].
    rules: Vec<SlotRule>,
}

impl StyleTable {
    /// The navigation component's table.
    pub fn nav() -> &'static StyleTable {
        &nav::NAV_STYLES
    }

    /// Builds a table from raw class lists.
    ///
    /// Each slot must appear exactly once with at least one token. A slot's
    /// class lists are split on whitespace and concatenated in order.
    pub fn from_definitions(definitions: &[(Slot, &[&str])]) -> Result<Self, StyleTableError> {
        let mut rules: Vec<Option<SlotRule>> = vec![None; Slot::ALL.len()];

        for (slot, class_lists) in definitions {
            let slot = *slot;
            if rules[slot.index()].is_some() {
                return Err(StyleTableError::DuplicateSlot { slot });
            }

            let mut tokens = Vec::new();
            for classes in class_lists.iter() {
                let parsed = parse_class_list(classes)
                    .map_err(|source| StyleTableError::InvalidToken { slot, source })?;
                tokens.extend(parsed);
            }
            if tokens.is_empty() {
                return Err(StyleTableError::EmptySlot { slot });
            }

            rules[slot.index()] = Some(SlotRule { slot, tokens });
        }

        let rules = rules
            .into_iter()
            .zip(Slot::ALL)
            .map(|(rule, slot)| rule.ok_or(StyleTableError::MissingSlot { slot }))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            slots = rules.len(),
            tokens = rules.iter().map(SlotRule::len).sum::<usize>(),
            "style table built"
        );
        Ok(Self { rules })
    }

    /// The rule for `slot`.
    pub fn rule(&self, slot: Slot) -> &SlotRule {
        &self.rules[slot.index()]
    }

    /// Every rule, in [`Slot::ALL`] order.
    pub fn rules(&self) -> &[SlotRule] {
        &self.rules
    }

    /// The unevaluated class attribute for `slot`.
    ///
    /// Use this when the page's stylesheet evaluates the variants itself;
    /// use [`resolve`](Self::resolve) to evaluate them against known facts.
    pub fn class_attr(&self, slot: Slot) -> String {
        self.rule(slot).class_attr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenParseError;

    const FLEX: &[&str] = &["flex"];

    fn minimal_definitions() -> Vec<(Slot, &'static [&'static str])> {
        Slot::ALL.iter().map(|slot| (*slot, FLEX)).collect()
    }

    #[test]
    fn test_nav_table_has_every_slot() {
        let table = StyleTable::nav();
        for slot in Slot::ALL {
            let rule = table.rule(slot);
            assert_eq!(rule.slot(), slot);
            assert!(!rule.is_empty(), "slot {} has no tokens", slot);
        }
    }

    #[test]
    fn test_class_lists_are_concatenated_in_order() {
        let table = StyleTable::nav();
        assert_eq!(
            table.class_attr(Slot::ThemeToggle),
            "relative cursor-pointer flex items-center px-2 w-12 h-8 rounded-full border-border bg-gray-3 select-none"
        );
        assert_eq!(table.rule(Slot::MenuItem).len(), 12);
    }

    #[test]
    fn test_from_definitions_minimal() {
        let table = StyleTable::from_definitions(&minimal_definitions()).unwrap();
        assert_eq!(table.rules().len(), Slot::ALL.len());
        assert_eq!(table.class_attr(Slot::Mobile), "flex");
    }

    #[test]
    fn test_from_definitions_duplicate_slot() {
        let mut defs = minimal_definitions();
        defs.push((Slot::Menu, &["block"]));
        assert_eq!(
            StyleTable::from_definitions(&defs),
            Err(StyleTableError::DuplicateSlot { slot: Slot::Menu })
        );
    }

    #[test]
    fn test_from_definitions_missing_slot() {
        let defs: Vec<_> = minimal_definitions()
            .into_iter()
            .filter(|(slot, _)| *slot != Slot::NavNetwork)
            .collect();
        assert_eq!(
            StyleTable::from_definitions(&defs),
            Err(StyleTableError::MissingSlot {
                slot: Slot::NavNetwork
            })
        );
    }

    #[test]
    fn test_from_definitions_empty_slot() {
        let mut defs = minimal_definitions();
        defs[0] = (Slot::Logo, &["   "]);
        assert_eq!(
            StyleTable::from_definitions(&defs),
            Err(StyleTableError::EmptySlot { slot: Slot::Logo })
        );
    }

    #[test]
    fn test_from_definitions_invalid_token() {
        let mut defs = minimal_definitions();
        defs[1] = (Slot::Menu, &["flex tablet:hidden"]);
        let err = StyleTable::from_definitions(&defs).unwrap_err();
        assert!(matches!(
            err,
            StyleTableError::InvalidToken {
                slot: Slot::Menu,
                source: TokenParseError::UnknownVariant { .. }
            }
        ));
    }

    #[test]
    fn test_nav_rules_have_no_conflicting_tokens() {
        for rule in StyleTable::nav().rules() {
            let mut keys: Vec<String> = rule.iter().map(ClassToken::conflict_key).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), rule.len(), "slot {} overrides itself", rule.slot());
        }
    }

    #[test]
    fn test_rule_iterates_by_reference() {
        let rule = StyleTable::nav().rule(Slot::NavConnection);
        let raw: Vec<&str> = rule.into_iter().map(ClassToken::as_str).collect();
        assert_eq!(raw, vec!["items-center"]);
    }
}
