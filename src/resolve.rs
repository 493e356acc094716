//! Resolution of a slot's rule against render-time facts.
//!
//! Tokens are visited in rule order. Unconditional tokens are kept; a
//! conditional token is kept only when all of its conditions hold. The kept
//! tokens are then merged last-write-wins: when two tokens set the same
//! property (`px-4` then `px-0`) under the same variants on the same target,
//! only the later one survives, in its own position.
//!
//! Resolution reads nothing but the table and the facts, so the same inputs
//! always produce the same output.

use std::collections::HashSet;
use std::fmt;

use crate::error::TokenParseError;
use crate::facts::RenderFacts;
use crate::slot::Slot;
use crate::table::{SlotRule, StyleTable};
use crate::variant::{parse_class_list, ClassToken};

/// The class tokens that apply for one slot and one fact set.
///
/// Displays as the space-separated class attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedClasses {
    tokens: Vec<String>,
}

impl ResolvedClasses {
    /// Merges tokens, keeping only the last of each group of conflicting tokens.
    fn merged<'a>(tokens: impl IntoIterator<Item = &'a ClassToken>) -> Self {
        let all: Vec<&ClassToken> = tokens.into_iter().collect();
        let mut seen = HashSet::with_capacity(all.len());
        let mut kept: Vec<String> = all
            .into_iter()
            .rev()
            .filter(|token| seen.insert(token.conflict_key()))
            .map(|token| token.as_str().to_string())
            .collect();
        kept.reverse();
        Self { tokens: kept }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// True when `token` (exactly as written in the table) was kept.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ResolvedClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ResolvedClasses> for String {
    fn from(classes: ResolvedClasses) -> Self {
        classes.tokens.join(" ")
    }
}

fn applicable<'a>(
    tokens: impl IntoIterator<Item = &'a ClassToken>,
    facts: &'a RenderFacts,
) -> impl Iterator<Item = &'a ClassToken> {
    tokens
        .into_iter()
        .filter(move |token| token.applies(facts))
}

fn resolve_rule(rule: &SlotRule, extra: &[ClassToken], facts: &RenderFacts) -> ResolvedClasses {
    let resolved = ResolvedClasses::merged(applicable(rule.iter().chain(extra), facts));
    tracing::trace!(
        slot = %rule.slot(),
        kept = resolved.len(),
        candidates = rule.len() + extra.len(),
        "resolved slot classes"
    );
    resolved
}

impl StyleTable {
    /// Resolves `slot` against `facts`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use navstyle::{Breakpoint, RenderFacts, Slot, StyleTable};
    ///
    /// let facts = RenderFacts::new().at(Breakpoint::Laptop).active(true);
    /// let classes = StyleTable::nav().resolve(Slot::MenuItem, &facts);
    /// assert!(classes.contains("laptop:data-[active=true]:before:bg-brand"));
    /// ```
    pub fn resolve(&self, slot: Slot, facts: &RenderFacts) -> ResolvedClasses {
        resolve_rule(self.rule(slot), &[], facts)
    }

    /// Resolves `slot` with caller-supplied classes appended after the rule.
    ///
    /// Extra classes use the same variant syntax and are evaluated against the
    /// same facts. An extra class replaces any rule class it conflicts with.
    pub fn resolve_with(
        &self,
        slot: Slot,
        facts: &RenderFacts,
        extra: &str,
    ) -> Result<ResolvedClasses, TokenParseError> {
        let extra = parse_class_list(extra)?;
        Ok(resolve_rule(self.rule(slot), &extra, facts))
    }

    /// Resolves every slot against the same facts, in [`Slot::ALL`] order.
    pub fn resolve_all(&self, facts: &RenderFacts) -> Vec<(Slot, ResolvedClasses)> {
        self.rules()
            .iter()
            .map(|rule| (rule.slot(), resolve_rule(rule, &[], facts)))
            .collect()
    }
}

/// Resolves `slot` in the navigation table.
pub fn resolve(slot: Slot, facts: &RenderFacts) -> ResolvedClasses {
    StyleTable::nav().resolve(slot, facts)
}
