//! Class token parsing.
//!
//! A token is a chain of variants followed by a utility, separated by `:`:
//!
//! ```text
//! laptop:data-[active=true]:before:top-[-24px]
//! ^^^^^^ ^^^^^^^^^^^^^^^^^^ ^^^^^^ ^^^^^^^^^^^^
//! breakpoint  data attribute  target   utility
//! ```
//!
//! Separators inside `[...]` are part of the segment, so arbitrary values such
//! as `min-h-[var(--nav-height)]` survive intact. Every variant must be one of
//! the supported kinds; anything else is a parse error rather than a silently
//! ignored prefix.

use super::condition::{Breakpoint, Condition, PseudoState};
use super::token::{ClassToken, PseudoElement, Target};
use crate::error::TokenParseError;
use crate::theme::ColorMode;

const SEPARATOR: char = ':';

/// Prefix of the child-component target, `fuel-[Name]:`.
const COMPONENT_PREFIX: &str = "fuel-";

/// Parses a single class token.
pub(crate) fn parse_token(token: &str) -> Result<ClassToken, TokenParseError> {
    let raw = token.trim();
    if raw.is_empty() {
        return Err(TokenParseError::Empty);
    }

    let mut segments = split_segments(raw)?;
    // split_segments always yields at least one segment
    let utility = segments.pop().unwrap_or_default();
    if utility.is_empty() {
        return Err(TokenParseError::MissingUtility {
            token: raw.to_string(),
        });
    }

    let mut conditions = Vec::new();
    let mut target = Target::default();

    for variant in segments {
        if variant.is_empty() {
            return Err(TokenParseError::EmptyVariant {
                token: raw.to_string(),
            });
        }
        match classify(raw, variant)? {
            Variant::Condition(condition) => conditions.push(condition),
            Variant::PseudoElement(element) => {
                if target.pseudo_element.replace(element).is_some() {
                    return Err(TokenParseError::ConflictingTarget {
                        token: raw.to_string(),
                        kind: "pseudo-element",
                    });
                }
            }
            Variant::Component(name) => {
                if target.component.replace(name).is_some() {
                    return Err(TokenParseError::ConflictingTarget {
                        token: raw.to_string(),
                        kind: "component",
                    });
                }
            }
        }
    }

    Ok(ClassToken {
        raw: raw.to_string(),
        conditions,
        target,
        utility: utility.to_string(),
    })
}

enum Variant {
    Condition(Condition),
    PseudoElement(PseudoElement),
    Component(String),
}

fn classify(token: &str, variant: &str) -> Result<Variant, TokenParseError> {
    if let Ok(bp) = variant.parse::<Breakpoint>() {
        return Ok(Variant::Condition(Condition::Breakpoint(bp)));
    }
    if let Ok(state) = variant.parse::<PseudoState>() {
        return Ok(Variant::Condition(Condition::State {
            state,
            negated: false,
        }));
    }

    match variant {
        "dark-theme" => return Ok(Variant::Condition(Condition::Theme(ColorMode::Dark))),
        "light-theme" => return Ok(Variant::Condition(Condition::Theme(ColorMode::Light))),
        "before" => return Ok(Variant::PseudoElement(PseudoElement::Before)),
        "after" => return Ok(Variant::PseudoElement(PseudoElement::After)),
        _ => {}
    }

    if let Some(state) = variant.strip_prefix("not-") {
        if let Ok(state) = state.parse::<PseudoState>() {
            return Ok(Variant::Condition(Condition::State {
                state,
                negated: true,
            }));
        }
    }

    if let Some(inner) = bracketed(variant, "data-") {
        let (name, value) = attribute(token, variant, inner)?;
        return Ok(Variant::Condition(Condition::Data { name, value }));
    }
    if let Some(inner) = bracketed(variant, "aria-") {
        let (name, value) = attribute(token, variant, inner)?;
        return Ok(Variant::Condition(Condition::Aria { name, value }));
    }
    if let Some(inner) = bracketed(variant, COMPONENT_PREFIX) {
        if inner.is_empty() || inner.contains('=') {
            return Err(malformed(token, variant));
        }
        return Ok(Variant::Component(inner.to_string()));
    }

    Err(TokenParseError::UnknownVariant {
        token: token.to_string(),
        variant: variant.to_string(),
    })
}

/// Returns the text between the brackets of `prefix[...]`.
fn bracketed<'a>(variant: &'a str, prefix: &str) -> Option<&'a str> {
    variant
        .strip_prefix(prefix)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// Splits `name=value` (or a bare `name`) from an attribute selector.
fn attribute(
    token: &str,
    variant: &str,
    inner: &str,
) -> Result<(String, Option<String>), TokenParseError> {
    let (name, value) = match inner.split_once('=') {
        Some((name, value)) => (name, Some(unquote(value))),
        None => (inner, None),
    };
    if name.is_empty() || value.is_some_and(str::is_empty) {
        return Err(malformed(token, variant));
    }
    Ok((name.to_string(), value.map(str::to_string)))
}

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value)
}

fn malformed(token: &str, variant: &str) -> TokenParseError {
    TokenParseError::MalformedAttribute {
        token: token.to_string(),
        variant: variant.to_string(),
    }
}

/// Splits on separators outside brackets.
fn split_segments(token: &str) -> Result<Vec<&str>, TokenParseError> {
    let unbalanced = || TokenParseError::UnbalancedBrackets {
        token: token.to_string(),
    };

    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            SEPARATOR if depth == 0 => {
                segments.push(&token[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    segments.push(&token[start..]);
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utility() {
        let token = parse_token("relative").unwrap();
        assert_eq!(token.utility(), "relative");
        assert!(token.conditions().is_empty());
    }

    #[test]
    fn test_arbitrary_values_keep_inner_separators() {
        let token = parse_token("bg-[url(a:b)]").unwrap();
        assert_eq!(token.utility(), "bg-[url(a:b)]");

        let token = parse_token("laptop:min-h-[var(--nav-height)]").unwrap();
        assert_eq!(token.utility(), "min-h-[var(--nav-height)]");
        assert_eq!(
            token.conditions(),
            &[Condition::Breakpoint(Breakpoint::Laptop)]
        );
    }

    #[test]
    fn test_negative_utility() {
        let token = parse_token("dark-theme:aria-[label=Sun]:-translate-x-full").unwrap();
        assert_eq!(token.utility(), "-translate-x-full");
        assert_eq!(
            token.conditions(),
            &[
                Condition::Theme(ColorMode::Dark),
                Condition::Aria {
                    name: "label".into(),
                    value: Some("Sun".into())
                },
            ]
        );
    }

    #[test]
    fn test_quoted_attribute_value() {
        let token = parse_token("aria-[label='Sun']:right-2").unwrap();
        assert_eq!(
            token.conditions()[0],
            Condition::Aria {
                name: "label".into(),
                value: Some("Sun".into())
            }
        );
    }

    #[test]
    fn test_pseudo_element_with_empty_content() {
        let token = parse_token(r#"laptop:data-[active=true]:before:content-[""]"#).unwrap();
        assert_eq!(token.target().pseudo_element, Some(PseudoElement::Before));
        assert_eq!(token.utility(), r#"content-[""]"#);
        assert_eq!(token.conditions().len(), 2);
    }

    #[test]
    fn test_after_pseudo_element() {
        let token = parse_token("data-[open=true]:after:block").unwrap();
        assert_eq!(token.target().pseudo_element, Some(PseudoElement::After));
        assert!(token.target().component.is_none());
        assert_eq!(token.utility(), "block");
        assert_eq!(
            token.conditions(),
            &[Condition::Data {
                name: "open".into(),
                value: Some("true".into())
            }]
        );

        let bare = parse_token(r#"after:content-[""]"#).unwrap();
        assert!(!bare.is_conditional());
        assert_eq!(bare.target().pseudo_element, Some(PseudoElement::After));
    }

    #[test]
    fn test_negated_state_variants() {
        let token = parse_token("laptop:not-first:border-t-0").unwrap();
        assert_eq!(
            token.conditions()[1],
            Condition::State {
                state: PseudoState::First,
                negated: true
            }
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_token("   "), Err(TokenParseError::Empty));
        assert!(matches!(
            parse_token("top-[-24px"),
            Err(TokenParseError::UnbalancedBrackets { .. })
        ));
        assert!(matches!(
            parse_token("top-]"),
            Err(TokenParseError::UnbalancedBrackets { .. })
        ));
        assert!(matches!(
            parse_token("md::flex"),
            Err(TokenParseError::EmptyVariant { .. })
        ));
        assert!(matches!(
            parse_token("laptop:"),
            Err(TokenParseError::MissingUtility { .. })
        ));
        assert!(matches!(
            parse_token("tablet:flex"),
            Err(TokenParseError::UnknownVariant { .. })
        ));
        assert!(matches!(
            parse_token("not-hovered:flex"),
            Err(TokenParseError::UnknownVariant { .. })
        ));
        assert!(matches!(
            parse_token("data-[=true]:flex"),
            Err(TokenParseError::MalformedAttribute { .. })
        ));
        assert!(matches!(
            parse_token("aria-[label=]:flex"),
            Err(TokenParseError::MalformedAttribute { .. })
        ));
        assert!(matches!(
            parse_token("fuel-[]:flex"),
            Err(TokenParseError::MalformedAttribute { .. })
        ));
        assert!(matches!(
            parse_token("before:after:block"),
            Err(TokenParseError::ConflictingTarget {
                kind: "pseudo-element",
                ..
            })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsed_token_keeps_raw_text_and_utility_suffix(
            variants in prop::collection::vec(
                prop::sample::select(vec![
                    "md", "laptop", "hover", "not-first", "dark-theme",
                    "data-[active=true]", "aria-[label=Moon]", "before", "fuel-[IconButton]",
                ]),
                0..3,
            ),
            utility in "[a-z]{1,6}(-[a-z0-9]{1,4})?",
        ) {
            let mut seen_before = false;
            let mut seen_fuel = false;
            let variants: Vec<&str> = variants
                .into_iter()
                .filter(|v| match *v {
                    "before" => !std::mem::replace(&mut seen_before, true),
                    "fuel-[IconButton]" => !std::mem::replace(&mut seen_fuel, true),
                    _ => true,
                })
                .collect();

            let mut raw = variants.join(":");
            if !raw.is_empty() {
                raw.push(':');
            }
            raw.push_str(&utility);

            let token = parse_token(&raw).unwrap();
            prop_assert_eq!(token.as_str(), raw.as_str());
            prop_assert_eq!(token.utility(), utility.as_str());
            let targets = usize::from(seen_before) + usize::from(seen_fuel);
            prop_assert_eq!(token.conditions().len() + targets, variants.len());
        }
    }
}
