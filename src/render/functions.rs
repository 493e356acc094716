//! MiniJinja function registration.

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind};

use crate::facts::RenderFacts;
use crate::slot::Slot;
use crate::table::StyleTable;
use crate::theme::ColorMode;
use crate::variant::{Breakpoint, PseudoState};

/// Registers `nav_class` and `nav_class_attr` on a MiniJinja environment.
///
/// `base` holds the page-level facts (theme, breakpoint) every call starts from.
pub fn register_nav_functions(env: &mut Environment<'static>, base: RenderFacts) {
    env.add_function(
        "nav_class",
        move |slot: String, kwargs: Kwargs| -> Result<String, Error> {
            let slot = parse_slot(&slot)?;
            let facts = apply_kwargs(base.clone(), &kwargs)?;
            kwargs.assert_all_used()?;
            Ok(StyleTable::nav().resolve(slot, &facts).into())
        },
    );

    env.add_function("nav_class_attr", |slot: String| -> Result<String, Error> {
        Ok(StyleTable::nav().class_attr(parse_slot(&slot)?))
    });
}

fn parse_slot(name: &str) -> Result<Slot, Error> {
    name.parse::<Slot>().map_err(invalid)
}

fn invalid(err: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

fn apply_kwargs(mut facts: RenderFacts, kwargs: &Kwargs) -> Result<RenderFacts, Error> {
    if let Some(active) = kwargs.get::<Option<bool>>("active")? {
        facts = facts.active(active);
    }
    if let Some(open) = kwargs.get::<Option<bool>>("open")? {
        facts = facts.open(open);
    }
    if let Some(label) = kwargs.get::<Option<String>>("label")? {
        facts = facts.aria_label(label);
    }
    for (key, state) in [
        ("hover", PseudoState::Hover),
        ("focus", PseudoState::Focus),
        ("first", PseudoState::First),
        ("last", PseudoState::Last),
    ] {
        if let Some(on) = kwargs.get::<Option<bool>>(key)? {
            facts = facts.set_state(state, on);
        }
    }
    if let Some(theme) = kwargs.get::<Option<String>>("theme")? {
        facts = facts.with_theme(theme.parse::<ColorMode>().map_err(invalid)?);
    }
    if let Some(breakpoint) = kwargs.get::<Option<String>>("breakpoint")? {
        let breakpoint = match breakpoint.as_str() {
            "none" => None,
            name => Some(name.parse::<Breakpoint>().map_err(invalid)?),
        };
        facts = facts.at_breakpoint(breakpoint);
    }
    Ok(facts)
}
