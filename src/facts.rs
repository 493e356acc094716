//! Render-time facts that conditions are evaluated against.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::theme::ColorMode;
use crate::variant::{Breakpoint, PseudoState};

/// The fact set for one element in one render pass.
///
/// Facts are built fluently and are cheap to clone, so a renderer can keep a
/// page-level base (theme, breakpoint) and derive per-element facts from it.
///
/// # Example
///
/// ```rust
/// use navstyle::{Breakpoint, ColorMode, RenderFacts};
///
/// let page = RenderFacts::new()
///     .with_theme(ColorMode::Dark)
///     .at_width(1280);
/// let item = page.clone().active(true);
///
/// assert_eq!(item.breakpoint(), Some(Breakpoint::Xl));
/// assert_eq!(item.data("active"), Some("true"));
/// ```
///
/// Facts also deserialize from JSON, for hosts that compute them elsewhere:
///
/// ```rust
/// use navstyle::{Breakpoint, RenderFacts};
///
/// let facts: RenderFacts = serde_json::from_str(
///     r#"{"theme": "dark", "breakpoint": "laptop", "aria": {"label": "Sun"}}"#,
/// ).unwrap();
/// assert_eq!(facts.breakpoint(), Some(Breakpoint::Laptop));
/// assert_eq!(facts.aria("label"), Some("Sun"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderFacts {
    theme: ColorMode,
    breakpoint: Option<Breakpoint>,
    #[serde(deserialize_with = "scalar_map")]
    data: BTreeMap<String, String>,
    #[serde(deserialize_with = "scalar_map")]
    aria: BTreeMap<String, String>,
    states: BTreeSet<PseudoState>,
}

/// An attribute value as a host may write it in JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<AttributeValue> for String {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Bool(b) => b.to_string(),
            AttributeValue::Int(n) => n.to_string(),
            AttributeValue::Float(n) => n.to_string(),
            AttributeValue::Text(s) => s,
        }
    }
}

/// Attribute maps store the value as markup would render it, so `true` and
/// `"true"` are the same fact.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, AttributeValue>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

impl RenderFacts {
    /// Light theme, below the smallest breakpoint, no attributes or states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`new`](Self::new) but seeded with the detected color mode.
    pub fn detect() -> Self {
        Self::new().with_theme(ColorMode::detect())
    }

    pub fn with_theme(mut self, theme: ColorMode) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the active breakpoint; `None` means narrower than every breakpoint.
    pub fn at_breakpoint(mut self, breakpoint: Option<Breakpoint>) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn at(self, breakpoint: Breakpoint) -> Self {
        self.at_breakpoint(Some(breakpoint))
    }

    /// Sets the breakpoint from a viewport width in CSS pixels.
    pub fn at_width(self, width: u32) -> Self {
        self.at_breakpoint(Breakpoint::from_width(width))
    }

    /// Sets a `data-*` attribute.
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Sets `data-active`.
    pub fn active(self, active: bool) -> Self {
        self.with_data("active", active.to_string())
    }

    /// Sets `data-open`.
    pub fn open(self, open: bool) -> Self {
        self.with_data("open", open.to_string())
    }

    /// Sets an `aria-*` attribute.
    pub fn with_aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.aria.insert(name.into(), value.into());
        self
    }

    /// Sets `aria-label`.
    pub fn aria_label(self, label: impl Into<String>) -> Self {
        self.with_aria("label", label)
    }

    pub fn with_state(mut self, state: PseudoState) -> Self {
        self.states.insert(state);
        self
    }

    pub fn without_state(mut self, state: PseudoState) -> Self {
        self.states.remove(&state);
        self
    }

    /// Sets or clears a state.
    pub fn set_state(self, state: PseudoState, on: bool) -> Self {
        if on {
            self.with_state(state)
        } else {
            self.without_state(state)
        }
    }

    pub fn theme(&self) -> ColorMode {
        self.theme
    }

    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    pub fn data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    pub fn aria(&self, name: &str) -> Option<&str> {
        self.aria.get(name).map(String::as_str)
    }

    pub fn has_state(&self, state: PseudoState) -> bool {
        self.states.contains(&state)
    }
}
