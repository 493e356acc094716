//! Utility groups used to detect conflicting classes.
//!
//! Two utilities conflict when they set the same property, e.g. `px-4` and
//! `px-0`, or `text-color` and `text-brand`. Utilities this module does not
//! know form a group of their own, so they only conflict with themselves.

use std::borrow::Cow;

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const FLEX: &[&str] = &["flex-1", "flex-auto", "flex-initial", "flex-none"];

const BORDER_STYLE: &[&str] = &[
    "border-solid",
    "border-dashed",
    "border-dotted",
    "border-double",
    "border-none",
];

const TEXT_ALIGN: &[&str] = &["text-left", "text-center", "text-right", "text-justify"];

const SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const ROUNDED_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

/// Prefixes whose remainder is the value, longest first where one is a
/// prefix of another.
const VALUE_PREFIXES: &[(&str, &str)] = &[
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("items-", "align-items"),
    ("self-", "align-self"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("z-", "z"),
    ("opacity-", "opacity"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("duration-", "duration"),
    ("delay-", "delay"),
    ("ease-", "ease"),
    ("cursor-", "cursor"),
    ("select-", "select"),
    ("content-", "content"),
    ("bg-", "bg-color"),
];

/// Border width sides, `border-t`, `border-t-0`, ...
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];

/// The group a utility belongs to, without variants.
pub(crate) fn utility_group(utility: &str) -> Cow<'_, str> {
    let bare = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&bare) {
        return Cow::Borrowed("display");
    }
    if POSITION.contains(&bare) {
        return Cow::Borrowed("position");
    }
    if FLEX_DIRECTION.contains(&bare) {
        return Cow::Borrowed("flex-direction");
    }
    if FLEX.contains(&bare) {
        return Cow::Borrowed("flex");
    }
    if bare == "transition" || bare.starts_with("transition-") {
        return Cow::Borrowed("transition");
    }
    if let Some(group) = border_group(bare) {
        return group;
    }
    if let Some(rest) = bare.strip_prefix("text-") {
        if TEXT_ALIGN.contains(&bare) {
            return Cow::Borrowed("text-align");
        }
        if SIZES.contains(&rest) {
            return Cow::Borrowed("text-size");
        }
        return Cow::Borrowed("text-color");
    }
    if bare == "rounded"
        || bare
            .strip_prefix("rounded-")
            .is_some_and(|size| ROUNDED_SIZES.contains(&size) || size.starts_with('['))
    {
        return Cow::Borrowed("rounded");
    }
    for (prefix, group) in VALUE_PREFIXES {
        if bare.starts_with(*prefix) {
            return Cow::Borrowed(*group);
        }
    }
    Cow::Borrowed(bare)
}

fn border_group(bare: &str) -> Option<Cow<'_, str>> {
    if bare == "border" {
        return Some(Cow::Borrowed("border-w"));
    }
    let rest = bare.strip_prefix("border-")?;
    if BORDER_WIDTHS.contains(&rest) {
        return Some(Cow::Borrowed("border-w"));
    }
    if BORDER_STYLE.contains(&bare) {
        return Some(Cow::Borrowed("border-style"));
    }
    let (side, width) = rest.split_once('-').unwrap_or((rest, ""));
    if BORDER_SIDES.contains(&side) && (width.is_empty() || BORDER_WIDTHS.contains(&width)) {
        return Some(Cow::Owned(format!("border-w-{}", side)));
    }
    Some(Cow::Borrowed("border-color"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_groups() {
        assert_eq!(utility_group("px-4"), utility_group("px-0"));
        assert_eq!(utility_group("gap-1"), utility_group("gap-[3px]"));
        assert_ne!(utility_group("px-4"), utility_group("py-4"));
        assert_ne!(utility_group("gap-4"), utility_group("gap-x-4"));
    }

    #[test]
    fn test_display_and_flex_are_distinct() {
        assert_eq!(utility_group("flex"), utility_group("hidden"));
        assert_ne!(utility_group("flex"), utility_group("flex-col"));
        assert_ne!(utility_group("flex"), utility_group("flex-1"));
        assert_eq!(utility_group("flex-row"), utility_group("flex-col"));
    }

    #[test]
    fn test_border_width_and_color() {
        assert_eq!(utility_group("border-b"), "border-w-b");
        assert_eq!(utility_group("border-t"), utility_group("border-t-0"));
        assert_eq!(utility_group("border"), utility_group("border-2"));
        assert_eq!(utility_group("border-border"), "border-color");
        assert_eq!(utility_group("border-transparent"), "border-color");
        assert_eq!(utility_group("border-dashed"), "border-style");
    }

    #[test]
    fn test_text_color_and_size() {
        assert_eq!(utility_group("text-color"), utility_group("text-brand"));
        assert_eq!(utility_group("text-sm"), "text-size");
        assert_eq!(utility_group("text-center"), "text-align");
    }

    #[test]
    fn test_negative_values_share_group() {
        assert_eq!(
            utility_group("-translate-x-full"),
            utility_group("translate-x-full")
        );
        assert_eq!(utility_group("top-[-24px]"), "top");
    }

    #[test]
    fn test_sizes_do_not_collide_with_min_max() {
        assert_eq!(utility_group("min-h-[var(--nav-height)]"), "min-h");
        assert_eq!(utility_group("h-8"), "h");
        assert_ne!(utility_group("h-8"), utility_group("min-h-8"));
    }

    #[test]
    fn test_unknown_utilities_are_their_own_group() {
        assert_eq!(utility_group("container"), "container");
        assert_ne!(utility_group("container"), utility_group("transform"));
    }
}
