//! Class definitions for the navigation component.

use once_cell::sync::Lazy;

use super::StyleTable;
use crate::slot::Slot;

/// Raw class lists per slot, in the order they are emitted.
pub const NAV_SLOT_CLASSES: &[(Slot, &[&str])] = &[
    (Slot::Logo, &["items-center justify-start"]),
    (
        Slot::Menu,
        &[
            "flex gap-1 md:flex-col py-3 px-4 laptop:px-0 laptop:gap-4 laptop:flex-row",
            "not-first:border-t not-first:border-border laptop:not-first:border-t-0",
        ],
    ),
    (
        Slot::MenuItem,
        &[
            "relative h-auto text-color data-[active=true]:text-brand hover:text-brand",
            r#"laptop:data-[active=true]:before:content-[""]"#,
            "laptop:data-[active=true]:before:absolute",
            "laptop:data-[active=true]:before:block",
            "laptop:data-[active=true]:before:w-full",
            "laptop:data-[active=true]:before:h-1",
            "laptop:data-[active=true]:before:bg-brand",
            "laptop:data-[active=true]:before:top-[-24px]",
        ],
    ),
    (Slot::NavConnection, &["items-center"]),
    (Slot::NavNetwork, &["h-8"]),
    (
        Slot::ThemeToggle,
        &[
            "relative cursor-pointer flex items-center px-2 w-12 h-8 rounded-full border-border",
            "bg-gray-3 select-none",
        ],
    ),
    (
        Slot::ThemeToggleIcon,
        &[
            "absolute opacity-100 transition-all duration-200 text-icon transform",
            "aria-[label=Sun]:right-2",
            "aria-[label=Moon]:left-2",
            "dark-theme:aria-[label=Sun]:transform",
            "dark-theme:aria-[label=Sun]:opacity-0",
            "dark-theme:aria-[label=Sun]:-translate-x-full",
            "light-theme:aria-[label=Moon]:transform",
            "light-theme:aria-[label=Moon]:opacity-0",
            "light-theme:aria-[label=Moon]:translate-x-full",
        ],
    ),
    (
        Slot::Desktop,
        &[
            "gap-8 container mx-auto flex-row items-center",
            "laptop:px-4 laptop:flex min-h-[var(--nav-height)]",
        ],
    ),
    (
        Slot::Mobile,
        &[
            "flex-col border-b border-border",
            "laptop:hidden fuel-[NavLogo]:flex-1",
        ],
    ),
    (
        Slot::NavWrapper,
        &["border-b border-border min-h-[var(--nav-height)]"],
    ),
    (
        Slot::MobileContent,
        &[
            "flex items-center py-2 px-4 border-b border-transparent",
            "transition-colors duration-200 ease-in-out",
            "min-h-[var(--nav-height)] data-[open=true]:border-border",
            "fuel-[NavLogo]:flex-1",
            "fuel-[IconButton]:ml-2 fuel-[IconButton]:text-icon",
        ],
    ),
];

pub(super) static NAV_STYLES: Lazy<StyleTable> = Lazy::new(|| {
    StyleTable::from_definitions(NAV_SLOT_CLASSES)
        .unwrap_or_else(|e| panic!("navigation class definitions are invalid: {e}"))
});
