//! Static registry of named color schemes.
//!
//! Every scheme covers the same set of semantic roles, so switching schemes
//! never leaves a style property dangling.

/// Semantic roles every scheme assigns, in registry order.
pub const ROLES: &[&str] =
    &["primary", "primary-dark", "accent", "surface", "text", "muted"];

/// One named scheme: a fixed role-to-color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

pub const CLASSIC_BLUE: ColorScheme = ColorScheme {
    name: "classic-blue",
    colors: &[
        ("primary", "#1d4ed8"),
        ("primary-dark", "#1e3a8a"),
        ("accent", "#f59e0b"),
        ("surface", "#f8fafc"),
        ("text", "#0f172a"),
        ("muted", "#64748b"),
    ],
};

pub const CRAFT_ORANGE: ColorScheme = ColorScheme {
    name: "craft-orange",
    colors: &[
        ("primary", "#ea580c"),
        ("primary-dark", "#9a3412"),
        ("accent", "#0ea5e9"),
        ("surface", "#fffbf5"),
        ("text", "#1c1917"),
        ("muted", "#78716c"),
    ],
};

pub const SLATE_GREEN: ColorScheme = ColorScheme {
    name: "slate-green",
    colors: &[
        ("primary", "#047857"),
        ("primary-dark", "#064e3b"),
        ("accent", "#eab308"),
        ("surface", "#f7faf9"),
        ("text", "#111827"),
        ("muted", "#6b7280"),
    ],
};

pub const ANTHRACITE: ColorScheme = ColorScheme {
    name: "anthracite",
    colors: &[
        ("primary", "#334155"),
        ("primary-dark", "#1e293b"),
        ("accent", "#f43f5e"),
        ("surface", "#f1f5f9"),
        ("text", "#020617"),
        ("muted", "#94a3b8"),
    ],
};

/// All registered schemes.
pub const SCHEMES: &[ColorScheme] = &[CLASSIC_BLUE, CRAFT_ORANGE, SLATE_GREEN, ANTHRACITE];

/// Pure lookup: `None` for unrecognized scheme names.
#[must_use]
pub fn scheme_properties(name: &str) -> Option<&'static ColorScheme> {
    SCHEMES.iter().find(|scheme| scheme.name == name)
}
