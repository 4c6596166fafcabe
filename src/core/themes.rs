//! The fixed catalog of color themes.
//!
//! Themes are compile-time data: the settings screen renders the catalog,
//! and the preference store persists nothing but the selected id.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub rating: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePreview {
    pub gradient: [&'static str; 2],
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ThemeColors,
    pub preview: ThemePreview,
}

/// Every available theme, in display order. The first entry is the default.
pub const THEMES: &[Theme] = &[
    Theme {
        id: "default",
        name: "Classic Red",
        colors: ThemeColors {
            primary: "#ff4757",
            background: "#000000",
            card: "#1a1a1a",
            text: "#ffffff",
            border: "#333333",
            accent: "#ff4757",
            rating: "#ffd700",
        },
        preview: ThemePreview {
            gradient: ["#ff4757", "#ff6b81"],
            image: "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=800&auto=format&fit=crop&q=60",
        },
    },
    Theme {
        id: "ocean",
        name: "Deep Ocean",
        colors: ThemeColors {
            primary: "#00bcd4",
            background: "#051b2c",
            card: "#0a2942",
            text: "#ffffff",
            border: "#1a3f5c",
            accent: "#00bcd4",
            rating: "#4dd0e1",
        },
        preview: ThemePreview {
            gradient: ["#00bcd4", "#00acc1"],
            image: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=800&auto=format&fit=crop&q=60",
        },
    },
    Theme {
        id: "aurora",
        name: "Northern Lights",
        colors: ThemeColors {
            primary: "#a855f7",
            background: "#0f172a",
            card: "#1e293b",
            text: "#ffffff",
            border: "#334155",
            accent: "#a855f7",
            rating: "#38bdf8",
        },
        preview: ThemePreview {
            gradient: ["#a855f7", "#38bdf8"],
            image: "https://images.unsplash.com/photo-1464802686167-b939a6910659?w=800&auto=format&fit=crop&q=60",
        },
    },
    Theme {
        id: "sunset",
        name: "Golden Hour",
        colors: ThemeColors {
            primary: "#f59e0b",
            background: "#27272a",
            card: "#3f3f46",
            text: "#ffffff",
            border: "#52525b",
            accent: "#f59e0b",
            rating: "#fbbf24",
        },
        preview: ThemePreview {
            gradient: ["#f59e0b", "#d97706"],
            image: "https://images.unsplash.com/photo-1502790671504-542ad42d5189?w=800&auto=format&fit=crop&q=60",
        },
    },
];

#[must_use]
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

#[must_use]
pub fn by_id(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// Resolve an id against the catalog, falling back to the default for
/// unknown ids. Selection never fails on a bad id.
#[must_use]
pub fn resolve(id: &str) -> &'static Theme {
    by_id(id).unwrap_or_else(default_theme)
}
