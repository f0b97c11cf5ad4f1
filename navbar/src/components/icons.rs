//! Named navbar icons

use leptos::prelude::*;
use shared::{PageDescriptor, ICON_CLASS_NAME};

/// glyph for a registered icon name
pub fn icon_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "repo" => "📦",
        "search" => "🔍",
        "code" => "💻",
        "users" => "👥",
        "chart" => "📊",
        "settings" => "⚙️",
        "book" => "📖",
        "bell" => "🔔",
        _ => return None,
    };
    Some(glyph)
}

/// icon names used by `pages` that have no glyph, in page order
pub fn unknown_icons(pages: &[PageDescriptor]) -> Vec<&str> {
    pages
        .iter()
        .filter_map(|page| page.icon.as_deref())
        .filter(|name| icon_glyph(name).is_none())
        .collect()
}

/// Renders the icon inline before a tab title. Unknown names render nothing;
/// they are reported once per config load through `unknown_icons`.
pub fn icon_view(name: &str) -> Option<AnyView> {
    icon_glyph(name).map(|glyph| {
        view! { <span class=ICON_CLASS_NAME aria-hidden="true">{glyph}</span> }.into_any()
    })
}
