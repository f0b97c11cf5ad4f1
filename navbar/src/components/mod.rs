//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod icons;
mod navbar;

pub use icons::{icon_glyph, icon_view, unknown_icons};
pub use navbar::OverviewPagesAreaNavbar;
