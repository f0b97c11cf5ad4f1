//! ==============================================================================
//! lib.rs - Overview Pages Area Navbar
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm component rendering the tab bar of an overview area.
//!     each tab links to the area url plus the page path and is
//!     highlighted while the current location matches it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - href and active matching come from the shared crate
//!     - page list loaded from a json config via fetch
//!
//! ==============================================================================

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use shared::NavbarConfig;
use wasm_bindgen::prelude::*;

mod api;
mod components;

pub use components::{icon_glyph, icon_view, unknown_icons, OverviewPagesAreaNavbar};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    let initial = NavbarConfig::default_overview();
    report_unknown_icons(&initial);
    let (config, set_config) = signal(initial);

    leptos::task::spawn_local(async move {
        match api::fetch_navbar_config(api::NAVBAR_CONFIG_URL).await {
            Ok(fetched) => {
                log!("loaded {} overview pages", fetched.pages.len());
                report_unknown_icons(&fetched);
                set_config.set(fetched);
            }
            Err(e) => warn!("using default overview pages: {}", e),
        }
    });

    view! {
        <Router>
            <OverviewPagesAreaNavbar
                area_url=Signal::derive(move || config.get().area_url)
                pages=Signal::derive(move || config.get().pages)
                class_name=Signal::derive(move || config.get().class_name)
            />
            <div class="container">
                <CurrentLocation />
            </div>
        </Router>
    }
}

fn report_unknown_icons(config: &NavbarConfig) {
    for name in unknown_icons(&config.pages) {
        warn!("unknown navbar icon {:?}", name);
    }
}

#[component]
fn CurrentLocation() -> impl IntoView {
    let location = use_location();

    view! {
        <p class="text-muted">{move || location.pathname.get()}</p>
    }
}
