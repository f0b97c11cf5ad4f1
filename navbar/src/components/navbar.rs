//! Overview area navbar component

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shared::{
    is_link_active, nav_items, nav_link_class, navbar_class, NavItem, PageDescriptor,
    BADGE_CLASS_NAME, NAV_ITEM_CLASS_NAME,
};

use super::icon_view;

/// Tab bar for an overview area. One link per page, in page order, each
/// pointing at `area_url` plus the page path. Must be rendered inside a
/// `Router`.
#[component]
pub fn OverviewPagesAreaNavbar(
    #[prop(into)] area_url: Signal<String>,
    #[prop(into)] pages: Signal<Vec<PageDescriptor>>,
    #[prop(optional, into)] class_name: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <nav class=move || navbar_class(&class_name.get().unwrap_or_default())>
            <div class="container">
                <ul class="nav flex-nowrap">
                    {move || {
                        nav_items(&area_url.get(), &pages.get())
                            .into_iter()
                            .map(|item| view! { <NavbarLink item=item /> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </nav>
    }
}

#[component]
fn NavbarLink(item: NavItem) -> impl IntoView {
    let NavItem { title, icon, count, href, exact } = item;
    let location = use_location();
    let label = title.clone();

    // tracks the location so only this link's class changes on navigation
    let active = {
        let href = href.clone();
        Memo::new(move |_| is_link_active(&location.pathname.get(), &href, exact))
    };

    view! {
        <li class=NAV_ITEM_CLASS_NAME>
            <a
                href=href
                class=move || nav_link_class(active.get())
                aria-label=label
                aria-current=move || active.get().then_some("page")
            >
                {icon.and_then(|name| icon_view(&name))}
                " "
                {title}
                " "
                {count.map(|count| view! { <span class=BADGE_CLASS_NAME>{count}</span> })}
            </a>
        </li>
    }
}
