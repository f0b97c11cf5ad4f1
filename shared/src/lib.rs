//! ==============================================================================
//! lib.rs - shared types for the overview pages area navbar
//! ==============================================================================
//!
//! purpose:
//!     view-model and pure rendering logic for the overview area navbar.
//!     everything here is plain rust so it can be tested natively; the
//!     leptos component in navbar/ only maps these values to markup.
//!
//! relationships:
//!     - used by: navbar (OverviewPagesAreaNavbar, config fetch, demo app)
//!
//! matching rules:
//!     an href is compared against the current pathname only. query and
//!     fragment are dropped, trailing slashes are insignificant and the
//!     comparison ignores case. exact links must match the whole path,
//!     other links match the path or anything below it.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// class names
// ==============================================================================

pub const NAVBAR_CLASS_NAME: &str = "overview-pages-area-navbar border-bottom";
pub const NAV_ITEM_CLASS_NAME: &str = "overview-pages-area-navbar__nav-item nav-item";
pub const NAV_LINK_CLASS_NAME: &str = "overview-pages-area-navbar__nav-link nav-link rounded-0 px-3";
pub const NAV_LINK_ACTIVE_CLASS_NAME: &str = "overview-pages-area-navbar__nav-link--active";
pub const ICON_CLASS_NAME: &str = "icon-inline";
pub const BADGE_CLASS_NAME: &str = "badge badge-secondary ml-1";

// ==============================================================================
// page descriptors
// ==============================================================================

/// one tab of the overview area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDescriptor {
    /// display title, also used as the link's aria-label
    pub title: String,
    /// icon registry name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// badge value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// suffix appended to the area url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// only highlight on an exact location match
    #[serde(default)]
    pub exact: bool,
}

impl PageDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            count: None,
            path: None,
            exact: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }
}

/// navbar configuration, loadable from json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarConfig {
    pub area_url: String,
    #[serde(default)]
    pub pages: Vec<PageDescriptor>,
    /// extra class appended to the nav container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl NavbarConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// config used until a fetched one replaces it
    pub fn default_overview() -> Self {
        Self {
            area_url: "/overview".to_string(),
            pages: vec![
                PageDescriptor::new("Overview").with_icon("chart").exact(),
                PageDescriptor::new("Repositories")
                    .with_icon("repo")
                    .with_path("/repositories"),
                PageDescriptor::new("Members")
                    .with_icon("users")
                    .with_count(0)
                    .with_path("/members"),
                PageDescriptor::new("Settings")
                    .with_icon("settings")
                    .with_path("/settings"),
            ],
            class_name: None,
        }
    }

    pub fn items(&self) -> Vec<NavItem> {
        nav_items(&self.area_url, &self.pages)
    }
}

/// a page descriptor resolved against its area url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub icon: Option<String>,
    pub count: Option<u64>,
    pub href: String,
    pub exact: bool,
}

impl NavItem {
    pub fn is_active(&self, pathname: &str) -> bool {
        is_link_active(pathname, &self.href, self.exact)
    }
}

// ==============================================================================
// rendering logic
// ==============================================================================

/// one item per page, in page order
pub fn nav_items(area_url: &str, pages: &[PageDescriptor]) -> Vec<NavItem> {
    pages
        .iter()
        .map(|page| NavItem {
            title: page.title.clone(),
            icon: page.icon.clone(),
            count: page.count,
            href: link_href(area_url, page.path.as_deref()),
            exact: page.exact,
        })
        .collect()
}

/// area url followed by the page path; an empty path counts as absent
pub fn link_href(area_url: &str, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}", area_url, path),
        _ => area_url.to_string(),
    }
}

/// whether a link to `href` is active at `pathname`
pub fn is_link_active(pathname: &str, href: &str, exact: bool) -> bool {
    let target = normalize_path(href);
    let current = normalize_path(pathname);

    if exact || current == target {
        return current == target;
    }
    current
        .strip_prefix(&target)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// strip query, fragment and trailing slashes, lowercase the rest
fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim_end_matches('/').to_lowercase()
}

pub fn navbar_class(class_name: &str) -> String {
    format!("{} {}", NAVBAR_CLASS_NAME, class_name)
}

pub fn nav_link_class(active: bool) -> String {
    if active {
        format!("{} {}", NAV_LINK_CLASS_NAME, NAV_LINK_ACTIVE_CLASS_NAME)
    } else {
        NAV_LINK_CLASS_NAME.to_string()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<PageDescriptor> {
        vec![
            PageDescriptor::new("Overview").exact(),
            PageDescriptor::new("Members").with_count(3).with_path("/members"),
            PageDescriptor::new("Empty path").with_path(""),
            PageDescriptor::new("Inbox").with_count(0).with_path("/inbox"),
        ]
    }

    #[test]
    fn test_one_item_per_page_in_order() {
        let items = nav_items("/orgs/acme", &pages());
        assert_eq!(items.len(), 4);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Overview", "Members", "Empty path", "Inbox"]);
    }

    #[test]
    fn test_no_pages_no_items() {
        assert!(nav_items("/orgs/acme", &[]).is_empty());
    }

    #[test]
    fn test_href_concatenates_path() {
        let items = nav_items("/orgs/acme", &pages());
        assert_eq!(items[0].href, "/orgs/acme");
        assert_eq!(items[1].href, "/orgs/acme/members");
        assert_eq!(items[2].href, "/orgs/acme");
    }

    #[test]
    fn test_href_is_plain_concatenation() {
        assert_eq!(link_href("/a/", Some("/b")), "/a//b");
        assert_eq!(link_href("/a", Some("?tab=1")), "/a?tab=1");
    }

    #[test]
    fn test_count_carried_only_when_defined() {
        let items = nav_items("/x", &pages());
        assert_eq!(items[0].count, None);
        assert_eq!(items[1].count, Some(3));
        // zero is a defined count and keeps its badge
        assert_eq!(items[3].count, Some(0));
    }

    #[test]
    fn test_exact_match() {
        assert!(is_link_active("/orgs/acme", "/orgs/acme", true));
        assert!(is_link_active("/orgs/acme/", "/orgs/acme", true));
        assert!(!is_link_active("/orgs/acme/members", "/orgs/acme", true));
    }

    #[test]
    fn test_prefix_match_respects_segments() {
        assert!(is_link_active("/orgs/acme/members", "/orgs/acme", false));
        assert!(is_link_active("/orgs/acme/members/42", "/orgs/acme/members", false));
        assert!(!is_link_active("/orgs/acmecorp", "/orgs/acme", false));
        assert!(!is_link_active("/orgs", "/orgs/acme", false));
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        assert!(is_link_active("/anything/here", "/", false));
        assert!(is_link_active("/", "/", true));
        assert!(!is_link_active("/anything", "/", true));
    }

    #[test]
    fn test_match_ignores_query_and_case() {
        assert!(is_link_active("/Orgs/ACME", "/orgs/acme?tab=1", true));
        assert!(is_link_active("/orgs/acme", "/orgs/acme#top", true));
    }

    #[test]
    fn test_nav_item_active() {
        let items = nav_items("/orgs/acme", &pages());
        assert!(items[0].is_active("/orgs/acme"));
        assert!(!items[0].is_active("/orgs/acme/members"));
        assert!(items[1].is_active("/orgs/acme/members"));
    }

    #[test]
    fn test_link_classes() {
        assert_eq!(nav_link_class(false), NAV_LINK_CLASS_NAME);
        assert!(nav_link_class(true).ends_with(NAV_LINK_ACTIVE_CLASS_NAME));
        assert_eq!(
            navbar_class("mb-3"),
            "overview-pages-area-navbar border-bottom mb-3"
        );
    }

    #[test]
    fn test_config_from_json_with_optional_fields() {
        let json = r#"{
            "area_url": "/users/alice",
            "pages": [
                { "title": "Profile", "exact": true },
                { "title": "Repos", "icon": "repo", "count": 12, "path": "/repos" }
            ]
        }"#;
        let config = NavbarConfig::from_json(json).unwrap();
        assert_eq!(config.class_name, None);
        assert_eq!(config.pages[0], PageDescriptor::new("Profile").exact());
        let items = config.items();
        assert_eq!(items[1].href, "/users/alice/repos");
        assert_eq!(items[1].icon.as_deref(), Some("repo"));
    }

    #[test]
    fn test_config_from_json_zero_count() {
        let json = r#"{ "area_url": "/a", "pages": [
            { "title": "Inbox", "count": 0, "path": "/inbox" },
            { "title": "Archive", "path": "/archive" }
        ] }"#;
        let items = NavbarConfig::from_json(json).unwrap().items();
        assert_eq!(items[0].count, Some(0));
        assert_eq!(items[1].count, None);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let json = r#"{ "area_url": "/a", "pages": [{ "title": "A", "paht": "/b" }] }"#;
        assert!(NavbarConfig::from_json(json).is_err());
    }

    #[test]
    fn test_config_serialization_omits_absent_fields() {
        let json = serde_json::to_string(&PageDescriptor::new("A")).unwrap();
        assert_eq!(json, r#"{"title":"A","exact":false}"#);
    }

    #[test]
    fn test_default_overview_is_well_formed() {
        let config = NavbarConfig::default_overview();
        let items = config.items();
        assert_eq!(items.len(), config.pages.len());
        assert!(items[0].is_active("/overview"));
        assert!(!items[0].is_active("/overview/settings"));
    }
}
