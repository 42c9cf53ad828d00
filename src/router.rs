//! Hash-history routing between the two views of the shell.
//!
//! Matching follows the usual SPA router defaults: case-insensitive, one
//! optional trailing slash, query and fragment ignored. There is no
//! catch-all route; unknown paths simply do not resolve.

use derive_more::Display;

/// Views the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum View {
    LoginPanel,
    UserInformation,
}

/// A static path → view mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

static ROUTES: [Route; 2] = [
    Route {
        path: "/",
        name: "LoginPanel",
        view: View::LoginPanel,
    },
    Route {
        path: "/user-information",
        name: "UserInformation",
        view: View::UserInformation,
    },
];

/// The application's route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [Route],
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self { routes: &ROUTES }
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        self.routes
    }

    /// Resolve a path such as `/user-information` or `/User-Information/?tab=1`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(&path))
    }

    /// Look up a route by name.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolve a hash-history location: a full URL or a bare `#/path` fragment.
    #[must_use]
    pub fn resolve_href(&self, href: &str) -> Option<&Route> {
        self.resolve(&hash_path(href))
    }

    /// Link target for `route` under hash history.
    #[must_use]
    pub fn href(&self, route: &Route) -> String {
        format!("#{}", route.path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the routed path from a hash-history location.
///
/// `https://host/app/#/user-information` → `/user-information`. A missing or
/// empty fragment is the root.
#[must_use]
pub fn hash_path(href: &str) -> String {
    let fragment = href.split_once('#').map_or("", |(_, f)| f);
    if fragment.is_empty() {
        return "/".into();
    }
    if fragment.starts_with('/') {
        fragment.to_owned()
    } else {
        format!("/{fragment}")
    }
}

/// Strips query/fragment and a single trailing slash; ensures a leading slash.
fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_login() {
        let router = Router::new();
        assert_eq!(router.resolve("/").map(|r| r.view), Some(View::LoginPanel));
    }

    #[test]
    fn user_information_resolves() {
        let router = Router::new();
        let route = router.resolve("/user-information").unwrap();
        assert_eq!(route.view, View::UserInformation);
        assert_eq!(route.name, "UserInformation");
    }

    #[test]
    fn unknown_path_is_unresolved() {
        let router = Router::new();
        assert!(router.resolve("/nope").is_none());
        assert!(router.resolve("/user-information/extra").is_none());
        assert!(router.resolve("/user").is_none());
    }

    #[test]
    fn matching_tolerates_case_trailing_slash_and_query() {
        let router = Router::new();
        for path in [
            "/user-information/",
            "/User-Information",
            "/user-information?tab=billing",
            "user-information",
        ] {
            assert_eq!(
                router.resolve(path).map(|r| r.view),
                Some(View::UserInformation),
                "{path}"
            );
        }
        assert!(router.resolve("/user-information//").is_none());
    }

    #[test]
    fn empty_path_is_root() {
        let router = Router::new();
        assert_eq!(router.resolve("").map(|r| r.view), Some(View::LoginPanel));
    }

    #[test]
    fn resolve_by_name() {
        let router = Router::new();
        assert_eq!(router.resolve_name("LoginPanel").map(|r| r.path), Some("/"));
        assert!(router.resolve_name("loginpanel").is_none());
    }

    #[test]
    fn hash_locations() {
        let router = Router::new();
        assert_eq!(
            router
                .resolve_href("https://app.example.com/#/user-information")
                .map(|r| r.view),
            Some(View::UserInformation)
        );
        assert_eq!(
            router.resolve_href("https://app.example.com/").map(|r| r.view),
            Some(View::LoginPanel)
        );
        assert_eq!(router.resolve_href("#/").map(|r| r.view), Some(View::LoginPanel));
        assert!(router.resolve_href("#/nope").is_none());
    }

    #[test]
    fn server_path_is_ignored_under_hash_history() {
        let router = Router::new();
        assert_eq!(
            router
                .resolve_href("https://app.example.com/user-information")
                .map(|r| r.view),
            Some(View::LoginPanel)
        );
    }

    #[test]
    fn href_round_trips_through_hash_path() {
        let router = Router::new();
        for route in router.routes() {
            let href = router.href(route);
            assert!(href.starts_with('#'));
            assert_eq!(router.resolve_href(&href), Some(route));
        }
    }

    #[test]
    fn table_has_two_routes() {
        assert_eq!(Router::new().routes().len(), 2);
    }
}
