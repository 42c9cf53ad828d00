use crate::router::{Route, Router, View};

/// Where the navigator currently points.
///
/// `route` is `None` when `path` matched nothing; the location is still
/// current, there is just no view to render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Location {
    pub path: String,
    pub route: Option<Route>,
}

/// Tracks the current location and history over a [`Router`].
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Router,
    current: Location,
    history: Vec<Location>,
}

impl Navigator {
    /// Start at `/`.
    #[must_use]
    pub fn new(router: Router) -> Self {
        let current = locate(&router, "/");
        Self {
            router,
            current,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// View to render, or `None` when the current location is unresolved.
    #[must_use]
    pub fn current_view(&self) -> Option<View> {
        self.current.route.map(|r| r.view)
    }

    /// Navigate to `path`, keeping the previous location in history.
    pub fn push(&mut self, path: &str) -> &Location {
        let next = locate(&self.router, path);
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        &self.current
    }

    /// Navigate to `path` without adding a history entry.
    pub fn replace(&mut self, path: &str) -> &Location {
        self.current = locate(&self.router, path);
        &self.current
    }

    /// Return to the previous location. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<&Location> {
        let previous = self.history.pop()?;
        tracing::debug!(path = %previous.path, "Navigated back");
        self.current = previous;
        Some(&self.current)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Router::new())
    }
}

fn locate(router: &Router, path: &str) -> Location {
    let route = router.resolve(path).copied();
    match &route {
        Some(r) => tracing::debug!(path = %path, route = r.name, "Navigated"),
        None => tracing::warn!(path = %path, "No route matches location"),
    }
    Location {
        path: path.to_owned(),
        route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_login() {
        let nav = Navigator::default();
        assert_eq!(nav.current().path, "/");
        assert_eq!(nav.current_view(), Some(View::LoginPanel));
    }

    #[test]
    fn push_resolves_view() {
        let mut nav = Navigator::default();
        let location = nav.push("/user-information");
        assert_eq!(location.route.map(|r| r.view), Some(View::UserInformation));
        assert_eq!(nav.current_view(), Some(View::UserInformation));
    }

    #[test]
    fn push_unknown_path_leaves_location_unresolved() {
        let mut nav = Navigator::default();
        nav.push("/nope");
        assert_eq!(nav.current().path, "/nope");
        assert!(nav.current().route.is_none());
        assert_eq!(nav.current_view(), None);
    }

    #[test]
    fn back_restores_previous_location() {
        let mut nav = Navigator::default();
        nav.push("/user-information");
        nav.push("/nope");

        assert_eq!(
            nav.back().and_then(|l| l.route).map(|r| r.view),
            Some(View::UserInformation)
        );
        assert_eq!(nav.back().map(|l| l.path.as_str()), Some("/"));
        assert!(nav.back().is_none());
        assert_eq!(nav.current_view(), Some(View::LoginPanel));
    }

    #[test]
    fn replace_skips_history() {
        let mut nav = Navigator::default();
        nav.replace("/user-information");
        assert_eq!(nav.current_view(), Some(View::UserInformation));
        assert!(nav.back().is_none());
    }
}
