//! Route table types.
//!
//! A route binds a literal location path to a named view. The table is
//! built once at application start from a static configuration literal and
//! never mutated afterwards.

/// Opaque token identifying a renderable unit.
///
/// The host rendering layer decides what a `ViewId` means; the router only
/// carries it from a matched route to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(&'static str);

impl ViewId {
    /// Wrap the host-side label for a view.
    pub const fn new(label: &'static str) -> Self {
        Self(label)
    }

    /// The label this token was created with.
    pub const fn label(&self) -> &'static str {
        self.0
    }
}

/// A named binding from a location path to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Literal path matched against the location, e.g. `/dashboard`.
    pub path: &'static str,
    /// Unique human-readable identifier used for navigation by name.
    pub name: &'static str,
    /// View activated when this route matches.
    pub view: ViewId,
}

impl Route {
    pub const fn new(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self { path, name, view }
    }
}

/// Ordered collection of routes. The first entry whose path matches wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from a configuration slice.
    ///
    /// Paths and names must each be unique across the table. The table is
    /// fixed at build time, so a violation is a programming error and is
    /// only checked in debug builds.
    pub fn new(routes: &[Route]) -> Self {
        debug_assert!(unique_by(routes, |r| r.path), "duplicate route path");
        debug_assert!(unique_by(routes, |r| r.name), "duplicate route name");
        Self {
            routes: routes.to_vec(),
        }
    }

    /// First route whose path is exactly `path`.
    pub fn by_path(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Route registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn unique_by(routes: &[Route], key: fn(&Route) -> &'static str) -> bool {
    routes
        .iter()
        .enumerate()
        .all(|(i, r)| routes[..i].iter().all(|prev| key(prev) != key(r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: ViewId = ViewId::new("HomeView");
    const DASHBOARD: ViewId = ViewId::new("DashboardView");

    fn table() -> RouteTable {
        RouteTable::new(&[
            Route::new("/", "Home", HOME),
            Route::new("/dashboard", "Dashboard", DASHBOARD),
        ])
    }

    #[test]
    fn test_lookup_by_path() {
        let table = table();
        assert_eq!(table.by_path("/").map(|r| r.view), Some(HOME));
        assert_eq!(table.by_path("/dashboard").map(|r| r.view), Some(DASHBOARD));
        assert!(table.by_path("/missing").is_none());
    }

    #[test]
    fn test_lookup_is_exact_not_prefix() {
        let table = table();
        assert!(table.by_path("/dash").is_none());
        assert!(table.by_path("/dashboard/").is_none());
        assert!(table.by_path("dashboard").is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let table = table();
        assert_eq!(table.by_name("Dashboard").map(|r| r.path), Some("/dashboard"));
        assert!(table.by_name("dashboard").is_none(), "names are case-sensitive");
        assert!(table.by_name("Settings").is_none());
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let names: Vec<&str> = table().iter().map(|r| r.name).collect();
        assert_eq!(names, ["Home", "Dashboard"]);
    }

    #[test]
    #[should_panic(expected = "duplicate route path")]
    fn test_duplicate_path_asserts() {
        RouteTable::new(&[
            Route::new("/", "Home", HOME),
            Route::new("/", "Landing", DASHBOARD),
        ]);
    }

    #[test]
    #[should_panic(expected = "duplicate route name")]
    fn test_duplicate_name_asserts() {
        RouteTable::new(&[
            Route::new("/", "Home", HOME),
            Route::new("/home", "Home", DASHBOARD),
        ]);
    }
}
