use ra_nav::{HistoryMode, Route, ViewId};

/// View tokens the router hands back. `app.rs` decides which component
/// each one renders.
pub mod views {
    use ra_nav::ViewId;

    pub const HOME: ViewId = ViewId::new("home");
    pub const DASHBOARD: ViewId = ViewId::new("dashboard");
    pub const NOT_FOUND: ViewId = ViewId::new("not-found");
}

/// Canonical route table, fixed at build time.
pub static ROUTES: &[Route] = &[
    Route::new("/", "Home", views::HOME),
    Route::new("/dashboard", "Dashboard", views::DASHBOARD),
];

/// Sentinel reported when the location matches nothing. Kept out of the
/// table so it can never be matched or navigated to by name.
pub static NOT_FOUND_ROUTE: Route = Route::new("", "NotFound", views::NOT_FOUND);

/// Static product configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Backend API root, no trailing slash.
    pub api_base: &'static str,

    /// Prefix the app is served under; empty when at the domain root.
    pub base_path: &'static str,
    pub history: HistoryMode,

    pub contact: Contact,
}

pub struct Contact {
    pub email: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Retail Assist",
    tagline: "asistente de atención al cliente",

    api_base: "/api",

    base_path: "",
    history: HistoryMode::BrowserPath,

    contact: Contact {
        email: "soporte@retail-assist.cl",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use ra_nav::RouteTable;

    #[test]
    fn test_route_table_is_well_formed() {
        let table = RouteTable::new(ROUTES);
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_path("/").map(|r| r.view), Some(views::HOME));
        assert_eq!(
            table.by_name("Dashboard").map(|r| r.path),
            Some("/dashboard")
        );
    }

    #[test]
    fn test_sentinel_stays_out_of_the_table() {
        let table = RouteTable::new(ROUTES);
        assert!(table.by_path(NOT_FOUND_ROUTE.path).is_none());
        assert!(table.by_name(NOT_FOUND_ROUTE.name).is_none());
    }
}
