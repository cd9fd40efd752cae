//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Resolve a location path to the view the host should render
//! - Navigate by route name, writing the new path to the host location
//! - Report the current route, with an explicit not-found sentinel
//!
//! # Design decisions
//! - Immutable after construction; every call is synchronous
//! - Exact string matching, first table entry wins
//! - History mode and base path shape location reads/writes only, never
//!   matching
//! - Explicit sentinel rather than a silent default view

use thiserror::Error;

use crate::history::{HistoryMode, LocationProvider};
use crate::route::{Route, RouteTable, ViewId};

/// Returned by [`Router::navigate`] when the requested name is not in the
/// table. The location is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route named `{name}`")]
pub struct UnknownRouteName {
    /// The name that failed to resolve.
    pub name: String,
}

/// Maps location paths to views and writes navigation back to the host.
///
/// Built once at application start and handed to whatever needs to trigger
/// navigation or read the current route; there is no global instance.
pub struct Router<L> {
    table: RouteTable,
    fallback: Route,
    mode: HistoryMode,
    base_path: String,
    location: L,
}

impl<L: LocationProvider> Router<L> {
    /// Build a router over `table`, reporting `fallback` whenever the
    /// current location matches nothing. The fallback is a sentinel and
    /// should not appear in the table itself.
    pub fn new(table: RouteTable, fallback: Route, location: L) -> Self {
        Self {
            table,
            fallback,
            mode: HistoryMode::default(),
            base_path: String::new(),
            location,
        }
    }

    /// Select the addressing scheme. Defaults to [`HistoryMode::BrowserPath`].
    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Deployment prefix stripped from read paths and prepended to written
    /// ones. `""` and `"/"` both mean served from the root.
    pub fn with_base_path(mut self, base: &str) -> Self {
        self.base_path = normalize_base(base);
        self
    }

    /// Exact-match lookup of `path` against the table, in table order.
    pub fn resolve(&self, path: &str) -> Option<ViewId> {
        self.table.by_path(path).map(|r| r.view)
    }

    /// Look up a route by name and move the host location to its path.
    pub fn navigate(&self, name: &str) -> Result<(), UnknownRouteName> {
        let route = self.table.by_name(name).ok_or_else(|| UnknownRouteName {
            name: name.to_string(),
        })?;
        self.location.push(&self.href(route.path));
        Ok(())
    }

    /// The route matching the current location, or the fallback sentinel.
    pub fn current_route(&self) -> &Route {
        match self.table.by_path(&self.current_path()) {
            Some(route) => route,
            None => &self.fallback,
        }
    }

    /// Route path read from the current location: mode applied, base path
    /// stripped.
    pub fn current_path(&self) -> String {
        match self.mode {
            HistoryMode::BrowserPath => strip_base(&self.location.pathname(), &self.base_path),
            HistoryMode::HashFragment => match self.location.fragment() {
                Some(frag) => ensure_leading_slash(&frag),
                None => "/".to_string(),
            },
        }
    }

    /// The not-found sentinel handed out when nothing matches.
    pub fn fallback(&self) -> &Route {
        &self.fallback
    }

    /// The table this router was built over.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The location provider backing this router.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// URL written to the location for a route path.
    fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::BrowserPath => {
                if self.base_path.is_empty() {
                    path.to_string()
                } else {
                    format!("{}{}", self.base_path, path)
                }
            }
            HistoryMode::HashFragment => {
                if self.base_path.is_empty() {
                    format!("#{path}")
                } else {
                    format!("{}/#{}", self.base_path, path)
                }
            }
        }
    }
}

/// `""` and `"/"` become empty; otherwise a leading slash and no trailing
/// one.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn strip_base(pathname: &str, base: &str) -> String {
    if base.is_empty() {
        return pathname.to_string();
    }
    match pathname.strip_prefix(base) {
        Some("") => "/".to_string(),
        // "/app2/x" shares the text of base "/app" but is outside it.
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => pathname.to_string(),
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
