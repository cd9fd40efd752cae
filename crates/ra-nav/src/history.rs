//! Location access and addressing schemes.
//!
//! The router never touches the browser directly. It reads and writes the
//! location through [`LocationProvider`]; the host supplies a real
//! implementation over the history API, tests use [`MemoryLocation`].

use std::cell::RefCell;

/// How route paths are encoded in the host location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Real URL paths, written through the history API.
    #[default]
    BrowserPath,
    /// Route path carried in the `#` fragment; the document path is left
    /// alone.
    HashFragment,
}

/// Read/write access to the host's current location.
///
/// The router is the single writer. Reads happen on every lookup, so a
/// location changed from outside (back/forward buttons) is picked up
/// without extra bookkeeping.
pub trait LocationProvider {
    /// Current path component, e.g. `/dashboard`.
    fn pathname(&self) -> String;

    /// Current fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Replace the visible location with `url` without a page load.
    fn push(&self, url: &str);
}

/// In-memory location for tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    url: RefCell<String>,
}

impl MemoryLocation {
    /// Start at `url`, a path with an optional `#fragment` suffix.
    pub fn new(url: &str) -> Self {
        Self {
            url: RefCell::new(url.to_string()),
        }
    }

    /// The full URL as last written.
    pub fn url(&self) -> String {
        self.url.borrow().clone()
    }
}

impl LocationProvider for MemoryLocation {
    fn pathname(&self) -> String {
        let url = self.url.borrow();
        let path = url.split('#').next().unwrap_or("");
        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }

    fn fragment(&self) -> Option<String> {
        let url = self.url.borrow();
        url.split_once('#')
            .map(|(_, frag)| frag.to_string())
            .filter(|frag| !frag.is_empty())
    }

    fn push(&self, url: &str) {
        *self.url.borrow_mut() = url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_browser_path() {
        assert_eq!(HistoryMode::default(), HistoryMode::BrowserPath);
    }

    #[test]
    fn test_memory_location_splits_fragment() {
        let location = MemoryLocation::new("/app/index.html#/dashboard");
        assert_eq!(location.pathname(), "/app/index.html");
        assert_eq!(location.fragment().as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_memory_location_without_fragment() {
        let location = MemoryLocation::new("/dashboard");
        assert_eq!(location.pathname(), "/dashboard");
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn test_memory_location_empty_fragment_is_none() {
        let location = MemoryLocation::new("/#");
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn test_memory_location_defaults_to_root() {
        let location = MemoryLocation::default();
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn test_push_replaces_url() {
        let location = MemoryLocation::new("/");
        location.push("/dashboard");
        assert_eq!(location.url(), "/dashboard");
        assert_eq!(location.pathname(), "/dashboard");
    }
}
