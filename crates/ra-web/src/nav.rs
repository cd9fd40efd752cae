//! Shared navigation handle.
//!
//! The router is built exactly once, in [`App`](crate::app::App), and
//! passed down through Leptos context. Nothing in the application reaches
//! for a global router instance.

use std::sync::Arc;

use leptos::prelude::*;
use ra_nav::{Route, Router, RouteTable, ViewId};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config;
use crate::location::BrowserLocation;

/// Router plus a reactive snapshot of the route the location selects.
#[derive(Clone)]
pub struct Nav {
    router: Arc<Router<BrowserLocation>>,
    active: RwSignal<Route>,
}

impl Nav {
    /// Build the application router and snapshot the route for the current
    /// location.
    pub fn new() -> Self {
        let router = Router::new(
            RouteTable::new(config::ROUTES),
            config::NOT_FOUND_ROUTE,
            BrowserLocation,
        )
        .with_mode(config::CONFIG.history)
        .with_base_path(config::CONFIG.base_path);

        let active = RwSignal::new(*router.current_route());
        Self {
            router: Arc::new(router),
            active,
        }
    }

    /// View selected by the current location, reactively.
    pub fn active_view(&self) -> ViewId {
        self.active.get().view
    }

    /// Table path for a route name, for plain `href` attributes.
    pub fn path_of(&self, name: &str) -> Option<&'static str> {
        self.router.table().by_name(name).map(|r| r.path)
    }

    /// Navigate to a named route. An unknown name is reported to the
    /// console and leaves the location alone.
    pub fn go(&self, name: &str) {
        match self.router.navigate(name) {
            Ok(()) => self.sync(),
            Err(err) => web_sys::console::error_1(&err.to_string().into()),
        }
    }

    /// Re-read the location after an external change (back/forward).
    pub fn sync(&self) {
        self.active.set(*self.router.current_route());
    }

    /// Hook browser history traversal to [`Nav::sync`].
    pub fn listen_popstate(&self) {
        let nav = self.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            nav.sync();
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        // Registered once for the app lifetime, so leaking the closure is
        // the intended way to keep it alive.
        closure.forget();
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the [`Nav`] provided by the root component.
pub fn use_nav() -> Nav {
    expect_context::<Nav>()
}
