//! Client-side navigation.
//!
//! Views ask a [`Navigator`] to move to a named [`Route`]. What "moving"
//! means (a browser history push, a terminal screen switch) is up to the
//! implementation.

use std::fmt::Display;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Named destinations the storefront can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Cart,
    PlaceOrder,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Cart => "/cart",
            Route::PlaceOrder => "/place-order",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Logs navigation requests. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(%route, "Navigate");
    }
}

/// Records every navigation for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}
