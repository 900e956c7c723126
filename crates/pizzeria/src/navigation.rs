//! Navigation requests emitted by the views. Views never route themselves; they return a
//! [`Route`] and leave the actual page change to whoever drives them.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Menu,
    Cart,
}

impl Route {
    /// Route name as understood by the router.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Menu => "menu",
            Route::Cart => "cart",
        }
    }

    /// Absolute path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Menu => "/menu",
            Route::Cart => "/cart",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
