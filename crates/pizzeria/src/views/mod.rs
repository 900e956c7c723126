//! Page controllers. Each view owns a [`CartClient`](crate::clients::CartClient) clone,
//! renders a plain screen value and turns intents into cart calls or [`Route`](crate::navigation::Route)s.

pub mod cart;
pub mod header;
pub mod menu;

pub use cart::{CartBody, CartIntent, CartLine, CartScreen, CartView};
pub use header::{CartBadge, Header, HeaderBar, HeaderIntent};
pub use menu::{MenuIntent, MenuRow, MenuScreen, MenuView};
