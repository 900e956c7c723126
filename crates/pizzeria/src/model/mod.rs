//! Plain data types shared by the cart store, the menu and the views.

pub mod line_item;
pub mod menu;
pub mod user;

pub use line_item::*;
pub use menu::*;
pub use user::*;
