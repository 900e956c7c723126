//! Demo session: browse the menu, fill the cart, adjust it, remove a pizza through the
//! confirmation prompt, place the order and clear the cart.
//!
//! ```bash
//! PIZZERIA_USER=Alice RUST_LOG=info cargo run -p pizzeria
//! ```

use pizzeria::config::AppConfig;
use pizzeria::lifecycle::Storefront;
use pizzeria::model::{Menu, PizzaId};
use pizzeria::views::{CartIntent, MenuIntent};
use store_actor::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(user = ?config.user, currency = %config.currency, "Starting storefront");

    let storefront = Storefront::new(config, Menu::house());
    let mut header = storefront.header();
    let mut menu = storefront.menu_view();
    let mut cart = storefront.cart_view();

    let span = tracing::info_span!("browsing");
    async {
        for id in [1, 4, 1, 7] {
            menu.dispatch(MenuIntent::AddToCart(PizzaId(id))).await?;
        }
        println!("{}", header.render().await?);
        println!("{}", menu.render().await?);
        Ok::<_, pizzeria::cart_actor::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("cart");
    async {
        cart.dispatch(CartIntent::Increment(PizzaId(4))).await?;
        cart.dispatch(CartIntent::Decrement(PizzaId(1))).await?;
        println!("{}", cart.render().await?);

        cart.dispatch(CartIntent::RequestRemove(PizzaId(4))).await?;
        println!("{}", cart.render().await?);
        cart.dispatch(CartIntent::CancelRemove).await?;

        cart.dispatch(CartIntent::RequestRemove(PizzaId(1))).await?;
        cart.dispatch(CartIntent::ConfirmRemove).await?;
        println!("{}", cart.render().await?);

        cart.dispatch(CartIntent::PlaceOrder).await?;
        cart.dispatch(CartIntent::ClearCart).await?;
        println!("{}", cart.render().await?);

        if let Some(route) = cart.dispatch(CartIntent::GoBack).await? {
            info!(route = %route, path = route.path(), "Navigation requested");
        }
        Ok::<_, pizzeria::cart_actor::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    // Views hold cart clients; release them so the store can stop.
    drop((header, menu, cart));
    storefront.shutdown().await?;

    info!("Storefront demo completed successfully");
    Ok(())
}
