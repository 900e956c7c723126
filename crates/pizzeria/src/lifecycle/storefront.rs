use crate::cart_actor;
use crate::clients::CartClient;
use crate::config::AppConfig;
use crate::model::Menu;
use crate::views::{CartView, Header, MenuView};
use std::time::Duration;
use tracing::{error, info, warn};

/// How long `shutdown` waits on the cart store before warning that a clone is still alive.
pub const SHUTDOWN_WARN_AFTER: Duration = Duration::from_secs(5);

/// The running storefront: one cart store plus the menu it sells from.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(AppConfig::from_env()?, Menu::house());
///
/// let mut menu = storefront.menu_view();
/// menu.dispatch(MenuIntent::AddToCart(PizzaId(1))).await?;
/// drop(menu);
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the cart store
    pub cart_client: CartClient,

    menu: Menu,
    config: AppConfig,
    shutdown_warn_after: Duration,

    /// Cart store task (awaited on shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Spawns the cart store. Must be called inside a Tokio runtime.
    pub fn new(config: AppConfig, menu: Menu) -> Self {
        let (cart_actor, cart_client) = cart_actor::new(config.channel_capacity);
        let handle = tokio::spawn(cart_actor.run(()));
        info!(
            capacity = config.channel_capacity,
            pizzas = menu.items().len(),
            "Storefront started"
        );

        Self {
            cart_client,
            menu,
            config,
            shutdown_warn_after: SHUTDOWN_WARN_AFTER,
            handle,
        }
    }

    /// Overrides [`SHUTDOWN_WARN_AFTER`].
    pub fn with_shutdown_warning(mut self, after: Duration) -> Self {
        self.shutdown_warn_after = after;
        self
    }

    pub fn header(&self) -> Header {
        Header::new(self.cart_client.clone(), self.config.user.clone())
            .with_currency(self.config.currency.clone())
    }

    pub fn menu_view(&self) -> MenuView {
        MenuView::new(self.menu.clone(), self.cart_client.clone())
            .with_currency(self.config.currency.clone())
    }

    pub fn cart_view(&self) -> CartView {
        CartView::new(self.cart_client.clone(), self.config.user.clone())
            .with_currency(self.config.currency.clone())
    }

    /// Stops the cart store once every other client has been dropped.
    ///
    /// Views hold their own clients, so this keeps waiting while any view is alive. If the
    /// store is still running after the warning delay, a `warn!` names the likely cause and
    /// the wait continues.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store shut down cleanly
    /// - `Err(String)` if the store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // The store exits once its last sender is gone.
        drop(self.cart_client);

        let mut handle = self.handle;
        let joined = match tokio::time::timeout(self.shutdown_warn_after, &mut handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(
                    waited_ms = self.shutdown_warn_after.as_millis() as u64,
                    "Cart store still running; a view or client clone is still alive"
                );
                handle.await
            }
        };

        if let Err(e) = joined {
            error!("Cart store task failed: {:?}", e);
            return Err(format!("Cart store task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
