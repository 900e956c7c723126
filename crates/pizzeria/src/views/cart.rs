//! # Cart View
//!
//! The cart page. [`CartView::render`] reads the cart and the deletion prompt and produces
//! a [`CartScreen`]; [`CartView::dispatch`] routes one [`CartIntent`] to the cart store or
//! the [`DeletionFlow`].
//!
//! | Intent | Effect |
//! |---|---|
//! | `GoBack` | returns [`Route::Menu`] |
//! | `Increment(id)` / `Decrement(id)` | cart quantity change |
//! | `RequestRemove(id)` | opens the deletion prompt |
//! | `ConfirmRemove` | removes the pending line, closes the prompt |
//! | `CancelRemove` | closes the prompt |
//! | `PlaceOrder` | logs the cart contents, nothing else |
//! | `ClearCart` | empties the cart |
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::confirmation::DeletionFlow;
use crate::model::{CurrentUser, LineItem, PizzaId};
use crate::navigation::Route;
use crate::pricing::{format_amount, line_total, Derived, DerivedCache};
use std::fmt::Display;
use store_actor::ActorClient;
use tracing::{debug, info, instrument};

pub const BACK_LABEL: &str = "← Back to Menu";
pub const EMPTY_LABEL: &str = "Empty for now";
pub const ORDER_LABEL: &str = "ORDER PIZZAS";
pub const CLEAR_LABEL: &str = "CLEAR CART";
pub const CONFIRM_PROMPT: &str = "Remove this pizza from your cart?";

/// Everything a user can do on the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIntent {
    GoBack,
    Increment(PizzaId),
    Decrement(PizzaId),
    RequestRemove(PizzaId),
    ConfirmRemove,
    CancelRemove,
    PlaceOrder,
    ClearCart,
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: PizzaId,
    pub name: String,
    pub qty: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&LineItem> for CartLine {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            qty: item.qty,
            unit_price: format_amount(item.unit_price),
            line_total: line_total(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartBody {
    /// The empty-state splash.
    Empty,
    /// Item list plus the order panel.
    Items { lines: Vec<CartLine>, total: String },
}

/// The cart page as last rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CartScreen {
    pub greeting: Option<String>,
    pub body: CartBody,
    pub item_to_delete: Option<PizzaId>,
    pub currency: String,
}

impl CartScreen {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty)
    }

    pub fn confirmation_visible(&self) -> bool {
        self.item_to_delete.is_some()
    }

    /// Two-decimal total, `"0.00"` for the empty state.
    pub fn total_price(&self) -> &str {
        match &self.body {
            CartBody::Empty => "0.00",
            CartBody::Items { total, .. } => total,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        match &self.body {
            CartBody::Empty => &[],
            CartBody::Items { lines, .. } => lines,
        }
    }
}

impl Display for CartScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{BACK_LABEL}")?;
        if let Some(greeting) = &self.greeting {
            writeln!(f, "{greeting}")?;
        }
        match &self.body {
            CartBody::Empty => writeln!(f, "{EMPTY_LABEL}")?,
            CartBody::Items { lines, total } => {
                for line in lines {
                    writeln!(
                        f,
                        "  {}× {:<24} {}{}  [-] [+] [DELETE]",
                        line.qty, line.name, self.currency, line.line_total
                    )?;
                }
                writeln!(f, "Total: {}{}", self.currency, total)?;
                writeln!(f, "[{ORDER_LABEL}] [{CLEAR_LABEL}]")?;
            }
        }
        if self.confirmation_visible() {
            writeln!(f, "{CONFIRM_PROMPT} [DELETE] [CANCEL]")?;
        }
        Ok(())
    }
}

/// The cart page controller.
pub struct CartView {
    cart: CartClient,
    user: Option<CurrentUser>,
    currency: String,
    deletion: DeletionFlow,
    derived: DerivedCache,
}

impl CartView {
    pub fn new(cart: CartClient, user: Option<CurrentUser>) -> Self {
        Self {
            cart,
            user,
            currency: "$".to_string(),
            deletion: DeletionFlow::default(),
            derived: DerivedCache::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn deletion(&self) -> &DeletionFlow {
        &self.deletion
    }

    /// How often the derived values were actually recomputed.
    pub fn derived_computations(&self) -> u64 {
        self.derived.computations()
    }

    /// Reads the cart and builds the screen.
    #[instrument(skip(self))]
    pub async fn render(&mut self) -> Result<CartScreen, CartError> {
        let snapshot = self.cart.snapshot().await?;
        let derived = self.derived.get(&snapshot);

        let body = if derived.is_empty {
            CartBody::Empty
        } else {
            CartBody::Items {
                lines: snapshot.items.iter().map(CartLine::from).collect(),
                total: derived.total_price.clone(),
            }
        };
        debug!(revision = snapshot.revision, lines = snapshot.len(), "Rendered cart");

        Ok(CartScreen {
            greeting: self.user.as_ref().map(|user| format!("Your cart, {user}")),
            body,
            item_to_delete: self.deletion.pending(),
            currency: self.currency.clone(),
        })
    }

    /// Applies one user intent. Returns a navigation request when the intent leaves the
    /// page.
    #[instrument(skip(self))]
    pub async fn dispatch(&mut self, intent: CartIntent) -> Result<Option<Route>, CartError> {
        match intent {
            CartIntent::GoBack => return Ok(Some(Route::Menu)),
            CartIntent::Increment(id) => {
                self.cart.increment(id).await?;
            }
            CartIntent::Decrement(id) => {
                self.cart.decrement(id).await?;
            }
            CartIntent::RequestRemove(id) => self.deletion.request_remove(id),
            CartIntent::ConfirmRemove => {
                if let Some(removed) = self.deletion.confirm(&self.cart).await? {
                    info!(id = %removed.id, name = %removed.name, "Removed from cart");
                }
            }
            CartIntent::CancelRemove => {
                self.deletion.cancel();
            }
            CartIntent::PlaceOrder => self.place_order().await?,
            CartIntent::ClearCart => {
                self.cart.reset().await?;
            }
        }
        Ok(None)
    }

    /// Logs the cart contents. Orders are not submitted anywhere.
    async fn place_order(&self) -> Result<(), CartError> {
        let snapshot = self.cart.snapshot().await?;
        let derived = Derived::of(&snapshot);
        info!(
            items = ?snapshot.items,
            total = %derived.total_price,
            "Ordering pizzas"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::MockClient;
    use store_actor::Snapshot;

    fn margherita(qty: u32) -> LineItem {
        LineItem::new(1, "Margherita", 8.5, qty)
    }

    #[tokio::test]
    async fn test_render_items_with_greeting() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_snapshot()
            .return_ok(Snapshot::new(1, vec![margherita(2)]));

        let mut view = CartView::new(
            CartClient::new(mock.client()),
            Some(CurrentUser::new("Alice")),
        );
        let screen = view.render().await.unwrap();

        assert_eq!(screen.greeting.as_deref(), Some("Your cart, Alice"));
        assert_eq!(screen.total_price(), "17.00");
        assert_eq!(screen.lines()[0].line_total, "17.00");
        assert!(!screen.confirmation_visible());

        let text = screen.to_string();
        assert!(text.contains("Total: $17.00"));
        assert!(text.contains(ORDER_LABEL));
        assert!(text.contains(CLEAR_LABEL));
        assert!(text.starts_with(BACK_LABEL));
        mock.verify();
    }

    #[tokio::test]
    async fn test_render_empty_without_user() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_snapshot().return_ok(Snapshot::default());

        let mut view = CartView::new(CartClient::new(mock.client()), None);
        let screen = view.render().await.unwrap();

        assert!(screen.is_empty());
        assert!(screen.greeting.is_none());
        assert_eq!(screen.total_price(), "0.00");
        let text = screen.to_string();
        assert!(text.contains(EMPTY_LABEL));
        assert!(!text.contains(ORDER_LABEL));
        mock.verify();
    }

    #[tokio::test]
    async fn test_go_back_only_navigates() {
        let mock = MockClient::<LineItem>::new();
        let mut view = CartView::new(CartClient::new(mock.client()), None);

        let route = view.dispatch(CartIntent::GoBack).await.unwrap();
        assert_eq!(route, Some(Route::Menu));
        assert_eq!(route.map(|r| r.as_str()), Some("menu"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_request_and_cancel_never_touch_the_cart() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_snapshot()
            .return_ok(Snapshot::new(1, vec![margherita(1)]));

        let mut view = CartView::new(CartClient::new(mock.client()), None);
        view.dispatch(CartIntent::RequestRemove(PizzaId(1)))
            .await
            .unwrap();

        let screen = view.render().await.unwrap();
        assert_eq!(screen.item_to_delete, Some(PizzaId(1)));
        assert!(screen.to_string().contains(CONFIRM_PROMPT));

        view.dispatch(CartIntent::CancelRemove).await.unwrap();
        assert_eq!(*view.deletion(), DeletionFlow::Idle);
        mock.verify();
    }

    #[tokio::test]
    async fn test_confirm_removes_pending_line() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_remove(PizzaId(1))
            .return_ok(Some(margherita(1)));

        let mut view = CartView::new(CartClient::new(mock.client()), None);
        view.dispatch(CartIntent::RequestRemove(PizzaId(1)))
            .await
            .unwrap();
        view.dispatch(CartIntent::ConfirmRemove).await.unwrap();

        assert!(!view.deletion().is_visible());
        mock.verify();
    }

    #[tokio::test]
    async fn test_place_order_only_reads() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_snapshot()
            .return_ok(Snapshot::new(3, vec![margherita(2)]));

        let mut view = CartView::new(CartClient::new(mock.client()), None);
        let route = view.dispatch(CartIntent::PlaceOrder).await.unwrap();
        assert_eq!(route, None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_errors_surface() {
        let mut mock = MockClient::<LineItem>::new();
        mock.expect_action(PizzaId(1))
            .return_err(store_actor::FrameworkError::ActorClosed);

        let mut view = CartView::new(CartClient::new(mock.client()), None);
        let result = view.dispatch(CartIntent::Increment(PizzaId(1))).await;
        assert!(matches!(result, Err(CartError::ActorCommunicationError(_))));
        mock.verify();
    }
}
