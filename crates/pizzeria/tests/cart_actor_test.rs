use pizzeria::cart_actor::{self, CartError};
use pizzeria::clients::CartClient;
use pizzeria::confirmation::DeletionFlow;
use pizzeria::model::{LineItem, PizzaId};
use pizzeria::pricing::{is_empty, total_price};
use store_actor::ActorClient;

/// Real cart store, driven through `CartClient` only.
fn spawn_cart() -> (CartClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = cart_actor::new(cart_actor::DEFAULT_CAPACITY);
    let handle = tokio::spawn(actor.run(()));
    (client, handle)
}

fn line(id: u32, unit_price: f64, qty: u32) -> LineItem {
    LineItem::new(id, format!("Pizza {id}"), unit_price, qty)
}

async fn quantities(cart: &CartClient) -> Vec<(u32, u32)> {
    cart.snapshot()
        .await
        .unwrap()
        .items
        .iter()
        .map(|item| (item.id.0, item.qty))
        .collect()
}

#[tokio::test]
async fn test_total_for_single_line() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.50, 2)).await.unwrap();

    let snapshot = cart.snapshot().await.unwrap();
    assert_eq!(total_price(&snapshot.items), "17.00");
    assert!(!is_empty(&snapshot.items));
}

#[tokio::test]
async fn test_empty_cart_derives_zero() {
    let (cart, _handle) = spawn_cart();
    let snapshot = cart.snapshot().await.unwrap();
    assert!(is_empty(&snapshot.items));
    assert_eq!(total_price(&snapshot.items), "0.00");
}

#[tokio::test]
async fn test_add_merges_and_keeps_order() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(3, 10.0, 1)).await.unwrap();
    cart.add(line(1, 8.0, 1)).await.unwrap();
    let merged = cart.add(line(3, 10.0, 2)).await.unwrap();

    assert_eq!(merged.qty, 3);
    assert_eq!(quantities(&cart).await, vec![(3, 3), (1, 1)]);
}

#[tokio::test]
async fn test_display_data_passes_through() {
    let (cart, _handle) = spawn_cart();
    let margherita = LineItem::new(1, "Margherita", 12.0, 1)
        .with_ingredients(["tomato", "mozzarella", "basil"]);
    cart.add(margherita.clone()).await.unwrap();
    cart.add(LineItem::new(1, "Margherita", 12.0, 2)).await.unwrap();

    let stored = cart.get(PizzaId(1)).await.unwrap().unwrap();
    assert_eq!(stored.qty, 3);
    assert_eq!(stored.name, "Margherita");
    assert_eq!(stored.ingredients, margherita.ingredients);
}

#[tokio::test]
async fn test_invalid_add_leaves_cart_unchanged() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 1)).await.unwrap();
    let revision = cart.snapshot().await.unwrap().revision;

    let zero = cart.add(line(2, 8.0, 0)).await;
    assert!(matches!(zero, Err(CartError::InvalidItem(_))));
    let negative = cart.add(line(1, -3.0, 1)).await;
    assert!(matches!(negative, Err(CartError::InvalidItem(_))));

    let snapshot = cart.snapshot().await.unwrap();
    assert_eq!(snapshot.revision, revision);
    assert_eq!(quantities(&cart).await, vec![(1, 1)]);
}

#[tokio::test]
async fn test_decrement_at_one_stays_one() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 1)).await.unwrap();

    assert_eq!(cart.decrement(PizzaId(1)).await.unwrap(), Some(1));
    assert_eq!(quantities(&cart).await, vec![(1, 1)]);
}

#[tokio::test]
async fn test_increment_then_decrement_restores_qty() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 3)).await.unwrap();

    cart.increment(PizzaId(1)).await.unwrap();
    assert_eq!(cart.decrement(PizzaId(1)).await.unwrap(), Some(3));
    assert_eq!(quantities(&cart).await, vec![(1, 3)]);
}

#[tokio::test]
async fn test_missing_ids_are_silent_no_ops() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 2)).await.unwrap();
    let before = cart.snapshot().await.unwrap();

    assert_eq!(cart.increment(PizzaId(99)).await.unwrap(), None);
    assert_eq!(cart.decrement(PizzaId(99)).await.unwrap(), None);

    let mut flow = DeletionFlow::default();
    flow.request_remove(PizzaId(99));
    assert_eq!(flow.confirm(&cart).await.unwrap(), None);

    assert_eq!(cart.snapshot().await.unwrap(), before);
}

#[tokio::test]
async fn test_cancel_leaves_cart_and_closes_prompt() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 1)).await.unwrap();

    let mut flow = DeletionFlow::default();
    flow.request_remove(PizzaId(1));
    assert!(flow.cancel());

    assert_eq!(flow, DeletionFlow::Idle);
    assert_eq!(quantities(&cart).await, vec![(1, 1)]);
}

#[tokio::test]
async fn test_confirm_removes_sole_line_and_is_idempotent() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 1)).await.unwrap();

    let mut flow = DeletionFlow::default();
    flow.request_remove(PizzaId(1));
    let removed = flow.confirm(&cart).await.unwrap();
    assert_eq!(removed.map(|item| item.id), Some(PizzaId(1)));
    assert!(!flow.is_visible());
    assert!(cart.snapshot().await.unwrap().is_empty());

    flow.request_remove(PizzaId(1));
    assert_eq!(flow.confirm(&cart).await.unwrap(), None);
    assert!(cart.get(PizzaId(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reset_always_empties() {
    let (cart, _handle) = spawn_cart();
    assert_eq!(cart.reset().await.unwrap(), 0);

    cart.add(line(1, 8.0, 1)).await.unwrap();
    cart.add(line(2, 9.0, 4)).await.unwrap();
    assert_eq!(cart.reset().await.unwrap(), 2);
    assert!(cart.snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let (cart, _handle) = spawn_cart();
    cart.add(line(1, 8.0, 1)).await.unwrap();

    let mut handles = vec![];
    for _ in 0..25 {
        let cart = cart.clone();
        handles.push(tokio::spawn(async move { cart.increment(PizzaId(1)).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(quantities(&cart).await, vec![(1, 26)]);
}

#[tokio::test]
async fn test_store_stops_after_last_client() {
    let (cart, handle) = spawn_cart();
    let view_client = cart.clone();
    cart.add(line(1, 8.0, 1)).await.unwrap();

    drop(cart);
    assert_eq!(quantities(&view_client).await, vec![(1, 1)]);
    drop(view_client);

    handle.await.unwrap();
}
