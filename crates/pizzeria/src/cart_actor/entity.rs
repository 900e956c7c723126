//! [`StoreEntity`] implementation for [`LineItem`].
//!
//! Adding a pizza that is already in the cart merges quantities rather than creating a
//! second line, so the cart never holds two lines with the same [`PizzaId`](crate::model::PizzaId).

use super::actions::CartAction;
use super::error::CartError;
use crate::model::{LineItem, PizzaId};
use async_trait::async_trait;
use store_actor::StoreEntity;

impl LineItem {
    /// Rejects lines that would corrupt the derived totals.
    fn validate(&self) -> Result<(), CartError> {
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(CartError::InvalidItem(format!(
                "{}: unit price {} is not a non-negative amount",
                self.id, self.unit_price
            )));
        }
        if self.qty == 0 {
            return Err(CartError::InvalidItem(format!(
                "{}: quantity must be at least 1",
                self.id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreEntity for LineItem {
    type Id = PizzaId;
    type Action = CartAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CartError;

    fn id(&self) -> &PizzaId {
        &self.id
    }

    async fn on_insert(&mut self, _ctx: &()) -> Result<(), CartError> {
        self.validate()
    }

    /// Adds the incoming quantity to the stored line. Display fields and price stay as
    /// first added.
    async fn on_merge(&mut self, incoming: Self, _ctx: &()) -> Result<(), CartError> {
        incoming.validate()?;
        self.qty = self.qty.saturating_add(incoming.qty);
        Ok(())
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<u32, CartError> {
        match action {
            CartAction::Increment => {
                self.qty = self.qty.saturating_add(1);
            }
            CartAction::Decrement => {
                if self.qty > 1 {
                    self.qty -= 1;
                }
            }
        }
        Ok(self.qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_merge_adds_quantities() {
        let mut stored = LineItem::new(1, "Margherita", 12.0, 2);
        stored
            .on_merge(LineItem::new(1, "Margherita", 12.0, 3), &())
            .await
            .unwrap();
        assert_eq!(stored.qty, 5);
    }

    #[tokio::test]
    async fn test_invalid_lines_are_rejected() {
        let mut zero = LineItem::new(1, "Margherita", 12.0, 0);
        assert!(matches!(
            zero.on_insert(&()).await,
            Err(CartError::InvalidItem(_))
        ));

        let mut negative = LineItem::new(2, "Romana", -1.0, 1);
        assert!(negative.on_insert(&()).await.is_err());

        let mut nan = LineItem::new(3, "Diavola", f64::NAN, 1);
        assert!(nan.on_insert(&()).await.is_err());

        let mut stored = LineItem::new(1, "Margherita", 12.0, 2);
        let result = stored
            .on_merge(LineItem::new(1, "Margherita", f64::INFINITY, 1), &())
            .await;
        assert!(result.is_err());
        assert_eq!(stored.qty, 2);
    }

    #[tokio::test]
    async fn test_free_pizza_is_allowed() {
        let mut free = LineItem::new(9, "Staff meal", 0.0, 1);
        assert!(free.on_insert(&()).await.is_ok());
    }

    #[tokio::test]
    async fn test_decrement_stops_at_one() {
        let mut line = LineItem::new(1, "Margherita", 12.0, 2);
        assert_eq!(line.handle_action(CartAction::Decrement, &()).await.unwrap(), 1);
        assert_eq!(line.handle_action(CartAction::Decrement, &()).await.unwrap(), 1);
        assert_eq!(line.handle_action(CartAction::Increment, &()).await.unwrap(), 2);
    }
}
