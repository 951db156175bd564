// core/src/ledger/checkout.rs

use super::cart::Cart;
use crate::error::{ZiiError, ZiiResult};
use crate::models::{fresh_id, Order, OrderStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// What checkout does with an empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckoutPolicy {
  /// Refuse with a validation error.
  #[default]
  RejectEmpty,
  /// Produce a zero-total order, as the first release of the storefront did.
  AllowEmpty,
}

/// Turns the cart into an order and clears it.
///
/// Payment is a stub that always succeeds, so the only failure is an empty
/// cart under [`CheckoutPolicy::RejectEmpty`]. The cart is untouched on failure.
#[instrument(name = "ledger::place_order", skip(cart, shipping_address), fields(lines = cart.len()), err(Display))]
pub fn place_order(
  cart: &mut Cart,
  payment_method: &str,
  shipping_address: &str,
  policy: CheckoutPolicy,
) -> ZiiResult<Order> {
  if cart.is_empty() {
    match policy {
      CheckoutPolicy::RejectEmpty => {
        warn!("Checkout refused: cart is empty.");
        return Err(ZiiError::Validation("Cannot check out an empty cart.".to_string()));
      }
      CheckoutPolicy::AllowEmpty => warn!("Checking out an empty cart; order total will be zero."),
    }
  }

  let total_cents = cart.total_cents();
  let order = Order {
    id: fresh_id(),
    date: Utc::now(),
    items: cart.take(),
    total_cents,
    status: OrderStatus::Processing,
    payment_method: payment_method.to_string(),
    shipping_address: shipping_address.to_string(),
  };
  info!(order_id = %order.id, total_cents, "Order placed.");
  Ok(order)
}
