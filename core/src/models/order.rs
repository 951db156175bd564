// core/src/models/order.rs

use super::cart_item::CartItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

/// A checkout snapshot. Items and total are frozen at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: String,
  pub date: DateTime<Utc>,
  pub items: Vec<CartItem>,
  pub total_cents: u64,
  pub status: OrderStatus,
  pub payment_method: String,
  pub shipping_address: String,
}
