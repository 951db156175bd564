// core/src/models/cart_item.rs

use super::product::Product;
use serde::{Deserialize, Serialize};

/// A product line in the active session's cart. `quantity` is never below 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
}

impl CartItem {
  pub fn new(product: Product) -> Self {
    CartItem { product, quantity: 1 }
  }

  pub fn line_total_cents(&self) -> u64 {
    self.product.price_cents.saturating_mul(u64::from(self.quantity))
  }
}
