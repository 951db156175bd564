// core/src/ledger/cart.rs

use crate::models::{CartItem, Product};
use serde::{Deserialize, Serialize};

/// Cart lines in insertion order. A product appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a cart from existing lines. Lines with a zero quantity are dropped.
  pub fn from_lines(items: Vec<CartItem>) -> Self {
    Cart {
      items: items.into_iter().filter(|line| line.quantity >= 1).collect(),
    }
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Number of distinct lines.
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Sum of quantities, as shown on the navbar badge.
  pub fn item_count(&self) -> u32 {
    self.items.iter().fold(0u32, |count, line| count.saturating_add(line.quantity))
  }

  /// Adds one unit of `product`. An existing line for the same id is incremented in place.
  pub fn add(&mut self, product: &Product) {
    match self.items.iter_mut().find(|line| line.product.id == product.id) {
      Some(line) => line.quantity = line.quantity.saturating_add(1),
      None => self.items.push(CartItem::new(product.clone())),
    }
  }

  /// Non-mutating form of [`Cart::add`].
  pub fn with_added(&self, product: &Product) -> Cart {
    let mut next = self.clone();
    next.add(product);
    next
  }

  /// Drops the whole line for `product_id`. Returns whether a line was removed.
  pub fn remove(&mut self, product_id: &str) -> bool {
    let before = self.items.len();
    self.items.retain(|line| line.product.id != product_id);
    self.items.len() != before
  }

  pub fn total_cents(&self) -> u64 {
    self
      .items
      .iter()
      .fold(0u64, |total, line| total.saturating_add(line.line_total_cents()))
  }

  /// Keeps only the lines `keep` accepts. Returns how many lines were dropped.
  pub fn retain(&mut self, mut keep: impl FnMut(&CartItem) -> bool) -> usize {
    let before = self.items.len();
    self.items.retain(|line| keep(line));
    before - self.items.len()
  }

  /// Empties the cart, handing back its lines.
  pub fn take(&mut self) -> Vec<CartItem> {
    std::mem::take(&mut self.items)
  }
}
