// core/src/ledger/wishlist.rs

use crate::models::ProductId;
use serde::{Deserialize, Serialize};

/// Saved product ids with set semantics, kept in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
  ids: Vec<ProductId>,
}

impl Wishlist {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `product_id` if absent, removes it if present. Returns whether it is now saved.
  pub fn toggle(&mut self, product_id: &str) -> bool {
    if let Some(pos) = self.ids.iter().position(|id| id == product_id) {
      self.ids.remove(pos);
      false
    } else {
      self.ids.push(product_id.to_string());
      true
    }
  }

  pub fn contains(&self, product_id: &str) -> bool {
    self.ids.iter().any(|id| id == product_id)
  }

  pub fn ids(&self) -> &[ProductId] {
    &self.ids
  }

  /// Keeps only the ids `keep` accepts. Returns how many were dropped.
  pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
    let before = self.ids.len();
    self.ids.retain(|id| keep(id));
    before - self.ids.len()
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}
