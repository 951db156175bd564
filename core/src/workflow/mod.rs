// core/src/workflow/mod.rs

//! Approval workflows for marketplace products and production recipes.
//!
//! Products move `Unapproved -> Approved` once. Recipes enter at
//! `Pending Approval` and an Admin moves them to `Approved`; the later
//! production stages exist on [`RecipeStatus`](crate::models::RecipeStatus)
//! but nothing triggers them yet.

pub mod catalog;
pub mod recipes;

pub use catalog::ProductCatalog;
pub use recipes::{parse_materials, parse_steps, RecipeBook};

use crate::models::{Product, Recipe, WholesaleRequest};
use serde::Serialize;

/// Result of an approval request that passed the permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
  Approved,
  /// Already approved or further along; nothing changed.
  Unchanged,
}

/// Everything waiting on an Admin, as shown in the admin console.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApprovalQueue {
  pub products: Vec<Product>,
  pub recipes: Vec<Recipe>,
  pub wholesale_requests: Vec<WholesaleRequest>,
}

impl ApprovalQueue {
  pub fn len(&self) -> usize {
    self.products.len() + self.recipes.len() + self.wholesale_requests.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
