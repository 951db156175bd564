// core/src/models/product.rs

use super::user::UserId;
use serde::{Deserialize, Serialize};

pub type ProductId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
  pub author: String,
  pub rating: u8, // 1..=5
  pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price_cents: u64,
  pub category: String,
  pub description: String,
  pub image: String,
  pub reviews: Vec<Review>,
  /// Flips to true exactly once, by an Admin.
  pub is_approved: bool,
  pub creator_id: UserId,
}

impl Product {
  pub fn average_rating(&self) -> Option<f32> {
    if self.reviews.is_empty() {
      return None;
    }
    let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(sum as f32 / self.reviews.len() as f32)
  }
}

/// Listing form as submitted by a Maker or Worker. Fields are taken verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
  pub name: String,
  /// Unset prices list at 0.
  pub price_cents: Option<u64>,
  pub category: String,
  pub description: String,
  pub image: String,
}
