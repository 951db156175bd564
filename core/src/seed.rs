// core/src/seed.rs

//! Starter data a fresh session opens with.

use crate::models::{Priority, Product, Recipe, RecipeStatus, WholesaleRequest};
use chrono::Utc;

/// Creator id for house collections that no session user owns.
pub const HOUSE_CREATOR_ID: &str = "zii-house";

fn house_product(id: &str, name: &str, price_dollars: u64, category: &str, seed: &str) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    price_cents: price_dollars * 100,
    category: category.to_string(),
    description: String::new(),
    image: format!("https://picsum.photos/seed/{}/400/500", seed),
    reviews: Vec::new(),
    is_approved: true,
    creator_id: HOUSE_CREATOR_ID.to_string(),
  }
}

pub fn products() -> Vec<Product> {
  vec![
    house_product("1", "Royal Kente Blouse", 120, "African Native", "kente"),
    house_product("2", "Midnight Silk Wrap", 250, "European", "silk"),
    house_product("3", "Savannah Linen Suit", 340, "Western", "linen"),
    house_product("4", "Zii Heritage Gown", 580, "Modern", "gown"),
  ]
}

fn recipe(id: &str, name: &str, status: RecipeStatus, priority: Priority, worker: Option<&str>, materials: &[&str]) -> Recipe {
  Recipe {
    id: id.to_string(),
    name: name.to_string(),
    materials: materials.iter().map(|m| m.to_string()).collect(),
    steps: Vec::new(),
    estimated_time: String::new(),
    priority,
    status,
    worker: worker.map(str::to_string),
    creator_id: HOUSE_CREATOR_ID.to_string(),
  }
}

pub fn recipes() -> Vec<Recipe> {
  vec![
    recipe(
      "R1",
      "Zii Heritage Gown",
      RecipeStatus::InProduction,
      Priority::High,
      Some("Jane Doe"),
      &["Silk", "Gold Thread", "Zippers"],
    ),
    recipe(
      "R2",
      "Midnight Wrap",
      RecipeStatus::QualityCheck,
      Priority::Medium,
      Some("John Smith"),
      &["Cotton", "Elastic", "Buttons"],
    ),
    Recipe {
      creator_id: "amaka-k".to_string(),
      ..recipe("R3", "Yoruba Gown", RecipeStatus::PendingApproval, Priority::Medium, None, &[])
    },
  ]
}

pub fn wholesale_requests() -> Vec<WholesaleRequest> {
  vec![WholesaleRequest {
    id: "W1".to_string(),
    distributor_id: "nairobi-crafts".to_string(),
    shop_name: "Nairobi Crafts".to_string(),
    requested_at: Utc::now(),
  }]
}
