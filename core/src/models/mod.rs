// core/src/models/mod.rs

//! Plain data records shared by the workflow, ledger and session modules.

pub mod cart_item;
pub mod order;
pub mod product;
pub mod recipe;
pub mod user;
pub mod wholesale;

pub use cart_item::CartItem;
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductDraft, ProductId, Review};
pub use recipe::{Priority, Recipe, RecipeDraft, RecipeId, RecipeStatus};
pub use user::{ProfileUpdate, SignupForm, UserId, UserProfile, UserStats};
pub use wholesale::WholesaleRequest;

/// Fresh unique identifier for newly created records.
pub(crate) fn fresh_id() -> String {
  uuid::Uuid::new_v4().to_string()
}
