// core/src/workflow/catalog.rs

use super::ApprovalOutcome;
use crate::access::{self, Action, Role};
use crate::error::{ZiiError, ZiiResult};
use crate::models::{fresh_id, Product, ProductDraft};
use tracing::{debug, info, instrument};

/// Every product listed on the platform, approved or not.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
  products: Vec<Product>,
}

impl ProductCatalog {
  pub fn new(products: Vec<Product>) -> Self {
    ProductCatalog { products }
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Lists a new product in the unapproved state.
  #[instrument(name = "catalog::submit", skip(self, draft), err(Display))]
  pub fn submit(&mut self, role: Role, creator_id: &str, draft: ProductDraft) -> ZiiResult<Product> {
    access::require(role, Action::CreateProductListing)?;

    let product = Product {
      id: fresh_id(),
      name: draft.name,
      price_cents: draft.price_cents.unwrap_or(0),
      category: draft.category,
      description: draft.description,
      image: draft.image,
      reviews: Vec::new(),
      is_approved: false,
      creator_id: creator_id.to_string(),
    };
    info!(product_id = %product.id, "Product listed, awaiting approval.");
    self.products.push(product.clone());
    Ok(product)
  }

  #[instrument(name = "catalog::approve", skip(self), err(Display))]
  pub fn approve(&mut self, role: Role, id: &str) -> ZiiResult<ApprovalOutcome> {
    access::require(role, Action::ApproveProduct)?;

    let product = self
      .products
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or_else(|| ZiiError::not_found("Product", id))?;

    if product.is_approved {
      debug!("Product already approved, nothing to do.");
      return Ok(ApprovalOutcome::Unchanged);
    }
    product.is_approved = true;
    info!(product = %product.name, "Product approved.");
    Ok(ApprovalOutcome::Approved)
  }

  /// Products `viewer` may browse in the marketplace. Only Admin sees unapproved listings here.
  pub fn marketplace(&self, viewer: Role) -> Vec<&Product> {
    self
      .products
      .iter()
      .filter(|p| p.is_approved || viewer == Role::Admin)
      .collect()
  }

  /// A creator's own listings, including those still awaiting approval.
  pub fn listings_by(&self, creator_id: &str) -> Vec<&Product> {
    self.products.iter().filter(|p| p.creator_id == creator_id).collect()
  }

  /// Case-insensitive name/category search within the marketplace view.
  pub fn search(&self, viewer: Role, query: &str) -> Vec<&Product> {
    let needle = query.trim().to_lowercase();
    self
      .marketplace(viewer)
      .into_iter()
      .filter(|p| {
        needle.is_empty() || p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
      })
      .collect()
  }

  pub fn pending(&self) -> Vec<&Product> {
    self.products.iter().filter(|p| !p.is_approved).collect()
  }
}
