// core/src/state.rs

//! The application state owned by the top-level shell.

use crate::access::Role;
use crate::adapters::ImageArtifact;
use crate::ledger::{Cart, CheckoutPolicy, PricingRules, RoyaltyLedger, Wishlist};
use crate::models::{Order, UserProfile, WholesaleRequest};
use crate::seed;
use crate::studio::DesignStudio;
use crate::workflow::{ApprovalQueue, ProductCatalog, RecipeBook};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::sync::Arc;

/// Knobs the shell loads from its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSettings {
  pub checkout_policy: CheckoutPolicy,
  pub pricing: PricingRules,
}

/// Everything a session can see or change. Mutate it only through the
/// workflow, ledger and studio APIs.
#[derive(Debug, Default)]
pub struct AppState {
  pub settings: SessionSettings,
  /// The user currently logged in, if any.
  pub profile: Option<UserProfile>,
  /// The profile created through signup, picked up by the next matching portal login.
  pub registered: Option<UserProfile>,
  /// Profiles of portal logins without a signup, one per role, kept for the whole run.
  pub portal_profiles: HashMap<Role, UserProfile>,
  pub catalog: ProductCatalog,
  pub recipes: RecipeBook,
  pub wholesale_requests: Vec<WholesaleRequest>,
  pub cart: Cart,
  pub wishlist: Wishlist,
  pub orders: Vec<Order>,
  pub royalties: RoyaltyLedger,
  pub studio: DesignStudio,
  pub logo: Option<ImageArtifact>,
}

impl AppState {
  pub fn new(settings: SessionSettings) -> Self {
    AppState {
      settings,
      ..Default::default()
    }
  }

  /// A state preloaded with the house collection and production board.
  pub fn seeded(settings: SessionSettings) -> Self {
    AppState {
      settings,
      catalog: ProductCatalog::new(seed::products()),
      recipes: RecipeBook::new(seed::recipes()),
      wholesale_requests: seed::wholesale_requests(),
      ..Default::default()
    }
  }

  pub fn role(&self) -> Option<Role> {
    self.profile.as_ref().map(|p| p.role)
  }

  pub fn approval_queue(&self) -> ApprovalQueue {
    ApprovalQueue {
      products: self.catalog.pending().into_iter().cloned().collect(),
      recipes: self.recipes.pending().into_iter().cloned().collect(),
      wholesale_requests: self.wholesale_requests.clone(),
    }
  }
}

/// Shared handle to the [`AppState`].
///
/// Lock guards are blocking and MUST NOT be held across `.await` points.
#[derive(Debug, Clone)]
pub struct SharedState(Arc<RwLock<AppState>>);

impl SharedState {
  pub fn new(state: AppState) -> Self {
    SharedState(Arc::new(RwLock::new(state)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, AppState> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, AppState> {
    self.0.write()
  }
}
