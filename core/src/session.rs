// core/src/session.rs

//! Session facade the UI layer calls into.
//!
//! Each operation resolves the active role, consults [`crate::access`] and then
//! delegates to the workflow, ledger or studio module. Adapter calls are
//! awaited with no state lock held.

use crate::access::{self, Action, Role, Route, RouteDecision};
use crate::adapters::{self, DesignGenerator, Headline, ImageArtifact, MarketIntelligence};
use crate::error::{ZiiError, ZiiResult};
use crate::ledger::{self, Cart};
use crate::models::{
  fresh_id, Order, Product, ProductDraft, ProfileUpdate, Recipe, RecipeDraft, SignupForm, UserId, UserProfile,
  UserStats, WholesaleRequest,
};
use crate::state::{AppState, SharedState};
use crate::studio::{Creation, PendingGeneration};
use crate::workflow::{ApprovalOutcome, ApprovalQueue, ProductCatalog};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Holds the studio's in-flight claim while the adapter is awaited. Dropping it
/// unsettled, e.g. when the caller abandons the future, releases the studio.
struct StudioClaim {
  state: SharedState,
  settled: bool,
}

impl StudioClaim {
  fn settle(
    mut self,
    pending: PendingGeneration,
    outcome: ZiiResult<Option<ImageArtifact>>,
  ) -> ZiiResult<Option<Creation>> {
    self.settled = true;
    self.state.write().studio.settle(pending, outcome)
  }
}

impl Drop for StudioClaim {
  fn drop(&mut self) {
    if !self.settled {
      warn!("Design generation dropped before it settled.");
      self.state.write().studio.abandon();
    }
  }
}

fn is_visible(catalog: &ProductCatalog, role: Role, product_id: &str) -> bool {
  catalog
    .get(product_id)
    .is_some_and(|p| p.is_approved || role == Role::Admin)
}

#[derive(Clone)]
pub struct Session {
  state: SharedState,
  designer: Arc<dyn DesignGenerator>,
  intelligence: Arc<dyn MarketIntelligence>,
}

impl Session {
  pub fn new(state: AppState, designer: Arc<dyn DesignGenerator>, intelligence: Arc<dyn MarketIntelligence>) -> Self {
    Session {
      state: SharedState::new(state),
      designer,
      intelligence,
    }
  }

  /// The underlying state handle, for read-only rendering.
  pub fn state(&self) -> &SharedState {
    &self.state
  }

  fn actor(&self) -> ZiiResult<(Role, UserId)> {
    let state = self.state.read();
    state
      .profile
      .as_ref()
      .map(|p| (p.role, p.id.clone()))
      .ok_or(ZiiError::Unauthenticated)
  }

  fn require_route(role: Role, route: Route) -> ZiiResult<()> {
    if access::can_access(role, route) {
      Ok(())
    } else {
      Err(ZiiError::PermissionDenied {
        role: role.to_string(),
        action: format!("open {}", route),
      })
    }
  }

  // --- Identity ---

  #[instrument(name = "session::sign_up", skip(self, form), fields(username = %form.username, role = %form.role), err(Display))]
  pub fn sign_up(&self, form: SignupForm) -> ZiiResult<UserProfile> {
    for (field, value) in [
      ("Full name", &form.full_name),
      ("Username", &form.username),
      ("Email", &form.email),
    ] {
      if value.trim().is_empty() {
        return Err(ZiiError::Validation(format!("{} is required.", field)));
      }
    }

    let profile = UserProfile {
      id: fresh_id(),
      username: form.username,
      full_name: form.full_name,
      email: form.email,
      country: form.country,
      state: form.state,
      address: form.address,
      department: form.department,
      title: form.title,
      date_of_birth: form.date_of_birth,
      gender: form.gender,
      role: form.role,
      join_date: Utc::now().date_naive(),
      stats: UserStats::default(),
    };
    self.state.write().registered = Some(profile.clone());
    info!("Account created; continue through the portal login.");
    Ok(profile)
  }

  /// Enters through the portal for `role`. The role is fixed until [`Session::log_out`].
  #[instrument(name = "session::log_in", skip(self), err(Display))]
  pub fn log_in(&self, role: Role) -> ZiiResult<UserProfile> {
    let mut state = self.state.write();
    if let Some(current) = &state.profile {
      if current.role == role {
        return Ok(current.clone());
      }
      return Err(ZiiError::Validation(format!(
        "Already logged in as {}; log out before switching portals.",
        current.role
      )));
    }

    let registered = state.registered.as_ref().filter(|r| r.role == role).cloned();
    let mut profile = match registered {
      Some(registered) => registered,
      None => state
        .portal_profiles
        .entry(role)
        .or_insert_with(|| UserProfile::for_portal(role))
        .clone(),
    };
    Self::drop_unseen(&mut state, role);
    profile.stats.total_earned_cents = state.royalties.earned_by(&profile.id);
    profile.stats.wishlist_count = state.wishlist.len() as u32;
    state.profile = Some(profile.clone());
    info!(user_id = %profile.id, "Logged in.");
    Ok(profile)
  }

  /// Ends the session. The cart, wishlist and orders of this run are kept.
  pub fn log_out(&self) {
    let mut state = self.state.write();
    if let Some(profile) = state.profile.take() {
      if state.registered.as_ref().is_some_and(|r| r.id == profile.id) {
        state.registered = Some(profile);
      } else {
        state.portal_profiles.insert(profile.role, profile);
      }
      info!("Logged out.");
    }
  }

  pub fn current_profile(&self) -> Option<UserProfile> {
    self.state.read().profile.clone()
  }

  pub fn navigate(&self, route: Route) -> RouteDecision {
    let decision = access::resolve(self.state.read().role(), route);
    if let RouteDecision::Redirect(to) = decision {
      info!(from = %route, %to, "Navigation redirected.");
    }
    decision
  }

  pub fn navigation(&self) -> Vec<Route> {
    self.state.read().role().map(access::navigation).unwrap_or_default()
  }

  #[instrument(name = "session::update_profile", skip(self, update), err(Display))]
  pub fn update_profile(&self, update: ProfileUpdate) -> ZiiResult<UserProfile> {
    let mut state = self.state.write();
    let profile = state.profile.as_mut().ok_or(ZiiError::Unauthenticated)?;
    profile.apply(update);
    info!("Profile updated.");
    Ok(profile.clone())
  }

  // --- Marketplace ---

  pub fn marketplace(&self) -> ZiiResult<Vec<Product>> {
    let (role, _) = self.actor()?;
    Ok(self.state.read().catalog.marketplace(role).into_iter().cloned().collect())
  }

  pub fn search(&self, query: &str) -> ZiiResult<Vec<Product>> {
    let (role, _) = self.actor()?;
    Ok(self.state.read().catalog.search(role, query).into_iter().cloned().collect())
  }

  pub fn my_listings(&self) -> ZiiResult<Vec<Product>> {
    let (_, user_id) = self.actor()?;
    Ok(self.state.read().catalog.listings_by(&user_id).into_iter().cloned().collect())
  }

  /// Looks a product up the way the active viewer sees the marketplace.
  fn visible_product(state: &AppState, role: Role, product_id: &str) -> ZiiResult<Product> {
    if !is_visible(&state.catalog, role, product_id) {
      return Err(ZiiError::not_found("Product", product_id));
    }
    state
      .catalog
      .get(product_id)
      .cloned()
      .ok_or_else(|| ZiiError::not_found("Product", product_id))
  }

  /// Drops cart lines and saved products `role` may not see. The cart and
  /// wishlist outlive a login, so an Admin can leave unapproved products behind.
  fn drop_unseen(state: &mut AppState, role: Role) {
    let AppState {
      catalog,
      cart,
      wishlist,
      profile,
      ..
    } = state;
    let dropped = cart.retain(|line| is_visible(catalog, role, &line.product.id))
      + wishlist.retain(|id| is_visible(catalog, role, id));
    if dropped > 0 {
      info!(dropped, %role, "Removed products hidden from this viewer.");
      if let Some(profile) = profile.as_mut() {
        profile.stats.wishlist_count = wishlist.len() as u32;
      }
    }
  }

  #[instrument(name = "session::add_to_cart", skip(self), err(Display))]
  pub fn add_to_cart(&self, product_id: &str) -> ZiiResult<Cart> {
    let (role, _) = self.actor()?;
    let mut state = self.state.write();
    let product = Self::visible_product(&state, role, product_id)?;
    state.cart.add(&product);
    Ok(state.cart.clone())
  }

  pub fn remove_from_cart(&self, product_id: &str) -> ZiiResult<bool> {
    self.actor()?;
    Ok(self.state.write().cart.remove(product_id))
  }

  pub fn cart(&self) -> ZiiResult<Cart> {
    let (role, _) = self.actor()?;
    let mut state = self.state.write();
    Self::drop_unseen(&mut state, role);
    Ok(state.cart.clone())
  }

  /// Returns whether the product is saved after the toggle.
  #[instrument(name = "session::toggle_wishlist", skip(self), err(Display))]
  pub fn toggle_wishlist(&self, product_id: &str) -> ZiiResult<bool> {
    let (role, _) = self.actor()?;
    let mut state = self.state.write();
    Self::visible_product(&state, role, product_id)?;
    let saved = state.wishlist.toggle(product_id);
    let count = state.wishlist.len() as u32;
    if let Some(profile) = state.profile.as_mut() {
      profile.stats.wishlist_count = count;
    }
    Ok(saved)
  }

  pub fn wishlist_products(&self) -> ZiiResult<Vec<Product>> {
    let (role, _) = self.actor()?;
    let mut state = self.state.write();
    Self::drop_unseen(&mut state, role);
    Ok(
      state
        .wishlist
        .ids()
        .iter()
        .filter_map(|id| state.catalog.get(id).cloned())
        .collect(),
    )
  }

  #[instrument(name = "session::checkout", skip(self, shipping_address), err(Display))]
  pub fn checkout(&self, payment_method: &str, shipping_address: &str) -> ZiiResult<Order> {
    let (role, user_id) = self.actor()?;
    access::require(role, Action::Checkout)?;

    let mut state = self.state.write();
    let state = &mut *state;
    Self::drop_unseen(state, role);
    let order = ledger::place_order(
      &mut state.cart,
      payment_method,
      shipping_address,
      state.settings.checkout_policy,
    )?;

    state.royalties.credit_order(&order, &state.settings.pricing);
    state.orders.push(order.clone());
    let earned = state.royalties.earned_by(&user_id);
    if let Some(profile) = state.profile.as_mut() {
      profile.stats.orders_count += 1;
      profile.stats.total_spent_cents += order.total_cents;
      profile.stats.total_earned_cents = earned;
    }
    Ok(order)
  }

  pub fn orders(&self) -> Vec<Order> {
    self.state.read().orders.clone()
  }

  // --- Approval workflow ---

  pub fn submit_product(&self, draft: ProductDraft) -> ZiiResult<Product> {
    let (role, user_id) = self.actor()?;
    self.state.write().catalog.submit(role, &user_id, draft)
  }

  pub fn approve_product(&self, product_id: &str) -> ZiiResult<ApprovalOutcome> {
    let (role, _) = self.actor()?;
    self.state.write().catalog.approve(role, product_id)
  }

  pub fn submit_recipe(&self, draft: RecipeDraft) -> ZiiResult<Recipe> {
    let (role, user_id) = self.actor()?;
    self.state.write().recipes.submit(role, &user_id, draft)
  }

  pub fn approve_recipe(&self, recipe_id: &str) -> ZiiResult<ApprovalOutcome> {
    let (role, _) = self.actor()?;
    self.state.write().recipes.approve(role, recipe_id)
  }

  pub fn visible_recipes(&self) -> ZiiResult<Vec<Recipe>> {
    let (role, _) = self.actor()?;
    Self::require_route(role, Route::Recipes)?;
    Ok(self.state.read().recipes.visible_to(role).into_iter().cloned().collect())
  }

  #[instrument(name = "session::request_wholesale_catalog", skip(self), err(Display))]
  pub fn request_wholesale_catalog(&self, shop_name: &str) -> ZiiResult<WholesaleRequest> {
    let (role, user_id) = self.actor()?;
    access::require(role, Action::RequestWholesaleCatalog)?;

    let request = WholesaleRequest {
      id: fresh_id(),
      distributor_id: user_id,
      shop_name: shop_name.to_string(),
      requested_at: Utc::now(),
    };
    self.state.write().wholesale_requests.push(request.clone());
    info!(request_id = %request.id, "Wholesale catalog requested.");
    Ok(request)
  }

  pub fn approval_queue(&self) -> ZiiResult<ApprovalQueue> {
    let (role, _) = self.actor()?;
    Self::require_route(role, Route::Admin)?;
    Ok(self.state.read().approval_queue())
  }

  // --- Studio and external services ---

  /// Runs one design generation. A second call while one is outstanding fails
  /// with [`ZiiError::GenerationInFlight`]. Dropping the future releases the studio.
  #[instrument(name = "session::generate_design", skip(self, prompt), err(Display))]
  pub async fn generate_design(&self, prompt: &str, category: &str) -> ZiiResult<Option<Creation>> {
    let (role, _) = self.actor()?;
    access::require(role, Action::GenerateDesign)?;

    let pending = self.state.write().studio.begin(prompt, category)?;
    let claim = StudioClaim {
      state: self.state.clone(),
      settled: false,
    };
    let outcome = self.designer.generate_design(&pending.prompt, &pending.category).await;
    if let Err(e) = &outcome {
      error!(error = %e, "Design generation failed.");
    }
    claim.settle(pending, outcome)
  }

  pub fn creations(&self) -> Vec<Creation> {
    self.state.read().studio.creations().to_vec()
  }

  /// Fetches the brand logo once. Failures leave the logo absent.
  pub async fn load_logo(&self) -> Option<ImageArtifact> {
    match self.designer.generate_logo().await {
      Ok(logo) => {
        self.state.write().logo = logo.clone();
        logo
      }
      Err(e) => {
        warn!(error = %e, "Logo generation failed.");
        None
      }
    }
  }

  pub async fn market_briefing(&self) -> Vec<Headline> {
    adapters::market_briefing(self.intelligence.as_ref()).await
  }
}
