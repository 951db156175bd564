// core/src/access.rs

//! Role-gated navigation and action permissions.
//!
//! Every role check in the crate goes through [`can_access`] or [`can_perform`].
//! Both are pure predicates; anything unrecognised is denied.

use crate::error::{ZiiError, ZiiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
  Admin,
  Maker,
  Worker,
  Distributor,
  Customer,
}

impl Role {
  pub const ALL: [Role; 5] = [Role::Admin, Role::Maker, Role::Worker, Role::Distributor, Role::Customer];

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Admin => "Admin",
      Role::Maker => "Maker",
      Role::Worker => "Worker",
      Role::Distributor => "Distributor",
      Role::Customer => "Customer",
    }
  }

  /// Portal blurb shown on the login screen.
  pub fn portal_description(&self) -> &'static str {
    match self {
      Role::Customer => "Shop the latest designs",
      Role::Maker => "Create and monetize designs",
      Role::Worker => "Production and management",
      Role::Distributor => "Bulk orders and logistics",
      Role::Admin => "System control (Owner)",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Role::ALL
      .into_iter()
      .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
  Login,
  Signup,
  Dashboard,
  Studio,
  Shop,
  Recipes,
  Admin,
  Profile,
  Cart,
}

impl Route {
  pub const ALL: [Route; 9] = [
    Route::Login,
    Route::Signup,
    Route::Dashboard,
    Route::Studio,
    Route::Shop,
    Route::Recipes,
    Route::Admin,
    Route::Profile,
    Route::Cart,
  ];

  /// Navbar links, in display order.
  const NAVIGATION: [Route; 5] = [Route::Dashboard, Route::Studio, Route::Shop, Route::Recipes, Route::Admin];

  pub fn id(&self) -> &'static str {
    match self {
      Route::Login => "login",
      Route::Signup => "signup",
      Route::Dashboard => "dashboard",
      Route::Studio => "studio",
      Route::Shop => "shop",
      Route::Recipes => "recipes",
      Route::Admin => "admin",
      Route::Profile => "profile",
      Route::Cart => "cart",
    }
  }

  pub fn from_id(id: &str) -> Option<Route> {
    let id = id.trim().trim_start_matches('/');
    Route::ALL.into_iter().find(|route| route.id() == id)
  }

  /// Entry routes are reachable without a session.
  pub fn is_entry(&self) -> bool {
    matches!(self, Route::Login | Route::Signup)
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}", self.id())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
  ApproveProduct,
  ApproveRecipe,
  CreateProductListing,
  CreateRecipe,
  GenerateDesign,
  RequestWholesaleCatalog,
  Checkout,
}

impl Action {
  pub fn describe(&self) -> &'static str {
    match self {
      Action::ApproveProduct => "approve product",
      Action::ApproveRecipe => "approve recipe",
      Action::CreateProductListing => "create product listing",
      Action::CreateRecipe => "create recipe",
      Action::GenerateDesign => "generate design",
      Action::RequestWholesaleCatalog => "request wholesale catalog",
      Action::Checkout => "checkout",
    }
  }

  pub fn from_name(name: &str) -> Option<Action> {
    [
      Action::ApproveProduct,
      Action::ApproveRecipe,
      Action::CreateProductListing,
      Action::CreateRecipe,
      Action::GenerateDesign,
      Action::RequestWholesaleCatalog,
      Action::Checkout,
    ]
    .into_iter()
    .find(|action| action.describe().eq_ignore_ascii_case(name.trim()))
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.describe())
  }
}

/// Route permission table for an authenticated role.
pub fn can_access(role: Role, route: Route) -> bool {
  match route {
    Route::Studio => matches!(role, Role::Maker | Role::Admin),
    Route::Recipes => role != Role::Customer,
    Route::Admin => role == Role::Admin,
    Route::Dashboard | Route::Shop | Route::Profile | Route::Cart => true,
    Route::Login | Route::Signup => true,
  }
}

pub fn can_perform(role: Role, action: Action) -> bool {
  match action {
    Action::ApproveProduct | Action::ApproveRecipe => role == Role::Admin,
    Action::CreateProductListing => matches!(role, Role::Maker | Role::Worker),
    Action::CreateRecipe => role == Role::Maker,
    Action::GenerateDesign => matches!(role, Role::Maker | Role::Admin),
    Action::RequestWholesaleCatalog => role == Role::Distributor,
    Action::Checkout => true,
  }
}

/// [`can_perform`] as a guard for state transitions.
pub fn require(role: Role, action: Action) -> ZiiResult<()> {
  if can_perform(role, action) {
    Ok(())
  } else {
    tracing::warn!(%role, %action, "Permission denied.");
    Err(ZiiError::PermissionDenied {
      role: role.to_string(),
      action: action.to_string(),
    })
  }
}

/// String-keyed form of [`can_access`] for callers holding raw identifiers.
/// Unknown roles or routes are denied.
pub fn can_access_route(role: &str, route_id: &str) -> bool {
  match (role.parse::<Role>(), Route::from_id(route_id)) {
    (Ok(role), Some(route)) => can_access(role, route),
    _ => false,
  }
}

/// String-keyed form of [`can_perform`]. Unknown roles or actions are denied.
pub fn can_perform_named(role: &str, action: &str) -> bool {
  match (role.parse::<Role>(), Action::from_name(action)) {
    (Ok(role), Some(action)) => can_perform(role, action),
    _ => false,
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
  Render(Route),
  Redirect(Route),
}

/// Decides what the UI shows when `session_role` navigates to `route`.
///
/// Unauthenticated visitors land on the login portal. Authenticated users are
/// sent back to the dashboard from routes their role cannot see, and from the
/// login portal itself.
pub fn resolve(session_role: Option<Role>, route: Route) -> RouteDecision {
  match session_role {
    None if route.is_entry() => RouteDecision::Render(route),
    None => RouteDecision::Redirect(Route::Login),
    Some(_) if route == Route::Login => RouteDecision::Redirect(Route::Dashboard),
    Some(role) if can_access(role, route) => RouteDecision::Render(route),
    Some(_) => RouteDecision::Redirect(Route::Dashboard),
  }
}

pub fn navigation(role: Role) -> Vec<Route> {
  Route::NAVIGATION
    .into_iter()
    .filter(|route| can_access(role, *route))
    .collect()
}
