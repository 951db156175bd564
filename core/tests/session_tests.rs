// tests/session_tests.rs
mod common;
use common::*;
use zii_empire::models::{OrderStatus, ProductDraft, ProfileUpdate, RecipeDraft, RecipeStatus, SignupForm};
use zii_empire::seed::HOUSE_CREATOR_ID;
use zii_empire::{ApprovalOutcome, AppState, CheckoutPolicy, Role, Route, RouteDecision, SessionSettings, ZiiError};

#[test]
fn test_operations_require_a_login() {
  setup_tracing();
  let session = seeded_session();
  assert!(matches!(session.add_to_cart("1"), Err(ZiiError::Unauthenticated)));
  assert!(matches!(session.checkout("Card", ""), Err(ZiiError::Unauthenticated)));
  assert!(session.submit_recipe(RecipeDraft::default()).unwrap_err().is_redirect());
  assert_eq!(session.navigate(Route::Shop), RouteDecision::Redirect(Route::Login));
  assert!(session.navigation().is_empty());
}

#[test]
fn test_role_is_fixed_until_logout() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();
  assert!(matches!(session.log_in(Role::Admin), Err(ZiiError::Validation(_))));
  assert_eq!(session.navigate(Route::Admin), RouteDecision::Redirect(Route::Dashboard));

  session.log_out();
  session.log_in(Role::Admin).unwrap();
  assert_eq!(session.navigate(Route::Admin), RouteDecision::Render(Route::Admin));
}

#[test]
fn test_signup_then_portal_login_uses_registered_profile() {
  setup_tracing();
  let session = seeded_session();
  assert!(matches!(
    session.sign_up(SignupForm {
      role: Role::Maker,
      username: "amaka".to_string(),
      ..Default::default()
    }),
    Err(ZiiError::Validation(_))
  ));

  let registered = session
    .sign_up(SignupForm {
      role: Role::Maker,
      full_name: "Amaka K.".to_string(),
      username: "amaka".to_string(),
      email: "amaka@example.com".to_string(),
      country: "Nigeria".to_string(),
      password: "secret".to_string(),
      confirm_password: "secret".to_string(),
      ..Default::default()
    })
    .unwrap();
  assert!(session.current_profile().is_none());

  let profile = session.log_in(Role::Maker).unwrap();
  assert_eq!(profile.id, registered.id);
  assert_eq!(profile.username, "amaka");

  let updated = session
    .update_profile(ProfileUpdate {
      full_name: "Amaka Kalu".to_string(),
      email: "amaka@zii.example".to_string(),
      country: "Ghana".to_string(),
      address: "5 Oxford Street, Accra".to_string(),
    })
    .unwrap();
  assert_eq!(updated.full_name, "Amaka Kalu");
  assert_eq!(updated.role, Role::Maker);
  assert_eq!(updated.username, "amaka");

  session.log_out();
  assert_eq!(session.log_in(Role::Maker).unwrap().full_name, "Amaka Kalu");
}

#[test]
fn test_cart_and_checkout_through_the_session() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();

  session.add_to_cart("1").unwrap();
  let cart = session.add_to_cart("1").unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.items()[0].quantity, 2);
  assert_eq!(cart.total_cents(), 24_000);

  let order = session.checkout("Card", "12 Marina Road, Lagos").unwrap();
  assert_eq!(order.total_cents, 24_000);
  assert_eq!(order.status, OrderStatus::Processing);
  assert!(session.cart().unwrap().is_empty());
  assert_eq!(session.orders().len(), 1);

  let stats = session.current_profile().unwrap().stats;
  assert_eq!(stats.orders_count, 1);
  assert_eq!(stats.total_spent_cents, 24_000);
}

#[test]
fn test_checkout_leaves_wishlist_alone() {
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();
  assert!(session.toggle_wishlist("2").unwrap());
  session.add_to_cart("2").unwrap();
  session.checkout("Card", "").unwrap();
  assert_eq!(session.wishlist_products().unwrap().len(), 1);
  assert_eq!(session.current_profile().unwrap().stats.wishlist_count, 1);

  assert!(!session.toggle_wishlist("2").unwrap());
  assert_eq!(session.current_profile().unwrap().stats.wishlist_count, 0);
}

#[test]
fn test_empty_checkout_policy_comes_from_settings() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();
  assert!(matches!(session.checkout("Card", ""), Err(ZiiError::Validation(_))));
  assert!(session.orders().is_empty());

  let permissive = session_with(
    AppState::seeded(SessionSettings {
      checkout_policy: CheckoutPolicy::AllowEmpty,
      ..Default::default()
    }),
    std::sync::Arc::new(StubDesigner::new(DesignBehavior::NoImage)),
  );
  permissive.log_in(Role::Customer).unwrap();
  assert_eq!(permissive.checkout("Card", "").unwrap().total_cents, 0);
}

#[test]
fn test_unapproved_products_cannot_be_bought_or_seen() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Maker).unwrap();
  let listed = session
    .submit_product(ProductDraft {
      name: "Adire Kaftan".to_string(),
      price_cents: Some(21_000),
      category: "African Native".to_string(),
      ..Default::default()
    })
    .unwrap();

  assert!(session.marketplace().unwrap().iter().all(|p| p.id != listed.id));
  assert_eq!(session.my_listings().unwrap().len(), 1);
  assert!(matches!(session.add_to_cart(&listed.id), Err(ZiiError::NotFound { .. })));
  assert!(session.approve_product(&listed.id).unwrap_err().is_redirect());

  session.log_out();
  session.log_in(Role::Admin).unwrap();
  assert_eq!(session.approval_queue().unwrap().products.len(), 1);
  assert_eq!(session.approve_product(&listed.id).unwrap(), ApprovalOutcome::Approved);
  assert_eq!(session.approve_product(&listed.id).unwrap(), ApprovalOutcome::Unchanged);

  session.log_out();
  session.log_in(Role::Customer).unwrap();
  assert_eq!(session.search("adire").unwrap().len(), 1);
  session.add_to_cart(&listed.id).unwrap();
}

#[test]
fn test_recipe_flow_from_maker_to_worker() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Maker).unwrap();
  let recipe = session
    .submit_recipe(RecipeDraft {
      name: "Kente Blazer".to_string(),
      materials: "Kente, Lining , Buttons".to_string(),
      steps: "Cut\nSew\n\nPress".to_string(),
      ..Default::default()
    })
    .unwrap();
  assert_eq!(recipe.status, RecipeStatus::PendingApproval);
  session.log_out();

  session.log_in(Role::Worker).unwrap();
  assert!(session.visible_recipes().unwrap().iter().all(|r| r.status == RecipeStatus::Approved));
  assert!(session.visible_recipes().unwrap().iter().all(|r| r.id != recipe.id));
  session.log_out();

  session.log_in(Role::Admin).unwrap();
  let queue = session.approval_queue().unwrap();
  assert!(queue.recipes.iter().any(|r| r.id == recipe.id));
  session.approve_recipe(&recipe.id).unwrap();
  session.log_out();

  session.log_in(Role::Worker).unwrap();
  assert!(session.visible_recipes().unwrap().iter().any(|r| r.id == recipe.id));
  session.log_out();

  session.log_in(Role::Customer).unwrap();
  assert!(session.visible_recipes().unwrap_err().is_redirect());
}

#[test]
fn test_wholesale_requests_reach_the_admin_queue() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();
  assert!(session.request_wholesale_catalog("Corner Shop").unwrap_err().is_redirect());
  session.log_out();

  session.log_in(Role::Distributor).unwrap();
  let request = session.request_wholesale_catalog("Kumasi Textiles").unwrap();
  assert!(session.approval_queue().unwrap_err().is_redirect());
  session.log_out();

  session.log_in(Role::Admin).unwrap();
  let queue = session.approval_queue().unwrap();
  assert!(queue.wholesale_requests.iter().any(|w| w.id == request.id));
}

#[test]
fn test_sales_credit_the_creator_royalty() {
  setup_tracing();
  let session = seeded_session();
  let maker = session.log_in(Role::Maker).unwrap();
  let listed = session
    .submit_product(ProductDraft {
      name: "Batik Shirt".to_string(),
      price_cents: Some(10_000),
      ..Default::default()
    })
    .unwrap();
  session.log_out();

  session.log_in(Role::Admin).unwrap();
  session.approve_product(&listed.id).unwrap();
  session.add_to_cart(&listed.id).unwrap();
  session.add_to_cart("1").unwrap();
  session.checkout("Card", "").unwrap();

  let state = session.state().read();
  assert_eq!(state.royalties.earned_by(&maker.id), 3_000);
  assert_eq!(state.royalties.earned_by(HOUSE_CREATOR_ID), 3_600);
}

#[test]
fn test_admin_leftovers_are_hidden_from_the_next_customer() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Maker).unwrap();
  let hidden = session
    .submit_product(ProductDraft {
      name: "Unreleased Agbada".to_string(),
      price_cents: Some(45_000),
      ..Default::default()
    })
    .unwrap();
  session.log_out();

  session.log_in(Role::Admin).unwrap();
  session.add_to_cart(&hidden.id).unwrap();
  session.add_to_cart("1").unwrap();
  assert!(session.toggle_wishlist(&hidden.id).unwrap());
  assert_eq!(session.cart().unwrap().len(), 2);
  session.log_out();

  assert!(matches!(session.cart(), Err(ZiiError::Unauthenticated)));
  assert!(matches!(session.wishlist_products(), Err(ZiiError::Unauthenticated)));

  let customer = session.log_in(Role::Customer).unwrap();
  assert_eq!(customer.stats.wishlist_count, 0);
  let cart = session.cart().unwrap();
  assert_eq!(cart.len(), 1);
  assert!(cart.items().iter().all(|line| line.product.id != hidden.id));
  assert!(session.wishlist_products().unwrap().is_empty());

  let order = session.checkout("Card", "").unwrap();
  assert!(order.items.iter().all(|line| line.product.id != hidden.id));
  assert_eq!(order.total_cents, 12_000);
}

#[test]
fn test_portal_identity_survives_a_relogin() {
  setup_tracing();
  let session = seeded_session();
  let maker = session.log_in(Role::Maker).unwrap();
  let listed = session
    .submit_product(ProductDraft {
      name: "Aso Oke Cap".to_string(),
      price_cents: Some(5_000),
      ..Default::default()
    })
    .unwrap();
  session
    .update_profile(ProfileUpdate {
      full_name: "Tunde Maker".to_string(),
      email: "tunde@example.com".to_string(),
      country: "Nigeria".to_string(),
      address: String::new(),
    })
    .unwrap();
  session.log_out();

  session.log_in(Role::Admin).unwrap();
  session.approve_product(&listed.id).unwrap();
  session.log_out();

  session.log_in(Role::Customer).unwrap();
  session.add_to_cart(&listed.id).unwrap();
  session.checkout("Card", "").unwrap();
  session.log_out();

  let again = session.log_in(Role::Maker).unwrap();
  assert_eq!(again.id, maker.id);
  assert_eq!(again.full_name, "Tunde Maker");
  assert_eq!(again.stats.total_earned_cents, 1_500);
  let listings = session.my_listings().unwrap();
  assert_eq!(listings.len(), 1);
  assert_eq!(listings[0].id, listed.id);
}

#[test]
fn test_wishlist_count_follows_the_shared_wishlist() {
  setup_tracing();
  let session = seeded_session();
  session.log_in(Role::Customer).unwrap();
  session.toggle_wishlist("1").unwrap();
  session.toggle_wishlist("3").unwrap();
  session.log_out();

  let distributor = session.log_in(Role::Distributor).unwrap();
  assert_eq!(distributor.stats.wishlist_count, 2);
}
