// shell/src/walkthrough.rs

//! Scripted tour through every portal, standing in for a browser session.

use crate::errors::{AppError, Result as AppResult};
use crate::state::ShellState;
use tracing::{info, warn};
use zii_empire::adapters::STYLE_CATEGORIES;
use zii_empire::models::{ProductDraft, ProfileUpdate, RecipeDraft, SignupForm};
use zii_empire::{Role, Route, RouteDecision, Session, ZiiResult};

/// Surfaces a failed user action the way the UI does, then moves on.
fn present<T>(step: &str, result: ZiiResult<T>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(e) if e.is_redirect() => {
      info!(step, error = %e, "Redirected.");
      None
    }
    Err(e) => {
      let notice = AppError::from(e).user_notice();
      warn!(step, %notice, "Action rejected.");
      None
    }
  }
}

fn visit(session: &Session, route: Route) {
  match session.navigate(route) {
    RouteDecision::Render(shown) => info!(route = %shown, "Rendering."),
    RouteDecision::Redirect(to) => info!(requested = %route, redirected_to = %to, "Access denied."),
  }
}

async fn maker_tour(session: &Session) -> AppResult<Option<(String, String)>> {
  session.sign_up(SignupForm {
    role: Role::Maker,
    full_name: "Amaka Kalu".to_string(),
    username: "amaka-k".to_string(),
    email: "amaka@zii-empire.com".to_string(),
    country: "Nigeria".to_string(),
    state: "Lagos".to_string(),
    ..Default::default()
  })?;
  let profile = session.log_in(Role::Maker)?;
  info!(portal = profile.role.portal_description(), nav = ?session.navigation(), "Maker portal");

  visit(session, Route::Studio);
  let category = STYLE_CATEGORIES[0];
  // The second request is rejected while the first is still in flight.
  let (first, second) = tokio::join!(
    session.generate_design("indigo adire wrap dress with gold trim", category),
    session.generate_design("kente bomber jacket", category),
  );
  if let Some(Some(creation)) = present("generate_design", first) {
    info!(image = creation.image.as_str(), "Design added to creations.");
  }
  present("generate_design", second);
  present("generate_design", session.generate_design("   ", category).await);

  let product = present(
    "submit_product",
    session.submit_product(ProductDraft {
      name: "Adire Wrap Dress".to_string(),
      price_cents: Some(18_500),
      category: category.to_string(),
      description: "Hand-dyed indigo cotton.".to_string(),
      image: session
        .creations()
        .first()
        .map(|c| c.image.as_str().to_string())
        .unwrap_or_default(),
    }),
  );
  present("submit_product", session.submit_product(ProductDraft::default()));

  let recipe = present(
    "submit_recipe",
    session.submit_recipe(RecipeDraft {
      name: "Adire Wrap Dress".to_string(),
      materials: "Indigo cotton, Cassava paste , Thread".to_string(),
      steps: "Resist-dye fabric\nCut panels\n\nSew wrap ties".to_string(),
      estimated_time: "4 days".to_string(),
      ..Default::default()
    }),
  );
  info!(listings = session.my_listings()?.len(), "My listings");
  session.log_out();

  Ok(product.zip(recipe).map(|(p, r)| (p.id, r.id)))
}

fn worker_tour(session: &Session) -> AppResult<()> {
  session.log_in(Role::Worker)?;
  visit(session, Route::Studio);
  if let Some(recipes) = present("visible_recipes", session.visible_recipes()) {
    for recipe in recipes {
      info!(name = %recipe.name, status = %recipe.status, worker = ?recipe.worker, "Production board");
    }
  }
  session.log_out();
  Ok(())
}

fn admin_tour(session: &Session) -> AppResult<()> {
  session.log_in(Role::Admin)?;
  let queue = session.approval_queue()?;
  info!(
    products = queue.products.len(),
    recipes = queue.recipes.len(),
    wholesale = queue.wholesale_requests.len(),
    "Approval queue"
  );
  for product in &queue.products {
    let outcome = session.approve_product(&product.id)?;
    info!(name = %product.name, ?outcome, "Product reviewed.");
  }
  for recipe in &queue.recipes {
    let outcome = session.approve_recipe(&recipe.id)?;
    info!(name = %recipe.name, ?outcome, "Recipe reviewed.");
  }
  session.log_out();
  Ok(())
}

fn distributor_tour(session: &Session) -> AppResult<()> {
  session.log_in(Role::Distributor)?;
  let request = session.request_wholesale_catalog("Nairobi Crafts & Co.")?;
  info!(request_id = %request.id, "Wholesale catalog requested.");
  present("checkout", session.checkout("Invoice", "Moi Avenue, Nairobi"));
  session.log_out();
  Ok(())
}

fn customer_tour(session: &Session, new_listing: Option<&str>) -> AppResult<()> {
  session.log_in(Role::Customer)?;
  visit(session, Route::Admin);
  present("visible_recipes", session.visible_recipes());

  let shop = session.marketplace()?;
  info!(products = shop.len(), "Marketplace");
  for hit in session.search("silk")? {
    info!(name = %hit.name, price_cents = hit.price_cents, rating = ?hit.average_rating(), "Search hit");
  }

  present("checkout", session.checkout("Card", "14 Broad Street, Lagos"));
  if let Some(first) = shop.first() {
    session.add_to_cart(&first.id)?;
    session.add_to_cart(&first.id)?;
    session.toggle_wishlist(&first.id)?;
  }
  if let Some(id) = new_listing {
    present("add_to_cart", session.add_to_cart(id));
  }
  present("add_to_cart", session.add_to_cart("no-such-product"));

  let cart = session.cart()?;
  info!(lines = cart.len(), items = cart.item_count(), total_cents = cart.total_cents(), "Cart");
  if let Some(order) = present("checkout", session.checkout("Card", "14 Broad Street, Lagos")) {
    info!(order_id = %order.id, status = ?order.status, total_cents = order.total_cents, "Order placed.");
  }

  let profile = session.update_profile(ProfileUpdate {
    full_name: "Chidi Okafor".to_string(),
    email: "chidi@example.com".to_string(),
    country: "Nigeria".to_string(),
    address: "14 Broad Street, Lagos".to_string(),
  })?;
  info!(stats = ?profile.stats, wishlist = session.wishlist_products()?.len(), "Profile");
  session.log_out();
  Ok(())
}

/// Runs every portal once against a single session.
pub async fn run(shell: &ShellState) -> AppResult<()> {
  let session = &shell.session;
  visit(session, Route::Shop);

  let submitted = maker_tour(session).await?;
  worker_tour(session)?;
  admin_tour(session)?;
  distributor_tour(session)?;
  customer_tour(session, submitted.as_ref().map(|(product_id, _)| product_id.as_str()))?;

  // The maker's earnings reflect the customer's purchase.
  let maker = session.log_in(Role::Maker)?;
  info!(
    earned_cents = maker.stats.total_earned_cents,
    royalty_bps = shell.config.maker_royalty_bps,
    "Maker earnings"
  );
  session.log_out();
  Ok(())
}
