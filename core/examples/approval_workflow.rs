// core/examples/approval_workflow.rs

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use zii_empire::models::{ProductDraft, RecipeDraft};
use zii_empire::{
  AppState, DesignGenerator, Headline, ImageArtifact, MarketIntelligence, Role, Route, Session, SessionSettings,
  ZiiResult,
};

// 1. Offline adapters so the example runs without any API key.
struct OfflineDesigner;

#[async_trait]
impl DesignGenerator for OfflineDesigner {
  async fn generate_design(&self, prompt: &str, category: &str) -> ZiiResult<Option<ImageArtifact>> {
    Ok(Some(ImageArtifact(format!("offline://{}/{}", category, prompt.len()))))
  }

  async fn generate_logo(&self) -> ZiiResult<Option<ImageArtifact>> {
    Ok(None)
  }
}

struct OfflineNews;

#[async_trait]
impl MarketIntelligence for OfflineNews {
  async fn fetch_headlines(&self) -> ZiiResult<Vec<Headline>> {
    Ok(Vec::new())
  }
}

#[tokio::main]
async fn main() -> ZiiResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Approval Workflow Example ---");

  // 2. A seeded session owned by this "shell".
  let session = Session::new(
    AppState::seeded(SessionSettings::default()),
    Arc::new(OfflineDesigner),
    Arc::new(OfflineNews),
  );

  // 3. A maker designs, lists and writes a recipe.
  session.log_in(Role::Maker)?;
  info!(nav = ?session.navigation(), "Maker navigation");
  if let Some(creation) = session.generate_design("indigo adire wrap dress", "African Native").await? {
    info!(image = creation.image.as_str(), "Design generated");
  }
  let product = session.submit_product(ProductDraft {
    name: "Adire Wrap Dress".to_string(),
    price_cents: Some(18_500),
    category: "African Native".to_string(),
    ..Default::default()
  })?;
  let recipe = session.submit_recipe(RecipeDraft {
    name: "Adire Wrap Dress".to_string(),
    materials: "Indigo cotton, Cassava paste , Thread".to_string(),
    steps: "Resist-dye fabric\nCut panels\n\nSew wrap ties".to_string(),
    estimated_time: "4 days".to_string(),
    ..Default::default()
  })?;
  session.log_out();

  // 4. The admin clears the approval queue.
  session.log_in(Role::Admin)?;
  let queue = session.approval_queue()?;
  info!(waiting = queue.len(), "Approval queue");
  session.approve_product(&product.id)?;
  session.approve_recipe(&recipe.id)?;
  session.log_out();

  // 5. A customer buys it.
  session.log_in(Role::Customer)?;
  info!(decision = ?session.navigate(Route::Studio), "Customer tries the studio");
  session.add_to_cart(&product.id)?;
  let order = session.checkout("Card", "14 Broad Street, Lagos")?;
  info!(order_id = %order.id, total_cents = order.total_cents, "Order placed");

  Ok(())
}
