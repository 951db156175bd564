// shell/src/services/mod.rs
pub mod gemini;
pub mod studio_mock;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use std::sync::Arc;
use zii_empire::{DesignGenerator, MarketIntelligence};

pub struct StudioServices {
  pub designer: Arc<dyn DesignGenerator>,
  pub intelligence: Arc<dyn MarketIntelligence>,
}

/// Gemini when an API key is configured, the offline mocks otherwise.
pub fn build(config: &AppConfig) -> AppResult<StudioServices> {
  match &config.gemini_api_key {
    Some(key) => {
      let client = Arc::new(gemini::GeminiClient::from_config(config, key)?);
      tracing::info!(image_model = %config.image_model, text_model = %config.text_model, "Using Gemini studio services.");
      Ok(StudioServices {
        designer: client.clone(),
        intelligence: client,
      })
    }
    None => {
      tracing::warn!("GEMINI_API_KEY not set; using mock studio services.");
      Ok(StudioServices {
        designer: Arc::new(studio_mock::MockDesigner::default()),
        intelligence: Arc::new(studio_mock::MockNewsDesk),
      })
    }
  }
}
