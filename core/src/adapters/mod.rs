// core/src/adapters/mod.rs

//! Boundaries to the external generative services.
//!
//! The core treats implementations as black boxes: a call either yields its
//! payload or an explicit failure. Retry, caching and timeouts belong to the
//! implementation, never to the caller.

pub mod intelligence;
pub mod prompts;

pub use intelligence::{fallback_headlines, market_briefing, parse_headlines, Headline};
pub use prompts::{design_prompt, image_from_response, STYLE_CATEGORIES};

use crate::error::ZiiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reference to a generated image: a `data:` URI or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageArtifact(pub String);

impl ImageArtifact {
  pub fn from_inline_png(base64_data: &str) -> Self {
    ImageArtifact(format!("data:image/png;base64,{}", base64_data))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

#[async_trait]
pub trait DesignGenerator: Send + Sync {
  /// `Ok(None)` means the service answered without an image.
  async fn generate_design(&self, prompt: &str, category: &str) -> ZiiResult<Option<ImageArtifact>>;

  /// Brand logo, requested once at application start.
  async fn generate_logo(&self) -> ZiiResult<Option<ImageArtifact>>;
}

#[async_trait]
pub trait MarketIntelligence: Send + Sync {
  async fn fetch_headlines(&self) -> ZiiResult<Vec<Headline>>;
}
