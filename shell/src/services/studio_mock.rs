// shell/src/services/studio_mock.rs
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument};
use zii_empire::adapters::fallback_headlines;
use zii_empire::{DesignGenerator, Headline, ImageArtifact, MarketIntelligence, ZiiError, ZiiResult};

/// Placeholder artwork used when no generative service is configured.
const MOCK_ARTWORK_BASE: &str = "https://picsum.photos/seed";

/// Offline stand-in for the image model.
#[derive(Debug, Clone)]
pub struct MockDesigner {
  pub latency: Duration,
}

impl Default for MockDesigner {
  fn default() -> Self {
    Self {
      latency: Duration::from_millis(150),
    }
  }
}

#[async_trait]
impl DesignGenerator for MockDesigner {
  #[instrument(name = "mock::generate_design", skip(self, prompt))]
  async fn generate_design(&self, prompt: &str, category: &str) -> ZiiResult<Option<ImageArtifact>> {
    info!("Simulating design generation");
    tokio::time::sleep(self.latency).await; // Simulate model latency

    // Simulate failure based on the prompt, like a blocked request
    if prompt.contains("fail_test") {
      info!("Mock design generation FAILED due to test condition");
      return Err(ZiiError::external(
        "design-generator",
        true,
        anyhow::anyhow!("mock generation failed due to test condition"),
      ));
    }
    if prompt.contains("no_image_test") {
      return Ok(None);
    }

    let seed: String = format!("{}-{}", category, prompt)
      .chars()
      .filter(|c| c.is_ascii_alphanumeric())
      .take(32)
      .collect();
    Ok(Some(ImageArtifact(format!("{}/{}/600/800", MOCK_ARTWORK_BASE, seed))))
  }

  async fn generate_logo(&self) -> ZiiResult<Option<ImageArtifact>> {
    tokio::time::sleep(self.latency).await;
    Ok(Some(ImageArtifact(format!("{}/zii-empire-logo/400/400", MOCK_ARTWORK_BASE))))
  }
}

/// Offline newsroom serving the built-in briefing.
#[derive(Debug, Clone, Default)]
pub struct MockNewsDesk;

#[async_trait]
impl MarketIntelligence for MockNewsDesk {
  async fn fetch_headlines(&self) -> ZiiResult<Vec<Headline>> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(fallback_headlines())
  }
}
