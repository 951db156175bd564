// shell/src/services/gemini.rs

//! Gemini `generateContent` client backing the design studio and the
//! dashboard briefing.

use crate::config::AppConfig;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, instrument};
use zii_empire::adapters::prompts::{
  design_prompt, image_from_response, DESIGN_ASPECT_RATIO, LOGO_PROMPT, MARKET_INTELLIGENCE_PROMPT,
};
use zii_empire::adapters::parse_headlines;
use zii_empire::{DesignGenerator, Headline, ImageArtifact, MarketIntelligence, ZiiError, ZiiResult};

const DESIGN_SERVICE: &str = "design-generator";
const INTELLIGENCE_SERVICE: &str = "market-intelligence";

pub struct GeminiClient {
  http: Client,
  base_url: String,
  api_key: String,
  image_model: String,
  text_model: String,
}

impl GeminiClient {
  pub fn from_config(config: &AppConfig, api_key: &str) -> anyhow::Result<Self> {
    let http = Client::builder()
      .timeout(Duration::from_secs(config.gemini_timeout_secs))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      http,
      base_url: config.gemini_base_url.clone(),
      api_key: api_key.to_string(),
      image_model: config.image_model.clone(),
      text_model: config.text_model.clone(),
    })
  }

  fn endpoint(&self, model: &str) -> anyhow::Result<Url> {
    let generated = format!(
      "{}/v1beta/models/{}:generateContent",
      self.base_url.trim_end_matches('/'),
      model
    );
    let mut url = Url::parse(&generated).with_context(|| format!("invalid gemini endpoint {}", generated))?;
    url.query_pairs_mut().append_pair("key", &self.api_key);
    Ok(url)
  }

  async fn generate_content(&self, model: &str, payload: Value) -> anyhow::Result<Value> {
    let url = self.endpoint(model)?;
    let response = self
      .http
      .post(url)
      .json(&payload)
      .send()
      .await
      .context("gemini request failed")?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(anyhow!("gemini error {}: {}", status, truncate(&body, 320)));
    }

    response.json::<Value>().await.context("invalid gemini response")
  }

  /// Image request. Designs pin an aspect ratio, the logo leaves it to the model.
  async fn generate_image(
    &self,
    prompt: String,
    aspect_ratio: Option<&str>,
  ) -> ZiiResult<Option<ImageArtifact>> {
    let mut payload = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });
    if let Some(ratio) = aspect_ratio {
      payload["generationConfig"] = json!({ "imageConfig": { "aspectRatio": ratio } });
    }
    // Any image failure is worth another try from the studio.
    let body = self
      .generate_content(&self.image_model, payload)
      .await
      .map_err(|e| ZiiError::external(DESIGN_SERVICE, true, e))?;
    let image = image_from_response(&body);
    if image.is_none() {
      debug!("Response carried no inline image.");
    }
    Ok(image)
  }
}

#[async_trait]
impl DesignGenerator for GeminiClient {
  #[instrument(name = "gemini::generate_design", skip(self, prompt))]
  async fn generate_design(&self, prompt: &str, category: &str) -> ZiiResult<Option<ImageArtifact>> {
    self
      .generate_image(design_prompt(prompt, category), Some(DESIGN_ASPECT_RATIO))
      .await
  }

  #[instrument(name = "gemini::generate_logo", skip(self))]
  async fn generate_logo(&self) -> ZiiResult<Option<ImageArtifact>> {
    self.generate_image(LOGO_PROMPT.to_string(), None).await
  }
}

#[async_trait]
impl MarketIntelligence for GeminiClient {
  #[instrument(name = "gemini::fetch_headlines", skip(self))]
  async fn fetch_headlines(&self) -> ZiiResult<Vec<Headline>> {
    let payload = json!({
      "contents": [{ "parts": [{ "text": MARKET_INTELLIGENCE_PROMPT }] }],
      "generationConfig": { "responseMimeType": "application/json" }
    });
    let body = self
      .generate_content(&self.text_model, payload)
      .await
      .map_err(|e| ZiiError::external(INTELLIGENCE_SERVICE, false, e))?;

    let text = body["candidates"]
      .as_array()
      .and_then(|candidates| candidates.first())
      .and_then(|candidate| candidate["content"]["parts"].as_array())
      .map(|parts| {
        parts
          .iter()
          .filter_map(|part| part["text"].as_str())
          .collect::<Vec<_>>()
          .join("")
      })
      .unwrap_or_default();

    parse_headlines(&text).map_err(|e| ZiiError::external(INTELLIGENCE_SERVICE, false, e))
  }
}

fn truncate(value: &str, max_chars: usize) -> String {
  let mut chars = value.chars();
  let truncated: String = chars.by_ref().take(max_chars).collect();
  if chars.next().is_some() {
    format!("{}...", truncated)
  } else {
    truncated
  }
}
