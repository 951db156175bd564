// core/src/adapters/intelligence.rs

use super::MarketIntelligence;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
  pub title: String,
  pub category: String,
  pub summary: String,
}

impl Headline {
  fn new(title: &str, summary: &str, category: &str) -> Self {
    Headline {
      title: title.to_string(),
      category: category.to_string(),
      summary: summary.to_string(),
    }
  }
}

/// Built-in briefing shown whenever the intelligence service fails.
pub fn fallback_headlines() -> Vec<Headline> {
  vec![
    Headline::new(
      "Lagos Fashion Week 2026",
      "Ankara remains king as modern cuts dominate the runway.",
      "Trend Alert",
    ),
    Headline::new(
      "Zii-Empire Tech Expansion",
      "New AI features launched for automated recipe generation.",
      "Internal News",
    ),
    Headline::new(
      "Cotton Prices Stabilize",
      "Supply chain improvements lead to lower material costs.",
      "Market Shift",
    ),
  ]
}

/// Parses the JSON array the text model is asked for. Blank text reads as an empty list.
pub fn parse_headlines(text: &str) -> anyhow::Result<Vec<Headline>> {
  if text.trim().is_empty() {
    return Ok(Vec::new());
  }
  serde_json::from_str(text).context("market intelligence response is not a JSON array of headlines")
}

/// Headlines for the dashboard. Service failures fall back to the built-in list.
pub async fn market_briefing(source: &dyn MarketIntelligence) -> Vec<Headline> {
  match source.fetch_headlines().await {
    Ok(headlines) => headlines,
    Err(e) => {
      warn!(error = %e, "Market intelligence unavailable, using built-in headlines.");
      fallback_headlines()
    }
  }
}
