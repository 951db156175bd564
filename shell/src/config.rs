// shell/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use zii_empire::{CheckoutPolicy, PricingRules, SessionSettings};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Without a key the shell runs on the mock studio services.
  pub gemini_api_key: Option<String>,
  pub gemini_base_url: String,
  pub image_model: String,
  pub text_model: String,
  pub gemini_timeout_secs: u64,

  pub allow_empty_checkout: bool,
  pub maker_royalty_bps: u32,
  pub platform_fee_bps: u32,

  // Start with the house collection and production board
  pub seed_catalog: bool,
  pub log_json: bool,
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T>
where
  T::Err: std::fmt::Display,
{
  env::var(name)
    .unwrap_or_else(|_| default.to_string())
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e)))
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str, default: &str| env::var(var_name).unwrap_or_else(|_| default.to_string());

    let gemini_api_key = env::var("GEMINI_API_KEY")
      .ok()
      .map(|key| key.trim().to_string())
      .filter(|key| !key.is_empty());
    let gemini_base_url = get_env("ZII_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let image_model = get_env("ZII_IMAGE_MODEL", "gemini-2.5-flash-image");
    let text_model = get_env("ZII_TEXT_MODEL", "gemini-3-flash-preview");
    let gemini_timeout_secs = parse_var::<u64>("ZII_GEMINI_TIMEOUT_SECS", "60")?;

    let allow_empty_checkout = parse_var::<bool>("ZII_ALLOW_EMPTY_CHECKOUT", "false")?;
    let defaults = PricingRules::default();
    let maker_royalty_bps = parse_var::<u32>("ZII_MAKER_ROYALTY_BPS", &defaults.maker_royalty_bps.to_string())?;
    let platform_fee_bps = parse_var::<u32>("ZII_PLATFORM_FEE_BPS", &defaults.platform_fee_bps.to_string())?;
    if maker_royalty_bps
      .checked_add(platform_fee_bps)
      .map_or(true, |total| total > 10_000)
    {
      return Err(AppError::Config(format!(
        "Royalty ({} bps) and platform fee ({} bps) exceed 100% of the sale.",
        maker_royalty_bps, platform_fee_bps
      )));
    }

    let seed_catalog = parse_var::<bool>("ZII_SEED_CATALOG", "true")?;
    let log_json = parse_var::<bool>("ZII_LOG_JSON", "false")?;

    tracing::info!("Application configuration loaded successfully.");
    // Never log the API key itself.
    tracing::debug!(gemini_configured = gemini_api_key.is_some(), %image_model, %text_model, "Studio services");

    Ok(Self {
      gemini_api_key,
      gemini_base_url,
      image_model,
      text_model,
      gemini_timeout_secs,
      allow_empty_checkout,
      maker_royalty_bps,
      platform_fee_bps,
      seed_catalog,
      log_json,
    })
  }

  pub fn session_settings(&self) -> SessionSettings {
    SessionSettings {
      checkout_policy: if self.allow_empty_checkout {
        CheckoutPolicy::AllowEmpty
      } else {
        CheckoutPolicy::RejectEmpty
      },
      pricing: PricingRules {
        maker_royalty_bps: self.maker_royalty_bps,
        platform_fee_bps: self.platform_fee_bps,
      },
    }
  }
}
