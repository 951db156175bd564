// shell/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod services;
mod state;
mod walkthrough;

use crate::config::AppConfig;
use crate::errors::Result as AppResult; // Use the app's Result alias
use crate::state::ShellState;

use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn init_tracing(json: bool) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[tokio::main]
async fn main() -> AppResult<()> {
  // Configuration decides the log format, so tracing starts right after it loads.
  let loaded = AppConfig::from_env();
  init_tracing(loaded.as_ref().map(|cfg| cfg.log_json).unwrap_or(false));

  let app_config = match loaded {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e);
    }
  };
  tracing::info!("Starting Zii-Empire shell...");

  let shell = ShellState::build(app_config.clone())?;
  if app_config.seed_catalog {
    tracing::info!("Seeded the house collection and production board.");
  }

  // Brand assets and the dashboard briefing load before the first page.
  match shell.session.load_logo().await {
    Some(logo) => tracing::info!(logo_bytes = logo.as_str().len(), "Brand logo ready."),
    None => tracing::info!("Brand logo unavailable; rendering the text mark."),
  }
  for headline in shell.session.market_briefing().await {
    tracing::info!(category = %headline.category, title = %headline.title, summary = %headline.summary, "Market intelligence");
  }

  if let Err(e) = walkthrough::run(&shell).await {
    tracing::error!(error = %e, notice = %e.user_notice(), "Walkthrough aborted.");
    return Err(e);
  }

  tracing::info!(orders = shell.session.orders().len(), "Session finished.");
  Ok(())
}
