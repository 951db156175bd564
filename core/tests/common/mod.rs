// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tokio::sync::Notify;
use tracing::Level;
use zii_empire::{
  models::{CartItem, Product},
  AppState, DesignGenerator, Headline, ImageArtifact, MarketIntelligence, Session, SessionSettings, ZiiError,
  ZiiResult,
};

// --- Fixtures ---

pub fn product(id: &str, price_dollars: u64) -> Product {
  Product {
    id: id.to_string(),
    name: format!("Test Product {}", id),
    price_cents: price_dollars * 100,
    category: "Modern".to_string(),
    description: String::new(),
    image: String::new(),
    reviews: vec![],
    is_approved: true,
    creator_id: "maker-under-test".to_string(),
  }
}

pub fn line(id: &str, price_dollars: u64, quantity: u32) -> CartItem {
  CartItem {
    product: product(id, price_dollars),
    quantity,
  }
}

// --- Stub adapters ---

#[derive(Debug, Clone)]
pub enum DesignBehavior {
  Image(&'static str),
  NoImage,
  Fail,
}

/// Design generator with a scripted answer. When `gate` is set, each call
/// waits for a notification before answering.
pub struct StubDesigner {
  pub behavior: DesignBehavior,
  pub calls: AtomicUsize,
  pub gate: Option<Arc<Notify>>,
}

impl StubDesigner {
  pub fn new(behavior: DesignBehavior) -> Self {
    StubDesigner {
      behavior,
      calls: AtomicUsize::new(0),
      gate: None,
    }
  }

  pub fn gated(behavior: DesignBehavior, gate: Arc<Notify>) -> Self {
    StubDesigner {
      gate: Some(gate),
      ..Self::new(behavior)
    }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn answer(&self) -> ZiiResult<Option<ImageArtifact>> {
    match &self.behavior {
      DesignBehavior::Image(data) => Ok(Some(ImageArtifact::from_inline_png(data))),
      DesignBehavior::NoImage => Ok(None),
      DesignBehavior::Fail => Err(ZiiError::external(
        "design",
        true,
        anyhow::anyhow!("stub design service unavailable"),
      )),
    }
  }
}

#[async_trait]
impl DesignGenerator for StubDesigner {
  async fn generate_design(&self, _prompt: &str, _category: &str) -> ZiiResult<Option<ImageArtifact>> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if let Some(gate) = &self.gate {
      gate.notified().await;
    }
    self.answer()
  }

  async fn generate_logo(&self) -> ZiiResult<Option<ImageArtifact>> {
    self.answer()
  }
}

pub struct StubIntelligence {
  pub headlines: Option<Vec<Headline>>,
}

#[async_trait]
impl MarketIntelligence for StubIntelligence {
  async fn fetch_headlines(&self) -> ZiiResult<Vec<Headline>> {
    self.headlines.clone().ok_or_else(|| {
      ZiiError::external(
        "market-intelligence",
        false,
        anyhow::anyhow!("stub intelligence service unavailable"),
      )
    })
  }
}

// --- Session builders ---

pub fn session_with(state: AppState, designer: Arc<StubDesigner>) -> Session {
  Session::new(state, designer, Arc::new(StubIntelligence { headlines: None }))
}

/// Seeded session with a designer that always returns an image.
pub fn seeded_session() -> Session {
  session_with(
    AppState::seeded(SessionSettings::default()),
    Arc::new(StubDesigner::new(DesignBehavior::Image("AAAA"))),
  )
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
