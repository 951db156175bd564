// shell/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::services;
use std::sync::Arc;
use zii_empire::{AppState, Session};

#[derive(Clone)]
pub struct ShellState {
  pub session: Session,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl ShellState {
  pub fn build(config: Arc<AppConfig>) -> AppResult<Self> {
    let services = services::build(&config)?;
    let settings = config.session_settings();
    let state = if config.seed_catalog {
      AppState::seeded(settings)
    } else {
      AppState::new(settings)
    };
    Ok(Self {
      session: Session::new(state, services.designer, services.intelligence),
      config,
    })
  }
}
