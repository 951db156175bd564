// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZiiError {
  /// The acting role lacks the right for the requested route or transition.
  #[error("Permission denied: {role} may not {action}")]
  PermissionDenied { role: String, action: String },

  /// No user is logged in; the UI answers this with a redirect to the entry route.
  #[error("Not authenticated")]
  Unauthenticated,

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Validation error: {0}")]
  Validation(String),

  #[error("External service '{service}' failed: {source}")]
  ExternalServiceFailure {
    service: &'static str,
    retryable: bool,
    #[source]
    source: AnyhowError,
  },

  #[error("A design generation is already in flight for this studio")]
  GenerationInFlight,
}

impl ZiiError {
  pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
    ZiiError::NotFound { entity, id: id.into() }
  }

  /// Wraps an adapter failure. Callers decide whether a retry affordance makes sense.
  pub fn external(service: &'static str, retryable: bool, source: impl Into<AnyhowError>) -> Self {
    ZiiError::ExternalServiceFailure {
      service,
      retryable,
      source: source.into(),
    }
  }

  /// True for failures the UI should present as "try again".
  pub fn is_retryable(&self) -> bool {
    matches!(self, ZiiError::ExternalServiceFailure { retryable: true, .. })
  }

  /// True for failures the UI turns into a redirect instead of a notice.
  pub fn is_redirect(&self) -> bool {
    matches!(self, ZiiError::PermissionDenied { .. } | ZiiError::Unauthenticated)
  }
}

pub type ZiiResult<T, E = ZiiError> = std::result::Result<T, E>;
