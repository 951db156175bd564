// shell/src/errors.rs

use thiserror::Error;
use zii_empire::ZiiError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("{source}")]
  Core {
    #[from] // Allows conversion from zii_empire::ZiiError
    source: ZiiError,
  },

  #[error("Internal Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<ZiiError>() {
      Ok(core) => AppError::Core { source: core },
      Err(other) => AppError::Internal(format!("{:#}", other)),
    }
  }
}

impl AppError {
  /// How the UI surfaces this error to the user.
  pub fn user_notice(&self) -> String {
    match self {
      AppError::Core { source } if source.is_retryable() => "Generation failed. Please try again.".to_string(),
      AppError::Core { source } => source.to_string(),
      AppError::Config(m) => format!("The application is misconfigured: {}", m),
      AppError::Internal(_) => "Something went wrong.".to_string(),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
