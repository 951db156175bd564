// core/src/studio.rs

//! AI design studio state: the single in-flight gate and the session's creations.
//!
//! A generation is split into [`DesignStudio::begin`] and [`DesignStudio::settle`]
//! so the caller can release the state lock while the adapter call is awaited.

use crate::adapters::ImageArtifact;
use crate::error::{ZiiError, ZiiResult};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creation {
  pub image: ImageArtifact,
  pub category: String,
  pub prompt: String,
}

/// A generation that passed the gate and is waiting on the adapter.
#[derive(Debug, Clone)]
pub struct PendingGeneration {
  pub prompt: String,
  pub category: String,
}

#[derive(Debug, Clone, Default)]
pub struct DesignStudio {
  in_flight: bool,
  creations: Vec<Creation>,
}

impl DesignStudio {
  pub fn is_generating(&self) -> bool {
    self.in_flight
  }

  /// Newest first.
  pub fn creations(&self) -> &[Creation] {
    &self.creations
  }

  /// Claims the studio for one generation request.
  pub fn begin(&mut self, prompt: &str, category: &str) -> ZiiResult<PendingGeneration> {
    if prompt.trim().is_empty() {
      return Err(ZiiError::Validation("Describe the design before generating.".to_string()));
    }
    if self.in_flight {
      debug!("Generation refused: another request is outstanding.");
      return Err(ZiiError::GenerationInFlight);
    }
    self.in_flight = true;
    Ok(PendingGeneration {
      prompt: prompt.to_string(),
      category: category.to_string(),
    })
  }

  /// Releases the gate for a generation that will never settle.
  pub fn abandon(&mut self) {
    if self.in_flight {
      debug!("Generation abandoned before it settled.");
      self.in_flight = false;
    }
  }

  /// Releases the gate and records the outcome. Failures are passed back unchanged.
  pub fn settle(
    &mut self,
    pending: PendingGeneration,
    outcome: ZiiResult<Option<ImageArtifact>>,
  ) -> ZiiResult<Option<Creation>> {
    self.in_flight = false;
    match outcome? {
      Some(image) => {
        let creation = Creation {
          image,
          category: pending.category,
          prompt: pending.prompt,
        };
        self.creations.insert(0, creation.clone());
        Ok(Some(creation))
      }
      None => {
        warn!("Design service returned no image.");
        Ok(None)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_begin_is_refused_until_settled() {
    let mut studio = DesignStudio::default();
    let pending = studio.begin("gown", "Modern").unwrap();
    assert!(matches!(studio.begin("suit", "Western"), Err(ZiiError::GenerationInFlight)));
    studio.settle(pending, Ok(None)).unwrap();
    assert!(!studio.is_generating());
    assert!(studio.begin("suit", "Western").is_ok());
  }

  #[test]
  fn failures_release_the_gate() {
    let mut studio = DesignStudio::default();
    let pending = studio.begin("gown", "Modern").unwrap();
    let err = studio
      .settle(pending, Err(ZiiError::external("design", true, anyhow::anyhow!("boom"))))
      .unwrap_err();
    assert!(err.is_retryable());
    assert!(!studio.is_generating());
    assert!(studio.creations().is_empty());
  }

  #[test]
  fn abandoned_generation_reopens_the_studio() {
    let mut studio = DesignStudio::default();
    let _pending = studio.begin("gown", "Modern").unwrap();
    studio.abandon();
    assert!(!studio.is_generating());
    assert!(studio.begin("suit", "Western").is_ok());
    assert!(studio.creations().is_empty());
  }

  #[test]
  fn creations_are_newest_first() {
    let mut studio = DesignStudio::default();
    for n in ["one", "two"] {
      let pending = studio.begin(n, "Modern").unwrap();
      studio
        .settle(pending, Ok(Some(ImageArtifact(format!("img-{}", n)))))
        .unwrap();
    }
    assert_eq!(studio.creations()[0].prompt, "two");
    assert_eq!(studio.creations()[1].prompt, "one");
  }
}
