// core/src/models/recipe.rs

use super::user::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecipeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High,
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Priority::Low => "Low",
      Priority::Medium => "Medium",
      Priority::High => "High",
    })
  }
}

/// Production lifecycle of a recipe, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeStatus {
  Draft,
  #[serde(rename = "Pending Approval")]
  PendingApproval,
  Approved,
  #[serde(rename = "In Production")]
  InProduction,
  #[serde(rename = "Quality Check")]
  QualityCheck,
  Completed,
}

impl RecipeStatus {
  pub fn label(&self) -> &'static str {
    match self {
      RecipeStatus::Draft => "Draft",
      RecipeStatus::PendingApproval => "Pending Approval",
      RecipeStatus::Approved => "Approved",
      RecipeStatus::InProduction => "In Production",
      RecipeStatus::QualityCheck => "Quality Check",
      RecipeStatus::Completed => "Completed",
    }
  }

  /// Whether an Admin approval moves this status forward.
  pub fn awaits_approval(&self) -> bool {
    matches!(self, RecipeStatus::Draft | RecipeStatus::PendingApproval)
  }

  /// The stage that follows this one on the production floor.
  ///
  /// Nothing in the crate advances a recipe past `Approved` yet; production
  /// tracking hooks in here.
  pub fn next_stage(&self) -> Option<RecipeStatus> {
    match self {
      RecipeStatus::Draft => Some(RecipeStatus::PendingApproval),
      RecipeStatus::PendingApproval => Some(RecipeStatus::Approved),
      RecipeStatus::Approved => Some(RecipeStatus::InProduction),
      RecipeStatus::InProduction => Some(RecipeStatus::QualityCheck),
      RecipeStatus::QualityCheck => Some(RecipeStatus::Completed),
      RecipeStatus::Completed => None,
    }
  }
}

impl fmt::Display for RecipeStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
  pub id: RecipeId,
  pub name: String,
  pub materials: Vec<String>,
  pub steps: Vec<String>,
  pub estimated_time: String,
  pub priority: Priority,
  pub status: RecipeStatus,
  pub worker: Option<String>,
  pub creator_id: UserId,
}

/// Free-text recipe editor contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
  pub name: String,
  /// Comma separated.
  pub materials: String,
  /// One step per line.
  pub steps: String,
  pub estimated_time: String,
  pub priority: Priority,
}
