// core/src/workflow/recipes.rs

use super::ApprovalOutcome;
use crate::access::{self, Action, Role};
use crate::error::{ZiiError, ZiiResult};
use crate::models::{fresh_id, Recipe, RecipeDraft, RecipeStatus};
use tracing::{debug, info, instrument, warn};

/// Splits the comma separated materials field. Entries are trimmed and empties dropped.
pub fn parse_materials(text: &str) -> Vec<String> {
  text
    .split(',')
    .map(str::trim)
    .filter(|m| !m.is_empty())
    .map(str::to_string)
    .collect()
}

/// One step per line; blank lines are discarded.
pub fn parse_steps(text: &str) -> Vec<String> {
  text
    .lines()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
  recipes: Vec<Recipe>,
}

impl RecipeBook {
  pub fn new(recipes: Vec<Recipe>) -> Self {
    RecipeBook { recipes }
  }

  pub fn len(&self) -> usize {
    self.recipes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.recipes.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<&Recipe> {
    self.recipes.iter().find(|r| r.id == id)
  }

  /// Creates a recipe in `Pending Approval`. An empty name is rejected and nothing is stored.
  #[instrument(name = "recipes::submit", skip(self, draft), fields(name = %draft.name), err(Display))]
  pub fn submit(&mut self, role: Role, creator_id: &str, draft: RecipeDraft) -> ZiiResult<Recipe> {
    access::require(role, Action::CreateRecipe)?;

    let name = draft.name.trim();
    if name.is_empty() {
      warn!("Recipe submission rejected: name is empty.");
      return Err(ZiiError::Validation("Recipe name cannot be empty.".to_string()));
    }

    let recipe = Recipe {
      id: fresh_id(),
      name: name.to_string(),
      materials: parse_materials(&draft.materials),
      steps: parse_steps(&draft.steps),
      estimated_time: draft.estimated_time,
      priority: draft.priority,
      status: RecipeStatus::PendingApproval,
      worker: None,
      creator_id: creator_id.to_string(),
    };
    info!(recipe_id = %recipe.id, materials = recipe.materials.len(), steps = recipe.steps.len(), "Recipe submitted for approval.");
    self.recipes.push(recipe.clone());
    Ok(recipe)
  }

  /// Moves a `Draft` or `Pending Approval` recipe to `Approved`; later statuses are left alone.
  #[instrument(name = "recipes::approve", skip(self), err(Display))]
  pub fn approve(&mut self, role: Role, id: &str) -> ZiiResult<ApprovalOutcome> {
    access::require(role, Action::ApproveRecipe)?;

    let recipe = self
      .recipes
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or_else(|| ZiiError::not_found("Recipe", id))?;

    if !recipe.status.awaits_approval() {
      debug!(status = %recipe.status, "Recipe is past approval, nothing to do.");
      return Ok(ApprovalOutcome::Unchanged);
    }
    recipe.status = RecipeStatus::Approved;
    info!(recipe = %recipe.name, "Recipe approved.");
    Ok(ApprovalOutcome::Approved)
  }

  /// Recipes `viewer` may see on the production board.
  ///
  /// Makers and Admin see every status. Workers and Distributors see only
  /// approved recipes, and Customers see nothing.
  pub fn visible_to(&self, viewer: Role) -> Vec<&Recipe> {
    self
      .recipes
      .iter()
      .filter(|r| match viewer {
        Role::Admin | Role::Maker => true,
        Role::Worker | Role::Distributor => r.status == RecipeStatus::Approved,
        Role::Customer => false,
      })
      .collect()
  }

  pub fn pending(&self) -> Vec<&Recipe> {
    self.recipes.iter().filter(|r| r.status.awaits_approval()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn materials_are_trimmed_and_empties_dropped() {
    assert_eq!(parse_materials("Silk, Gold Thread , Zippers"), vec!["Silk", "Gold Thread", "Zippers"]);
    assert_eq!(parse_materials(" , Cotton,,"), vec!["Cotton"]);
    assert!(parse_materials("").is_empty());
  }

  #[test]
  fn blank_step_lines_are_discarded() {
    let steps = parse_steps("Cut the pattern\n\n  \nStitch the hem\r\nPress");
    assert_eq!(steps, vec!["Cut the pattern", "Stitch the hem", "Press"]);
  }

  #[test]
  fn approve_moves_draft_straight_to_approved() {
    let mut book = RecipeBook::new(vec![Recipe {
      id: "R9".to_string(),
      name: "Yoruba Gown".to_string(),
      materials: vec![],
      steps: vec![],
      estimated_time: String::new(),
      priority: Default::default(),
      status: RecipeStatus::Draft,
      worker: None,
      creator_id: "m-1".to_string(),
    }]);
    assert_eq!(book.approve(Role::Admin, "R9").unwrap(), ApprovalOutcome::Approved);
    assert_eq!(book.get("R9").unwrap().status, RecipeStatus::Approved);
  }

  #[test]
  fn workers_cannot_submit_recipes() {
    let mut book = RecipeBook::default();
    let draft = RecipeDraft {
      name: "Wrap".to_string(),
      ..Default::default()
    };
    assert!(matches!(
      book.submit(Role::Worker, "w-1", draft),
      Err(ZiiError::PermissionDenied { .. })
    ));
    assert!(book.is_empty());
  }
}
