// core/src/models/user.rs

use crate::access::Role;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = String;

/// Denormalized counters shown on the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
  pub orders_count: u32,
  pub wishlist_count: u32,
  pub total_spent_cents: u64,
  /// Maker royalties credited from marketplace sales.
  pub total_earned_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: UserId,
  pub username: String,
  pub full_name: String,
  pub email: String,
  pub country: String,
  pub state: String,
  pub address: String,
  pub department: String,
  pub title: String,
  pub date_of_birth: Option<NaiveDate>,
  pub gender: String,
  pub role: Role,
  pub join_date: NaiveDate,
  pub stats: UserStats,
}

impl UserProfile {
  /// Profile used when someone enters through a portal without signing up first.
  pub fn for_portal(role: Role) -> Self {
    let username = role.as_str().to_lowercase();
    UserProfile {
      id: super::fresh_id(),
      full_name: format!("Zii {}", role),
      email: format!("{}@zii-empire.com", username),
      username,
      country: String::new(),
      state: String::new(),
      address: String::new(),
      department: String::new(),
      title: String::new(),
      date_of_birth: None,
      gender: String::new(),
      role,
      join_date: Utc::now().date_naive(),
      stats: UserStats::default(),
    }
  }

  pub fn apply(&mut self, update: ProfileUpdate) {
    self.full_name = update.full_name;
    self.email = update.email;
    self.country = update.country;
    self.address = update.address;
  }
}

/// Four-step signup form. Password fields are accepted but never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
  pub role: Role,
  pub full_name: String,
  pub username: String,
  pub email: String,
  pub date_of_birth: Option<NaiveDate>,
  pub gender: String,
  pub country: String,
  pub state: String,
  pub address: String,
  pub department: String,
  pub title: String,
  #[serde(skip_serializing)]
  pub password: String,
  #[serde(skip_serializing)]
  pub confirm_password: String,
}

impl Default for SignupForm {
  fn default() -> Self {
    SignupForm {
      role: Role::Customer,
      full_name: String::new(),
      username: String::new(),
      email: String::new(),
      date_of_birth: None,
      gender: "Male".to_string(),
      country: String::new(),
      state: String::new(),
      address: String::new(),
      department: String::new(),
      title: String::new(),
      password: String::new(),
      confirm_password: String::new(),
    }
  }
}

/// The fields the profile editor exposes. Role and username stay fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
  pub full_name: String,
  pub email: String,
  pub country: String,
  pub address: String,
}
