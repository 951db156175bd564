// core/src/models/wholesale.rs

use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A distributor's "Request Wholesale Catalog" submission, reviewed from the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WholesaleRequest {
  pub id: String,
  pub distributor_id: UserId,
  pub shop_name: String,
  pub requested_at: DateTime<Utc>,
}
