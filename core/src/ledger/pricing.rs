// core/src/ledger/pricing.rs

use crate::models::{Order, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

const BPS_DENOMINATOR: u128 = 10_000;

/// `amount_cents * bps / 10_000`, widened so large totals cannot overflow.
fn basis_points_of(amount_cents: u64, bps: u32) -> u64 {
  let share = u128::from(amount_cents) * u128::from(bps) / BPS_DENOMINATOR;
  u64::try_from(share).unwrap_or(u64::MAX)
}

/// Financial settings from the admin console, in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
  pub maker_royalty_bps: u32,
  pub platform_fee_bps: u32,
}

impl Default for PricingRules {
  fn default() -> Self {
    PricingRules {
      maker_royalty_bps: 3_000,
      platform_fee_bps: 1_250,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSplit {
  pub maker_royalty_cents: u64,
  pub platform_fee_cents: u64,
  /// Whatever is left after royalty and fee. Rounding residue lands here.
  pub remainder_cents: u64,
}

impl PricingRules {
  pub fn split(&self, amount_cents: u64) -> RevenueSplit {
    let maker_royalty_cents = basis_points_of(amount_cents, self.maker_royalty_bps);
    let platform_fee_cents = basis_points_of(amount_cents, self.platform_fee_bps);
    RevenueSplit {
      maker_royalty_cents,
      platform_fee_cents,
      remainder_cents: amount_cents.saturating_sub(maker_royalty_cents.saturating_add(platform_fee_cents)),
    }
  }

  /// Royalty owed to each product creator for `order`.
  pub fn royalties(&self, order: &Order) -> HashMap<UserId, u64> {
    let mut owed: HashMap<UserId, u64> = HashMap::new();
    for line in &order.items {
      let royalty = self.split(line.line_total_cents()).maker_royalty_cents;
      let entry = owed.entry(line.product.creator_id.clone()).or_default();
      *entry = entry.saturating_add(royalty);
    }
    owed
  }
}

/// Lifetime royalties per creator.
#[derive(Debug, Clone, Default)]
pub struct RoyaltyLedger {
  earned: HashMap<UserId, u64>,
}

impl RoyaltyLedger {
  pub fn credit_order(&mut self, order: &Order, rules: &PricingRules) {
    for (creator_id, royalty) in rules.royalties(order) {
      debug!(%creator_id, royalty, order_id = %order.id, "Crediting royalty.");
      let earned = self.earned.entry(creator_id).or_default();
      *earned = earned.saturating_add(royalty);
    }
  }

  pub fn earned_by(&self, creator_id: &str) -> u64 {
    self.earned.get(creator_id).copied().unwrap_or(0)
  }
}
