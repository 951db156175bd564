// src/lib.rs

//! Zii-Empire: the rules core of a fashion marketplace and production platform.
//!
//! The crate covers:
//!  - Role-gated navigation and actions (`access`), the single place role checks live.
//!  - Product and recipe approval workflows (`workflow`).
//!  - The session's cart, wishlist, checkout and maker royalties (`ledger`).
//!  - Boundaries to the generative design and market-intelligence services (`adapters`).
//!  - The AI design studio's one-request-at-a-time gate (`studio`).
//!  - An explicit application state and the `Session` facade a UI layer drives.

pub mod access;
pub mod adapters;
pub mod error;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod session;
pub mod state;
pub mod studio;
pub mod workflow;

// --- Re-exports for the Public API ---

pub use crate::access::{can_access, can_access_route, can_perform, Action, Role, Route, RouteDecision};
pub use crate::adapters::{DesignGenerator, Headline, ImageArtifact, MarketIntelligence};
pub use crate::error::{ZiiError, ZiiResult};
pub use crate::ledger::{Cart, CheckoutPolicy, PricingRules, Wishlist};
pub use crate::session::Session;
pub use crate::state::{AppState, SessionSettings, SharedState};
pub use crate::workflow::{ApprovalOutcome, ApprovalQueue};

/*
    Typical session:
    1. The shell builds `SessionSettings` from its config and an `AppState::seeded(settings)`.
    2. It wraps concrete `DesignGenerator` / `MarketIntelligence` adapters in `Arc`s and creates a `Session`.
    3. `session.load_logo().await` once at start, `session.market_briefing().await` for the dashboard.
    4. `session.log_in(role)`, then `session.navigate(route)` for every page change.
    5. Commerce and approvals go through the session methods; a `ZiiError` with
       `is_redirect()` is answered with navigation, anything else with a notice.
*/
