// core/src/ledger/mod.rs

//! In-memory commerce for the active session: cart, wishlist, checkout and the
//! revenue split that credits makers.

pub mod cart;
pub mod checkout;
pub mod pricing;
pub mod wishlist;

pub use cart::Cart;
pub use checkout::{place_order, CheckoutPolicy};
pub use pricing::{PricingRules, RevenueSplit, RoyaltyLedger};
pub use wishlist::Wishlist;
