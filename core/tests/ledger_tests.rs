// tests/ledger_tests.rs
mod common;
use common::*;
use zii_empire::ledger::{place_order, Cart, CheckoutPolicy, Wishlist};
use zii_empire::models::OrderStatus;
use zii_empire::ZiiError;

#[test]
fn test_same_product_twice_merges_into_one_line() {
  let cart = Cart::new().with_added(&product("1", 120)).with_added(&product("1", 120));
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.items()[0].quantity, 2);
}

#[test]
fn test_add_existing_line_scenario() {
  let mut cart = Cart::from_lines(vec![line("1", 120, 1)]);
  cart.add(&product("1", 120));
  assert_eq!(cart.items(), &[line("1", 120, 2)]);
  assert_eq!(cart.total_cents(), 24_000);
}

#[test]
fn test_total_is_order_independent() {
  let lines = vec![line("1", 120, 2), line("2", 250, 1), line("3", 340, 3), line("4", 580, 1)];
  let expected = Cart::from_lines(lines.clone()).total_cents();
  assert_eq!(expected, 12_000 * 2 + 25_000 + 34_000 * 3 + 58_000);

  let mut rotated = lines.clone();
  for _ in 0..lines.len() {
    rotated.rotate_left(1);
    assert_eq!(Cart::from_lines(rotated.clone()).total_cents(), expected);
  }
  let mut reversed = lines;
  reversed.reverse();
  assert_eq!(Cart::from_lines(reversed).total_cents(), expected);
  assert_eq!(Cart::new().total_cents(), 0);
}

#[test]
fn test_wishlist_toggle_is_its_own_inverse() {
  let mut wishlist = Wishlist::new();
  wishlist.toggle("2");
  let before = wishlist.clone();

  assert!(wishlist.toggle("7"));
  assert!(!wishlist.toggle("7"));
  assert_eq!(wishlist, before);

  assert!(!wishlist.toggle("2"));
  assert!(wishlist.is_empty());
}

#[test]
fn test_place_order_snapshots_and_clears_cart() {
  setup_tracing();
  let mut cart = Cart::from_lines(vec![line("1", 120, 2)]);
  let order = place_order(&mut cart, "Card", "12 Marina Road, Lagos", CheckoutPolicy::RejectEmpty).unwrap();

  assert_eq!(order.total_cents, 24_000);
  assert_eq!(order.status, OrderStatus::Processing);
  assert_eq!(order.payment_method, "Card");
  assert_eq!(order.items, vec![line("1", 120, 2)]);
  assert!(cart.is_empty());
}

#[test]
fn test_order_total_is_frozen_at_creation() {
  let mut cart = Cart::from_lines(vec![line("1", 120, 1)]);
  let mut order = place_order(&mut cart, "Card", "", CheckoutPolicy::RejectEmpty).unwrap();
  order.items[0].product.price_cents = 1;
  assert_eq!(order.total_cents, 12_000);
}

#[test]
fn test_empty_checkout_follows_policy() {
  setup_tracing();
  let mut cart = Cart::new();
  let err = place_order(&mut cart, "Card", "", CheckoutPolicy::RejectEmpty).unwrap_err();
  assert!(matches!(err, ZiiError::Validation(_)));

  let order = place_order(&mut cart, "Card", "", CheckoutPolicy::AllowEmpty).unwrap();
  assert_eq!(order.total_cents, 0);
  assert!(order.items.is_empty());
}

#[test]
fn test_order_ids_are_unique() {
  let mut first = Cart::from_lines(vec![line("1", 120, 1)]);
  let mut second = Cart::from_lines(vec![line("1", 120, 1)]);
  let a = place_order(&mut first, "Card", "", CheckoutPolicy::RejectEmpty).unwrap();
  let b = place_order(&mut second, "Card", "", CheckoutPolicy::RejectEmpty).unwrap();
  assert_ne!(a.id, b.id);
}
