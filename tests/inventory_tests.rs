//! Inventory tests - item counts and the red-piece predicate

use blockgrid::core::inventory::{add_item, has_item, is_red_piece, remove_item};
use blockgrid::core::library::mint_piece;
use blockgrid::core::{Catalog, Inventory, PieceIdGenerator, Removal};
use blockgrid::types::{BlockColor, ItemKind};

const BOMB: &str = "bomb";

#[test]
fn test_remove_from_empty_is_unavailable() {
    assert_eq!(remove_item(&Inventory::new(), BOMB), Removal::Unavailable);
}

#[test]
fn test_remove_last_leaves_zero() {
    let inv: Inventory = [(BOMB, 1)].into_iter().collect();
    let expected: Inventory = [(BOMB, 0)].into_iter().collect();
    assert_eq!(remove_item(&inv, BOMB), Removal::Removed(expected));
    assert_eq!(inv.count(BOMB), 1);
}

#[test]
fn test_add_and_has() {
    let inv = add_item(&Inventory::new(), BOMB, 2);
    assert!(has_item(&inv, BOMB));
    assert!(!has_item(&inv, "shuffle"));
    assert_eq!(inv.count(BOMB), 2);
    assert_eq!(ItemKind::from_str(BOMB), Some(ItemKind::Bomb));
}

#[test]
fn test_red_piece_predicate() {
    let catalog = Catalog::build().unwrap();
    let entry = catalog.get("SQUARE_2_0").unwrap();
    let mut ids = PieceIdGenerator::new();

    assert!(is_red_piece(&mint_piece(entry, BlockColor::Red, &mut ids)));
    assert!(!is_red_piece(&mint_piece(entry, BlockColor::Orange, &mut ids)));
    assert!(!is_red_piece(&mint_piece(entry, BlockColor::RainbowRed, &mut ids)));
}

#[test]
fn test_json_round_trip_keeps_zero_counts() {
    let inv: Inventory = [(BOMB, 0)].into_iter().collect();
    let json = serde_json::to_string(&inv).unwrap();
    assert_eq!(json, r#"{"bomb":0}"#);
    assert_eq!(serde_json::from_str::<Inventory>(&json).unwrap(), inv);
}
