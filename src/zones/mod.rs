//! Card zones: deck, hand, and field.
//!
//! ## Key Types
//!
//! - `Deck`: generated card list, never consumed by draws
//! - `Hand`: cards drawn for the current turn
//! - `Field`: last few played cards, FIFO
//!
//! The opponent has no zones of its own; it picks from a throwaway deck
//! every turn (`pick_opponent_card`).

pub mod deck;
pub mod field;
pub mod hand;

pub use deck::{pick_opponent_card, Deck};
pub use field::Field;
pub use hand::{draw_hand, Hand};
