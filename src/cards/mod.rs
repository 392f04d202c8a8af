//! Card system: attributes, card values, and the card factory.
//!
//! ## Key Types
//!
//! - `Element`, `Rarity`: the two rolled attributes, with display data
//! - `Card`, `Skill`, `CardId`: immutable card values
//! - `generate_card`: the card factory

pub mod attributes;
pub mod definition;
pub mod factory;

pub use attributes::{Element, Rarity};
pub use definition::{Card, CardId, Skill, SkillKind};
pub use factory::{card_rolls, generate_card};
