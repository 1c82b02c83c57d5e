pub mod database;
pub mod types;

pub use database::{CardSet, SetError};
pub use types::{Card, CardClass, ManaColor, Rarity};
