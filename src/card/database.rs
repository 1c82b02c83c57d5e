use crate::card::types::Card;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A set's card list loaded from a JSON file.
/// File order is preserved; pool indices depend on it.
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Load a set from a JSON array of card records
    pub fn from_file(path: &str) -> Result<Self, SetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a set from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SetError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Ok(CardSet { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
