pub mod codec;
pub mod export;
pub mod sealed;

pub use codec::{deserialize, serialize, DecodedDeck, LandCounts};
pub use export::{save_decklist, ExportParams};
pub use sealed::{
    compare_by_collector_number, compare_for_deck, CardId, DeckCard, DeckMetrics, SealedPool,
};
