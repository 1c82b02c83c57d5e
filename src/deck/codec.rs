use crate::card::ManaColor;
use crate::deck::sealed::{CardId, DeckCard};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Basic-land counts carried in a deck code, in W,U,B,R,G order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LandCounts {
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
}

impl LandCounts {
    pub fn get(&self, color: ManaColor) -> u32 {
        match color {
            ManaColor::White => self.white,
            ManaColor::Blue => self.blue,
            ManaColor::Black => self.black,
            ManaColor::Red => self.red,
            ManaColor::Green => self.green,
        }
    }

    pub fn set(&mut self, color: ManaColor, count: u32) {
        match color {
            ManaColor::White => self.white = count,
            ManaColor::Blue => self.blue = count,
            ManaColor::Black => self.black = count,
            ManaColor::Red => self.red = count,
            ManaColor::Green => self.green = count,
        }
    }

    pub fn is_empty(&self) -> bool {
        ManaColor::WUBRG.into_iter().all(|color| self.get(color) == 0)
    }

    pub fn total(&self) -> u32 {
        ManaColor::WUBRG.into_iter().map(|color| self.get(color)).sum()
    }
}

/// Result of decoding a deck code against a pool
#[derive(Debug, Clone, Default)]
pub struct DecodedDeck {
    pub deck_cards: Vec<DeckCard>,
    pub land_counts: LandCounts,
}

/// Encode a deck as `<base64url bitmask>[.<Color><count>]*`.
///
/// Bit `i` of the mask marks pool index `i` (LSB-first within each byte);
/// the mask spans exactly `ceil((max_index+1)/8)` bytes. Basics are folded
/// into per-color counts recovered from their type lines. A deck with no
/// pool cards gets an empty mask segment, and a fully empty deck encodes as
/// the empty string.
pub fn serialize(deck: &[DeckCard]) -> String {
    let mut indices = Vec::new();
    let mut lands = LandCounts::default();

    for entry in deck {
        match entry.id {
            CardId::Pool(index) => indices.push(index),
            CardId::Land(_) => {
                if let Some(color) = entry.card.basic_land_color() {
                    lands.set(color, lands.get(color) + 1);
                }
            }
        }
    }

    if indices.is_empty() && lands.is_empty() {
        return String::new();
    }

    let mut encoded = String::new();
    if let Some(max_index) = indices.iter().copied().max() {
        let mut bytes = vec![0u8; max_index / 8 + 1];
        for index in indices {
            bytes[index / 8] |= 1 << (index % 8);
        }
        encoded.push_str(&URL_SAFE_NO_PAD.encode(&bytes));
    }

    for color in ManaColor::WUBRG {
        let count = lands.get(color);
        if count > 0 {
            encoded.push('.');
            encoded.push(color.to_char());
            encoded.push_str(&count.to_string());
        }
    }

    encoded
}

/// Decode a deck code against the indexed pool.
///
/// Never fails: an unreadable mask yields no cards, a set bit with no
/// matching pool index is skipped (the pool may have been regenerated
/// differently), and malformed land tokens leave that color at zero.
pub fn deserialize(encoded: &str, pool: &[DeckCard]) -> DecodedDeck {
    let mut decoded = DecodedDeck::default();
    if encoded.is_empty() {
        return decoded;
    }

    let mut segments = encoded.split('.');
    let bitmask = segments.next().unwrap_or("");

    if !bitmask.is_empty() {
        if let Ok(bytes) = URL_SAFE_NO_PAD.decode(bitmask) {
            for i in 0..bytes.len() * 8 {
                if bytes[i / 8] & (1 << (i % 8)) != 0 {
                    let id = CardId::Pool(i);
                    if let Some(entry) = pool.iter().find(|c| c.id == id) {
                        decoded.deck_cards.push(entry.clone());
                    }
                }
            }
        }
    }

    for token in segments {
        let mut chars = token.chars();
        let color = match chars.next().and_then(ManaColor::from_char) {
            Some(color) => color,
            None => continue,
        };
        if let Ok(count) = chars.as_str().parse::<u32>() {
            decoded.land_counts.set(color, count);
        }
    }

    decoded
}
