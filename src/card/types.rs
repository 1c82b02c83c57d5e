use serde::{Deserialize, Serialize};

/// Mana colors in Magic: The Gathering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaColor {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl ManaColor {
    /// All colors in canonical WUBRG order
    pub const WUBRG: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }

    /// Parse the single character representation
    pub fn from_char(c: char) -> Option<ManaColor> {
        match c {
            'W' => Some(ManaColor::White),
            'U' => Some(ManaColor::Blue),
            'B' => Some(ManaColor::Black),
            'R' => Some(ManaColor::Red),
            'G' => Some(ManaColor::Green),
            _ => None,
        }
    }

    /// Name of the basic land that produces this color
    pub fn basic_land_name(&self) -> &'static str {
        match self {
            ManaColor::White => "Plains",
            ManaColor::Blue => "Island",
            ManaColor::Black => "Swamp",
            ManaColor::Red => "Mountain",
            ManaColor::Green => "Forest",
        }
    }
}

/// Card rarities as printed in set data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

/// Structural classification of a card, computed once when a pool is built
/// instead of re-parsing the type line on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClass {
    BasicLand,
    NonbasicLand,
    Spell,
}

/// A single printing of a card as listed in a set file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub colors: Vec<ManaColor>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub collector_number: String,
    #[serde(default)]
    pub full_art: bool,
    #[serde(default)]
    pub promo: bool,
    #[serde(default)]
    pub layout: Option<String>,
}

impl Card {
    /// Classify by type line. Called once at pool-build time.
    pub fn classify(&self) -> CardClass {
        if self.type_line.contains("Basic Land") {
            CardClass::BasicLand
        } else if self.type_line.contains("Land") {
            CardClass::NonbasicLand
        } else {
            CardClass::Spell
        }
    }

    pub fn is_creature(&self) -> bool {
        self.type_line.contains("Creature")
    }

    /// Color of a basic land, recovered from its type line.
    /// Returns None for anything that is not a recognizable basic.
    pub fn basic_land_color(&self) -> Option<ManaColor> {
        ManaColor::WUBRG
            .into_iter()
            .find(|color| self.type_line.contains(color.basic_land_name()))
    }
}
