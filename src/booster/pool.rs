use crate::card::{Card, CardClass, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Draw categories a slot rule can put weight on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Land,
    Basic,
}

/// All printings of one card name, in set-file order
pub type PrintingGroup = Vec<Card>;

/// The cards available to the pack generator, grouped by name within each
/// category. Built once per session; draws never mutate it.
#[derive(Debug, Clone, Default)]
pub struct CardPool {
    common: Vec<PrintingGroup>,
    uncommon: Vec<PrintingGroup>,
    rare: Vec<PrintingGroup>,
    mythic: Vec<PrintingGroup>,
    land: Vec<PrintingGroup>,
    basic: Vec<PrintingGroup>,
}

impl CardPool {
    /// Build a pool from a set's card list.
    /// Promo printings and meld layouts never appear in boosters and are
    /// dropped here. Basics go to their own category, and common nonbasic
    /// lands fill the land slot category instead of the common one.
    pub fn build(cards: &[Card]) -> CardPool {
        let mut commons = Vec::new();
        let mut uncommons = Vec::new();
        let mut rares = Vec::new();
        let mut mythics = Vec::new();
        let mut lands = Vec::new();
        let mut basics = Vec::new();

        for card in cards {
            if card.promo {
                continue;
            }
            if card.layout.as_deref() == Some("meld") {
                continue;
            }

            match card.classify() {
                CardClass::BasicLand => basics.push(card.clone()),
                CardClass::NonbasicLand if card.rarity == Rarity::Common => {
                    lands.push(card.clone())
                }
                _ => match card.rarity {
                    Rarity::Common => commons.push(card.clone()),
                    Rarity::Uncommon => uncommons.push(card.clone()),
                    Rarity::Rare => rares.push(card.clone()),
                    Rarity::Mythic => mythics.push(card.clone()),
                },
            }
        }

        CardPool {
            common: group_by_name(commons),
            uncommon: group_by_name(uncommons),
            rare: group_by_name(rares),
            mythic: group_by_name(mythics),
            land: group_by_name(lands),
            basic: group_by_name(basics),
        }
    }

    /// Printing groups for one category
    pub fn groups(&self, category: Category) -> &[PrintingGroup] {
        match category {
            Category::Common => &self.common,
            Category::Uncommon => &self.uncommon,
            Category::Rare => &self.rare,
            Category::Mythic => &self.mythic,
            Category::Land => &self.land,
            Category::Basic => &self.basic,
        }
    }

    /// Whether a category has at least one group to draw from
    pub fn has_cards(&self, category: Category) -> bool {
        !self.groups(category).is_empty()
    }

    /// Printings of the named basic land, for the land station
    pub fn basic_group(&self, name: &str) -> Option<&PrintingGroup> {
        self.basic
            .iter()
            .find(|group| group.first().map(|c| c.name.as_str()) == Some(name))
    }
}

/// Group cards by name, preserving first-seen order of both names and
/// printings within a name
fn group_by_name(cards: Vec<Card>) -> Vec<PrintingGroup> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<PrintingGroup> = Vec::new();

    for card in cards {
        match positions.get(&card.name) {
            Some(&i) => groups[i].push(card),
            None => {
                positions.insert(card.name.clone(), groups.len());
                groups.push(vec![card]);
            }
        }
    }

    groups
}
