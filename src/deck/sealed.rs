use crate::booster::{generate_pack, CardPool, SlotRule};
use crate::card::{Card, CardClass, ManaColor};
use crate::rng::PackRng;
use std::cmp::Ordering;

/// Identity of a card in a sealed session. Pool cards keep the index they
/// were opened at, which is what deck codes refer to; basics added from the
/// land station get a session-local nonce instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    Pool(usize),
    Land(u64),
}

/// A physical card in a sealed session, tagged with its identity
#[derive(Debug, Clone)]
pub struct DeckCard {
    pub id: CardId,
    pub card: Card,
}

/// Deck composition counters shown alongside the deck.
/// Creature lands count as creatures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeckMetrics {
    pub total: usize,
    pub creatures: usize,
    pub spells: usize,
    pub lands: usize,
}

/// A sealed-pool session: the indexed opened pool plus the deck under
/// construction. The opened list is fixed once generated; only the deck and
/// the remaining pool change.
pub struct SealedPool {
    pool: CardPool,
    opened: Vec<DeckCard>,
    available: Vec<DeckCard>,
    deck: Vec<DeckCard>,
    next_land_nonce: u64,
}

impl SealedPool {
    /// Open `packs` boosters from the pool and index every card in draw
    /// order
    pub fn open(pool: CardPool, rules: &[SlotRule], rng: &mut PackRng, packs: usize) -> SealedPool {
        let mut cards = Vec::new();
        for _ in 0..packs {
            cards.extend(generate_pack(&pool, rules, rng));
        }

        let opened: Vec<DeckCard> = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| DeckCard {
                id: CardId::Pool(i),
                card,
            })
            .collect();

        SealedPool {
            pool,
            available: opened.clone(),
            opened,
            deck: Vec::new(),
            next_land_nonce: 0,
        }
    }

    /// Every pool-indexed card opened this session, in index order
    pub fn opened(&self) -> &[DeckCard] {
        &self.opened
    }

    /// Opened cards not currently in the deck
    pub fn available(&self) -> &[DeckCard] {
        &self.available
    }

    pub fn deck(&self) -> &[DeckCard] {
        &self.deck
    }

    /// Move a card from the pool into the deck
    pub fn move_to_deck(&mut self, id: CardId) -> bool {
        match self.available.iter().position(|c| c.id == id) {
            Some(pos) => {
                let card = self.available.remove(pos);
                self.deck.push(card);
                true
            }
            None => false,
        }
    }

    /// Move a deck card back to the pool. User-added basics are deleted
    /// instead of returned; the land station can always mint more.
    pub fn move_to_pool(&mut self, id: CardId) -> bool {
        if let CardId::Land(_) = id {
            return self.remove_land(id);
        }
        match self.deck.iter().position(|c| c.id == id) {
            Some(pos) => {
                let card = self.deck.remove(pos);
                self.available.push(card);
                true
            }
            None => false,
        }
    }

    fn remove_land(&mut self, id: CardId) -> bool {
        let before = self.deck.len();
        self.deck.retain(|c| c.id != id);
        self.deck.len() < before
    }

    /// Add one basic land of the given color to the deck, preferring
    /// full-art printings. Returns false if the set has no such basic.
    pub fn add_basic_land(&mut self, color: ManaColor, rng: &mut PackRng) -> bool {
        let pick = match self.pool.basic_group(color.basic_land_name()) {
            Some(group) => {
                let full_arts: Vec<&Card> = group.iter().filter(|c| c.full_art).collect();
                if !full_arts.is_empty() {
                    full_arts[rng.index(full_arts.len())].clone()
                } else {
                    group[rng.index(group.len())].clone()
                }
            }
            None => return false,
        };

        let id = CardId::Land(self.next_land_nonce);
        self.next_land_nonce += 1;
        self.deck.push(DeckCard { id, card: pick });
        true
    }

    /// Apply a decoded deck code: move its pool cards into the deck and
    /// re-add its basic lands
    pub fn restore(&mut self, decoded: &super::codec::DecodedDeck, rng: &mut PackRng) {
        for entry in &decoded.deck_cards {
            self.move_to_deck(entry.id);
        }
        for color in ManaColor::WUBRG {
            for _ in 0..decoded.land_counts.get(color) {
                self.add_basic_land(color, rng);
            }
        }
    }

    pub fn metrics(&self) -> DeckMetrics {
        let mut metrics = DeckMetrics {
            total: self.deck.len(),
            ..DeckMetrics::default()
        };

        for entry in &self.deck {
            if entry.card.is_creature() {
                metrics.creatures += 1;
            } else if entry.card.classify() != CardClass::Spell {
                metrics.lands += 1;
            } else {
                metrics.spells += 1;
            }
        }

        metrics
    }

    /// Shuffle a copy of the deck and deal an opening hand
    pub fn draw_hand(&self, size: usize, rng: &mut PackRng) -> Vec<Card> {
        let mut library: Vec<Card> = self.deck.iter().map(|c| c.card.clone()).collect();
        rng.shuffle(&mut library);
        library.truncate(size);
        library
    }
}

fn type_priority(card: &Card) -> u8 {
    let type_line = &card.type_line;
    if type_line.contains("Creature") {
        1
    } else if type_line.contains("Sorcery") {
        2
    } else if type_line.contains("Instant") {
        3
    } else if type_line.contains("Enchantment") {
        4
    } else if type_line.contains("Artifact") {
        5
    } else if type_line.contains("Planeswalker") {
        6
    } else if type_line.contains("Land") {
        7
    } else {
        8
    }
}

fn land_sort_index(card: &Card) -> u8 {
    match card.basic_land_color() {
        Some(ManaColor::White) => 0,
        Some(ManaColor::Blue) => 1,
        Some(ManaColor::Black) => 2,
        Some(ManaColor::Red) => 3,
        Some(ManaColor::Green) => 4,
        None => 5,
    }
}

fn leading_number(value: &str) -> u32 {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Deck display order: type priority, WUBRG within lands, then mana value,
/// then name
pub fn compare_for_deck(a: &Card, b: &Card) -> Ordering {
    let priority_a = type_priority(a);
    let priority_b = type_priority(b);
    if priority_a != priority_b {
        return priority_a.cmp(&priority_b);
    }

    if priority_a == 7 {
        let land_a = land_sort_index(a);
        let land_b = land_sort_index(b);
        if land_a != land_b {
            return land_a.cmp(&land_b);
        }
    }

    a.cmc
        .partial_cmp(&b.cmc)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}

/// Pool display order: collector number, then name
pub fn compare_by_collector_number(a: &Card, b: &Card) -> Ordering {
    leading_number(&a.collector_number)
        .cmp(&leading_number(&b.collector_number))
        .then_with(|| a.name.cmp(&b.name))
}
