use crate::booster::pool::{CardPool, Category, PrintingGroup};
use crate::booster::rules::SlotRule;
use crate::card::Card;
use crate::rng::PackRng;

/// Weighted choice over (category, weight) pairs, walked in declaration
/// order. The last entry catches any floating-point remainder.
fn pick_weighted(options: &[(Category, f64)], rng: &mut PackRng) -> Option<Category> {
    if options.is_empty() {
        return None;
    }

    let total: f64 = options.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.next_f64() * total;

    for (category, weight) in options {
        if roll < *weight {
            return Some(*category);
        }
        roll -= weight;
    }
    options.last().map(|(category, _)| *category)
}

/// Uniform two-step pick: first a name group (equal probability per unique
/// name), then a printing within it (equal probability per variant). Always
/// consumes two draws once a non-empty group list is supplied.
fn pick_from_groups<'a>(groups: &'a [PrintingGroup], rng: &mut PackRng) -> Option<&'a Card> {
    if groups.is_empty() {
        return None;
    }
    let group = &groups[rng.index(groups.len())];
    let printing = rng.index(group.len());
    group.get(printing)
}

/// Generate one booster's worth of cards.
///
/// Each slot rule contributes `count` draws. A draw first narrows the rule's
/// weights to categories the pool actually stocks, picks one by weight, then
/// picks a card by group and printing. A draw with no stocked category
/// produces nothing and consumes no RNG values. Cards are cloned out of the
/// pool, never aliased.
pub fn generate_pack(pool: &CardPool, rules: &[SlotRule], rng: &mut PackRng) -> Vec<Card> {
    let mut pack = Vec::new();

    for rule in rules {
        for _ in 0..rule.count {
            let valid: Vec<(Category, f64)> = rule
                .weights
                .iter()
                .filter(|(category, _)| pool.has_cards(*category))
                .copied()
                .collect();

            if let Some(category) = pick_weighted(&valid, rng) {
                if let Some(card) = pick_from_groups(pool.groups(category), rng) {
                    pack.push(card.clone());
                }
            }
        }
    }

    pack
}
