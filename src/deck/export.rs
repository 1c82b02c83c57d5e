use crate::deck::sealed::{compare_for_deck, DeckCard, DeckMetrics};
use chrono::Local;

/// Metadata written into the decklist header
pub struct ExportParams<'a> {
    pub seed: &'a str,
    pub deck_code: &'a str,
    pub metrics: DeckMetrics,
}

/// Write the deck as a plain-text decklist (`N Card Name` per line), in deck
/// display order with duplicate names collapsed. Returns the file name
/// written; a timestamped name is generated when none is given.
pub fn save_decklist(
    deck: &[DeckCard],
    params: &ExportParams,
    path: Option<&str>,
) -> std::io::Result<String> {
    let filename = match path {
        Some(p) => p.to_string(),
        None => format!("deck-{}.txt", Local::now().format("%Y%m%d-%H%M%S")),
    };

    let mut content = String::new();
    content.push_str(&format!(
        "# Sealed deck exported {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    content.push_str(&format!("# Seed: {}\n", params.seed));
    if !params.deck_code.is_empty() {
        content.push_str(&format!("# Deck code: {}\n", params.deck_code));
    }
    let metrics = params.metrics;
    content.push_str(&format!(
        "# Cards: {} ({} creatures, {} spells, {} lands)\n\n",
        metrics.total, metrics.creatures, metrics.spells, metrics.lands
    ));

    for (name, count) in collapse_names(deck) {
        content.push_str(&format!("{} {}\n", count, name));
    }

    std::fs::write(&filename, content)?;
    Ok(filename)
}

/// Sort by deck display order, then fold runs of the same name into counts
fn collapse_names(deck: &[DeckCard]) -> Vec<(String, usize)> {
    let mut sorted: Vec<&DeckCard> = deck.iter().collect();
    sorted.sort_by(|a, b| compare_for_deck(&a.card, &b.card));

    let mut lines: Vec<(String, usize)> = Vec::new();
    for entry in sorted {
        match lines.last_mut() {
            Some((name, count)) if *name == entry.card.name => *count += 1,
            _ => lines.push((entry.card.name.clone(), 1)),
        }
    }
    lines
}
