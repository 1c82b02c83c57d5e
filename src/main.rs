use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use mtg_sealed::booster::{
    draft_booster, generate_pack, load_rules_file, play_booster, CardPool, SlotRule,
};
use mtg_sealed::card::{CardSet, ManaColor, Rarity};
use mtg_sealed::deck::{
    compare_by_collector_number, compare_for_deck, deserialize, save_decklist, serialize, CardId,
    DeckCard, ExportParams, SealedPool,
};
use mtg_sealed::rng::PackRng;
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "mtg-sealed")]
#[command(about = "MTG booster and sealed pool simulator with shareable deck codes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open booster packs and print their contents
    Open {
        /// Set file (JSON card list)
        #[arg(short, long, default_value = "sets/demo.json")]
        set: String,

        /// Number of packs to open
        #[arg(short, long, default_value = "1")]
        packs: usize,

        /// Seed string (random if omitted)
        #[arg(long)]
        seed: Option<String>,

        /// Booster type: "draft" or "play"
        #[arg(short, long, default_value = "draft")]
        booster: String,

        /// Custom slot rules JSON file (overrides --booster)
        #[arg(short, long)]
        rules: Option<String>,
    },

    /// Generate an indexed sealed pool, optionally restoring a shared deck
    Sealed {
        /// Set file (JSON card list)
        #[arg(short, long, default_value = "sets/demo.json")]
        set: String,

        /// Number of packs in the pool
        #[arg(short, long, default_value = "6")]
        packs: usize,

        /// Seed string (random if omitted)
        #[arg(long)]
        seed: Option<String>,

        /// Booster type: "draft" or "play"
        #[arg(short, long, default_value = "draft")]
        booster: String,

        /// Custom slot rules JSON file (overrides --booster)
        #[arg(short, long)]
        rules: Option<String>,

        /// Deck code to restore onto the pool
        #[arg(short, long)]
        deck: Option<String>,

        /// Write the restored deck to a decklist file
        #[arg(short, long)]
        export: bool,
    },

    /// Build a deck code from pool indices and basic lands
    Encode {
        /// Set file (JSON card list)
        #[arg(short, long, default_value = "sets/demo.json")]
        set: String,

        /// Number of packs in the pool
        #[arg(short, long, default_value = "6")]
        packs: usize,

        /// Seed string the pool was generated from
        #[arg(long)]
        seed: String,

        /// Booster type: "draft" or "play"
        #[arg(short, long, default_value = "draft")]
        booster: String,

        /// Custom slot rules JSON file (overrides --booster)
        #[arg(short, long)]
        rules: Option<String>,

        /// Comma-separated pool indices, e.g. 0,2,5
        #[arg(long, default_value = "")]
        picks: String,

        /// Comma-separated basic land tokens, e.g. W3,B1
        #[arg(long, default_value = "")]
        lands: String,
    },

    /// Open many pools and report the rarity distribution
    Stats {
        /// Set file (JSON card list)
        #[arg(short, long, default_value = "sets/demo.json")]
        set: String,

        /// Packs per trial
        #[arg(short, long, default_value = "1")]
        packs: usize,

        /// Number of trials
        #[arg(short, long, default_value = "1000")]
        trials: usize,

        /// Base seed string (random if omitted)
        #[arg(long)]
        seed: Option<String>,

        /// Booster type: "draft" or "play"
        #[arg(short, long, default_value = "draft")]
        booster: String,

        /// Custom slot rules JSON file (overrides --booster)
        #[arg(short, long)]
        rules: Option<String>,
    },

    /// Restore a shared deck and deal a sample opening hand
    Draw {
        /// Set file (JSON card list)
        #[arg(short, long, default_value = "sets/demo.json")]
        set: String,

        /// Number of packs in the pool
        #[arg(short, long, default_value = "6")]
        packs: usize,

        /// Seed string the pool was generated from
        #[arg(long)]
        seed: String,

        /// Booster type: "draft" or "play"
        #[arg(short, long, default_value = "draft")]
        booster: String,

        /// Custom slot rules JSON file (overrides --booster)
        #[arg(short, long)]
        rules: Option<String>,

        /// Deck code to restore
        #[arg(short, long)]
        deck: String,

        /// Opening hand size
        #[arg(long, default_value = "7")]
        hand: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            set,
            packs,
            seed,
            booster,
            rules,
        } => {
            let set = load_set(&set);
            let rules = resolve_rules(&booster, rules.as_deref());
            run_open(&set, packs, &resolve_seed(seed), &rules);
        }
        Commands::Sealed {
            set,
            packs,
            seed,
            booster,
            rules,
            deck,
            export,
        } => {
            let set = load_set(&set);
            let rules = resolve_rules(&booster, rules.as_deref());
            run_sealed(&set, packs, &resolve_seed(seed), &rules, deck.as_deref(), export);
        }
        Commands::Encode {
            set,
            packs,
            seed,
            booster,
            rules,
            picks,
            lands,
        } => {
            let set = load_set(&set);
            let rules = resolve_rules(&booster, rules.as_deref());
            run_encode(&set, packs, &seed, &rules, &picks, &lands);
        }
        Commands::Stats {
            set,
            packs,
            trials,
            seed,
            booster,
            rules,
        } => {
            let set = load_set(&set);
            let rules = resolve_rules(&booster, rules.as_deref());
            run_stats(&set, packs, trials, &resolve_seed(seed), &rules);
        }
        Commands::Draw {
            set,
            packs,
            seed,
            booster,
            rules,
            deck,
            hand,
        } => {
            let set = load_set(&set);
            let rules = resolve_rules(&booster, rules.as_deref());
            run_draw(&set, packs, &seed, &rules, &deck, hand);
        }
    }
}

fn load_set(path: &str) -> CardSet {
    match CardSet::from_file(path) {
        Ok(set) => {
            eprintln!("✓ Loaded {} cards from {}", set.card_count(), path);
            set
        }
        Err(e) => {
            eprintln!("✗ Failed to load set '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn resolve_rules(booster: &str, rules_file: Option<&str>) -> Vec<SlotRule> {
    if let Some(path) = rules_file {
        match load_rules_file(path) {
            Ok(rules) => return rules,
            Err(e) => {
                eprintln!("✗ Failed to load rules file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }

    match booster {
        "draft" => draft_booster(),
        "play" => play_booster(),
        other => {
            eprintln!("✗ Unknown booster type '{}'. Use 'draft' or 'play'.", other);
            std::process::exit(1);
        }
    }
}

fn resolve_seed(seed: Option<String>) -> String {
    seed.unwrap_or_else(PackRng::generate_seed)
}

fn rarity_tag(rarity: Rarity) -> char {
    match rarity {
        Rarity::Common => 'C',
        Rarity::Uncommon => 'U',
        Rarity::Rare => 'R',
        Rarity::Mythic => 'M',
    }
}

fn run_open(set: &CardSet, packs: usize, seed: &str, rules: &[SlotRule]) {
    let pool = CardPool::build(set.cards());
    let mut rng = PackRng::from_seed_str(seed);

    println!("\n=== Booster Packs ===\n");
    println!("Seed: {}", seed);

    for pack_number in 1..=packs {
        let pack = generate_pack(&pool, rules, &mut rng);
        println!("\n--- Pack {} ({} cards) ---", pack_number, pack.len());
        for card in &pack {
            println!("  [{}] {}", rarity_tag(card.rarity), card.name);
        }
    }
}

fn run_sealed(
    set: &CardSet,
    packs: usize,
    seed: &str,
    rules: &[SlotRule],
    deck_code: Option<&str>,
    export: bool,
) {
    let pool = CardPool::build(set.cards());
    let mut rng = PackRng::from_seed_str(seed);
    let mut session = SealedPool::open(pool, rules, &mut rng, packs);

    println!("\n=== Sealed Pool ===\n");
    println!("Seed: {}", seed);
    println!("Packs: {}", packs);
    println!("Pool: {} cards", session.opened().len());

    match deck_code {
        Some(code) => {
            let decoded = deserialize(code, session.opened());
            session.restore(&decoded, &mut rng);

            let metrics = session.metrics();
            println!("\n=== Deck ({} cards) ===\n", metrics.total);

            let mut deck: Vec<&DeckCard> = session.deck().iter().collect();
            deck.sort_by(|a, b| compare_for_deck(&a.card, &b.card));
            for entry in deck {
                println!("  [{}] {}", rarity_tag(entry.card.rarity), entry.card.name);
            }

            println!(
                "\nCreatures: {}  Spells: {}  Lands: {}",
                metrics.creatures, metrics.spells, metrics.lands
            );
            let code = serialize(session.deck());
            println!("Deck code: {}", code);

            if export {
                let params = ExportParams {
                    seed,
                    deck_code: &code,
                    metrics,
                };
                match save_decklist(session.deck(), &params, None) {
                    Ok(filename) => println!("Deck saved to: {}", filename),
                    Err(e) => eprintln!("✗ Failed to save deck: {}", e),
                }
            }
        }
        None => {
            let mut cards: Vec<&DeckCard> = session.opened().iter().collect();
            cards.sort_by(|a, b| compare_by_collector_number(&a.card, &b.card));
            println!();
            for entry in cards {
                if let CardId::Pool(index) = entry.id {
                    println!(
                        "  [{:>3}] [{}] {}",
                        index,
                        rarity_tag(entry.card.rarity),
                        entry.card.name
                    );
                }
            }
        }
    }
}

fn run_encode(
    set: &CardSet,
    packs: usize,
    seed: &str,
    rules: &[SlotRule],
    picks: &str,
    lands: &str,
) {
    let pool = CardPool::build(set.cards());
    let mut rng = PackRng::from_seed_str(seed);
    let mut session = SealedPool::open(pool, rules, &mut rng, packs);
    let pool_size = session.opened().len();

    for token in picks.split(',').filter(|t| !t.is_empty()) {
        let index: usize = match token.trim().parse() {
            Ok(index) => index,
            Err(_) => {
                eprintln!("✗ '{}' is not a valid pool index", token);
                std::process::exit(1);
            }
        };
        if !session.move_to_deck(CardId::Pool(index)) {
            eprintln!("✗ Index {} is not in the pool (size {})", index, pool_size);
            std::process::exit(1);
        }
    }

    for token in lands.split(',').filter(|t| !t.is_empty()) {
        let token = token.trim();
        let mut chars = token.chars();
        let color = match chars.next().and_then(ManaColor::from_char) {
            Some(color) => color,
            None => {
                eprintln!("✗ '{}' is not a valid land token (use W3, U2, ...)", token);
                std::process::exit(1);
            }
        };
        let count: u32 = match chars.as_str().parse() {
            Ok(count) => count,
            Err(_) => {
                eprintln!("✗ '{}' is not a valid land token (use W3, U2, ...)", token);
                std::process::exit(1);
            }
        };
        for _ in 0..count {
            if !session.add_basic_land(color, &mut rng) {
                eprintln!("✗ The set has no {} to add", color.basic_land_name());
                std::process::exit(1);
            }
        }
    }

    let metrics = session.metrics();
    println!("\n=== Deck Code ===\n");
    println!("Seed: {}", seed);
    println!(
        "Deck: {} cards ({} from pool, {} basics)",
        metrics.total,
        metrics.total - metrics.lands,
        metrics.lands
    );
    println!("Code: {}", serialize(session.deck()));
}

fn run_stats(set: &CardSet, packs: usize, trials: usize, seed: &str, rules: &[SlotRule]) {
    let pool = CardPool::build(set.cards());

    println!("\n=== Pack Statistics ===\n");
    println!("Trials: {} ({} pack(s) each)", trials, packs);
    println!("Seed: {}", seed);
    println!();

    let start = std::time::Instant::now();
    let progress = ProgressBar::new(trials as u64);

    let tally = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = PackRng::from_seed_str(&format!("{}-{}", seed, i));
            let mut counts = [0u64; 4];
            for _ in 0..packs {
                for card in generate_pack(&pool, rules, &mut rng) {
                    counts[match card.rarity {
                        Rarity::Common => 0,
                        Rarity::Uncommon => 1,
                        Rarity::Rare => 2,
                        Rarity::Mythic => 3,
                    }] += 1;
                }
            }
            progress.inc(1);
            counts
        })
        .reduce(
            || [0u64; 4],
            |mut acc, counts| {
                for (slot, count) in acc.iter_mut().zip(counts) {
                    *slot += count;
                }
                acc
            },
        );
    progress.finish_and_clear();

    let elapsed = start.elapsed();
    let total: u64 = tally.iter().sum();

    println!("Cards opened: {}", total);
    println!(
        "Average per trial: {:.2}",
        total as f64 / trials as f64
    );
    println!();

    println!("Rarity distribution:");
    let labels = ["Common", "Uncommon", "Rare", "Mythic"];
    for (label, count) in labels.iter().zip(tally) {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:9} {:5.1}% {} ({})", label, pct, bar, count);
    }

    let top_slots = tally[2] + tally[3];
    if top_slots > 0 {
        println!(
            "\nMythic share of rare slots: {:.1}% (expected ~12.5%)",
            tally[3] as f64 / top_slots as f64 * 100.0
        );
    }

    println!(
        "\nCompleted in {:.2?} ({:.0} trials/sec)",
        elapsed,
        trials as f64 / elapsed.as_secs_f64()
    );
}

fn run_draw(
    set: &CardSet,
    packs: usize,
    seed: &str,
    rules: &[SlotRule],
    deck_code: &str,
    hand: usize,
) {
    let pool = CardPool::build(set.cards());
    let mut rng = PackRng::from_seed_str(seed);
    let mut session = SealedPool::open(pool, rules, &mut rng, packs);

    let decoded = deserialize(deck_code, session.opened());
    session.restore(&decoded, &mut rng);

    if session.deck().is_empty() {
        eprintln!("✗ Deck code produced an empty deck for this seed and set");
        std::process::exit(1);
    }

    let cards = session.draw_hand(hand, &mut rng);

    println!("\n=== Opening Hand ===\n");
    println!("Seed: {}", seed);
    println!("Deck: {} cards", session.deck().len());
    println!();
    for card in &cards {
        println!("  [{}] {}", rarity_tag(card.rarity), card.name);
    }
}
