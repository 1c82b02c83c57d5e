//! Integration tests for the sealed simulator
//! Runs the full open -> pick -> share -> restore flow against the bundled
//! demo set with known seeds

use crate::booster::{draft_booster, generate_pack, play_booster, CardPool};
use crate::card::{CardSet, ManaColor};
use crate::deck::{deserialize, serialize, CardId, SealedPool};
use crate::rng::PackRng;

fn demo_pool() -> CardPool {
    let set = CardSet::from_file("sets/demo.json").expect("Failed to load demo set");
    CardPool::build(set.cards())
}

#[test]
fn test_draft_pack_from_demo_set_is_full() {
    let pool = demo_pool();
    let mut rng = PackRng::from_seed_str("full-pack");

    let pack = generate_pack(&pool, &draft_booster(), &mut rng);
    assert_eq!(pack.len(), 14, "Every draft slot should fill from the demo set");
}

#[test]
fn test_play_booster_from_demo_set_is_full() {
    let pool = demo_pool();
    let mut rng = PackRng::from_seed_str("play-pack");

    let pack = generate_pack(&pool, &play_booster(), &mut rng);
    assert_eq!(pack.len(), 14, "Every play booster slot should fill from the demo set");
}

#[test]
fn test_same_seed_reproduces_sealed_pool() {
    let mut rng1 = PackRng::from_seed_str("sealed-replay");
    let mut rng2 = PackRng::from_seed_str("sealed-replay");

    let session1 = SealedPool::open(demo_pool(), &draft_booster(), &mut rng1, 6);
    let session2 = SealedPool::open(demo_pool(), &draft_booster(), &mut rng2, 6);

    assert_eq!(session1.opened().len(), 84);
    let names1: Vec<&str> = session1.opened().iter().map(|c| c.card.name.as_str()).collect();
    let names2: Vec<&str> = session2.opened().iter().map(|c| c.card.name.as_str()).collect();
    assert_eq!(names1, names2, "Same seed should open the same pool");
}

#[test]
fn test_different_seeds_open_different_pools() {
    let mut rng1 = PackRng::from_seed_str("seed-one");
    let mut rng2 = PackRng::from_seed_str("seed-two");

    let session1 = SealedPool::open(demo_pool(), &draft_booster(), &mut rng1, 6);
    let session2 = SealedPool::open(demo_pool(), &draft_booster(), &mut rng2, 6);

    let names1: Vec<&str> = session1.opened().iter().map(|c| c.card.name.as_str()).collect();
    let names2: Vec<&str> = session2.opened().iter().map(|c| c.card.name.as_str()).collect();
    assert_ne!(names1, names2, "Different seeds should very likely differ");
}

#[test]
fn test_share_and_restore_round_trip() {
    let seed = "share-flow";

    // First session: open, pick, add lands, share
    let mut rng = PackRng::from_seed_str(seed);
    let mut session = SealedPool::open(demo_pool(), &draft_booster(), &mut rng, 6);

    for index in [0, 2, 5, 11, 23] {
        assert!(session.move_to_deck(CardId::Pool(index)));
    }
    let mut land_rng = PackRng::new(77);
    for _ in 0..2 {
        assert!(session.add_basic_land(ManaColor::White, &mut land_rng));
    }
    assert!(session.add_basic_land(ManaColor::Green, &mut land_rng));

    let picked_names: Vec<String> = session
        .deck()
        .iter()
        .filter(|c| matches!(c.id, CardId::Pool(_)))
        .map(|c| c.card.name.clone())
        .collect();
    let code = serialize(session.deck());
    assert!(!code.is_empty());

    // Second session: regenerate the pool from the same seed, restore
    let mut rng2 = PackRng::from_seed_str(seed);
    let mut restored = SealedPool::open(demo_pool(), &draft_booster(), &mut rng2, 6);
    let decoded = deserialize(&code, restored.opened());
    restored.restore(&decoded, &mut land_rng);

    let restored_names: Vec<String> = restored
        .deck()
        .iter()
        .filter(|c| matches!(c.id, CardId::Pool(_)))
        .map(|c| c.card.name.clone())
        .collect();
    assert_eq!(restored_names, picked_names);

    let metrics = restored.metrics();
    assert_eq!(metrics.total, 8);
    assert_eq!(metrics.lands, 3, "W2 and G1 should come back as three basics");

    // Re-sharing the restored deck reproduces the code
    assert_eq!(serialize(restored.deck()), code);
}

#[test]
fn test_deck_code_survives_pool_drift() {
    let mut rng = PackRng::from_seed_str("drift-a");
    let mut session = SealedPool::open(demo_pool(), &draft_booster(), &mut rng, 6);
    for index in [10, 40, 80] {
        assert!(session.move_to_deck(CardId::Pool(index)));
    }
    let code = serialize(session.deck());

    // A one-pack pool from another seed has far fewer indices
    let mut other_rng = PackRng::from_seed_str("drift-b");
    let small = SealedPool::open(demo_pool(), &draft_booster(), &mut other_rng, 1);
    let decoded = deserialize(&code, small.opened());

    assert!(
        decoded.deck_cards.len() < 3,
        "Indices beyond the smaller pool must be dropped, not fail"
    );
    for entry in &decoded.deck_cards {
        assert!(matches!(entry.id, CardId::Pool(i) if i < small.opened().len()));
    }
}

#[test]
fn test_deck_codes_match_wire_format() {
    let mut rng = PackRng::from_seed_str("wire");
    let mut session = SealedPool::open(demo_pool(), &draft_booster(), &mut rng, 6);
    for index in [3, 17, 42, 61] {
        session.move_to_deck(CardId::Pool(index));
    }
    let mut land_rng = PackRng::new(5);
    session.add_basic_land(ManaColor::Red, &mut land_rng);

    let code = serialize(session.deck());
    let mut segments = code.split('.');
    let mask = segments.next().expect("Mask segment");
    assert!(!mask.is_empty());
    assert!(mask
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    for token in segments {
        let mut chars = token.chars();
        assert!(matches!(chars.next(), Some('W' | 'U' | 'B' | 'R' | 'G')));
        assert!(chars.as_str().parse::<u32>().is_ok());
    }
}

#[test]
fn test_custom_rules_file_round_trip() {
    let rules = play_booster();
    let json = serde_json::to_string_pretty(&rules).expect("Should serialize rules");

    let path = std::env::temp_dir().join("mtg-sealed-rules-test.json");
    std::fs::write(&path, json).expect("Should write rules file");

    let loaded = crate::booster::load_rules_file(&path.to_string_lossy())
        .expect("Should load rules file");
    assert_eq!(loaded.len(), rules.len());

    let mut rng1 = PackRng::from_seed_str("rules-file");
    let mut rng2 = PackRng::from_seed_str("rules-file");
    let pool = demo_pool();
    let from_builtin: Vec<String> = generate_pack(&pool, &rules, &mut rng1)
        .into_iter()
        .map(|c| c.name)
        .collect();
    let from_file: Vec<String> = generate_pack(&pool, &loaded, &mut rng2)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(from_builtin, from_file, "Loaded rules should behave identically");

    let _ = std::fs::remove_file(&path);
}
