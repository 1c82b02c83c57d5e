use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mtg_sealed::booster::{draft_booster, generate_pack, CardPool};
use mtg_sealed::card::CardSet;
use mtg_sealed::deck::{deserialize, serialize, SealedPool};
use mtg_sealed::rng::PackRng;

fn benchmark_single_pack(c: &mut Criterion) {
    let set = CardSet::from_file("sets/demo.json").expect("Failed to load demo set");
    let pool = CardPool::build(set.cards());
    let rules = draft_booster();

    c.bench_function("single_pack_seed_12345", |b| {
        b.iter(|| {
            let mut rng = PackRng::new(black_box(12345));
            generate_pack(black_box(&pool), black_box(&rules), &mut rng)
        })
    });
}

fn benchmark_sealed_pool(c: &mut Criterion) {
    let set = CardSet::from_file("sets/demo.json").expect("Failed to load demo set");
    let pool = CardPool::build(set.cards());
    let rules = draft_booster();

    c.bench_function("sealed_pool_6_packs", |b| {
        b.iter(|| {
            let mut rng = PackRng::from_seed_str(black_box("bench-seed"));
            SealedPool::open(pool.clone(), &rules, &mut rng, black_box(6))
        })
    });
}

fn benchmark_codec_round_trip(c: &mut Criterion) {
    let set = CardSet::from_file("sets/demo.json").expect("Failed to load demo set");
    let pool = CardPool::build(set.cards());
    let rules = draft_booster();
    let mut rng = PackRng::from_seed_str("bench-codec");
    let session = SealedPool::open(pool, &rules, &mut rng, 6);
    let deck: Vec<_> = session.opened().iter().take(23).cloned().collect();

    c.bench_function("deck_code_round_trip", |b| {
        b.iter(|| {
            let code = serialize(black_box(&deck));
            deserialize(black_box(&code), session.opened())
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_pack,
    benchmark_sealed_pool,
    benchmark_codec_round_trip
);
criterion_main!(benches);
