// Criterion benchmarks for Pet Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pet_match::core::{
    questions::{ACTIVITY_KEY, ALLERGIES_KEY, NEUTERED_KEY, SIZE_KEY, TYPE_KEY},
    sampling::sample,
    PetFilter, PetMatcher,
};
use pet_match::models::{AnswerSet, PetRecord};
use pet_match::services::InMemoryPetStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::sync::Arc;

fn create_pet(id: usize) -> PetRecord {
    serde_json::from_value(json!({
        "$id": id.to_string(),
        "name": format!("Pet {}", id),
        "category": "Dog",
        "activityLevel": "high",
        "weight": (id % 40) as f64,
        "isHypoallergenic": id % 3 == 0,
        "isNeutered": id % 2 == 0,
    }))
    .unwrap()
}

fn create_answers() -> AnswerSet {
    [
        (TYPE_KEY, "Dog"),
        (SIZE_KEY, "Medium"),
        (ACTIVITY_KEY, "Very Active"),
        (ALLERGIES_KEY, "Yes"),
        (NEUTERED_KEY, "Yes"),
    ]
    .into_iter()
    .collect()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_filters");
    let filter = PetFilter::from_answers(&create_answers());

    for size in [100, 1000, 10000] {
        let candidates: Vec<PetRecord> = (0..size).map(create_pet).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| filter.apply(black_box(candidates.clone())));
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_5");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [10, 1000, 100000] {
        let items: Vec<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| sample(black_box(items.clone()), 5, &mut rng));
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let matcher = PetMatcher::new(Arc::new(InMemoryPetStore::default()));
    let answers = create_answers();
    let candidates: Vec<PetRecord> = (0..1000).map(create_pet).collect();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("select_1000_candidates", |b| {
        b.iter(|| matcher.select(black_box(&answers), black_box(candidates.clone()), &mut rng));
    });
}

criterion_group!(benches, bench_filters, bench_sample, bench_select);
criterion_main!(benches);
