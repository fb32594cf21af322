// Unit tests for Pet Match

use pet_match::core::{
    filters::{build_pet_query, matches_allergy, matches_neuter, matches_size, PetFilter},
    questions::{default_questions, ACTIVITY_KEY, ALLERGIES_KEY, NEUTERED_KEY, SIZE_KEY, TYPE_KEY},
    sampling::sample,
};
use pet_match::models::{ActivityTier, AnswerSet, PetRecord, SizeClass};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn create_pet(weight: serde_json::Value) -> PetRecord {
    serde_json::from_value(json!({
        "$id": "pet",
        "category": "Cat",
        "activityLevel": "low",
        "weight": weight,
    }))
    .unwrap()
}

#[test]
fn test_question_order() {
    let keys: Vec<String> = default_questions().into_iter().map(|q| q.answer_key).collect();
    assert_eq!(keys, vec![TYPE_KEY, SIZE_KEY, ACTIVITY_KEY, ALLERGIES_KEY, NEUTERED_KEY]);
}

#[test]
fn test_activity_options_all_map_to_distinct_tiers() {
    let questions = default_questions();
    let activity = questions.iter().find(|q| q.answer_key == ACTIVITY_KEY).unwrap();

    let tiers: Vec<ActivityTier> = activity
        .options
        .iter()
        .map(|o| ActivityTier::from_answer(Some(o.as_str())))
        .collect();

    assert_eq!(tiers, vec![ActivityTier::Low, ActivityTier::Moderate, ActivityTier::High]);
}

#[test]
fn test_missing_activity_defaults_to_moderate() {
    let answers: AnswerSet = [(TYPE_KEY, "Cat")].into_iter().collect();
    let query = build_pet_query(&answers);

    assert_eq!(query.category, "Cat");
    assert_eq!(query.activity_level, ActivityTier::Moderate);
}

#[test]
fn test_size_band_edges() {
    assert!(matches_size(&create_pet(json!(9.9)), Some(SizeClass::Small)));
    assert!(!matches_size(&create_pet(json!(10)), Some(SizeClass::Small)));
    assert!(matches_size(&create_pet(json!(10)), Some(SizeClass::Medium)));
    assert!(matches_size(&create_pet(json!(25)), Some(SizeClass::Medium)));
    assert!(!matches_size(&create_pet(json!(25)), Some(SizeClass::Large)));
    assert!(matches_size(&create_pet(json!(25.1)), Some(SizeClass::Large)));
}

#[test]
fn test_non_numeric_weight_excluded_only_when_size_chosen() {
    let pet = create_pet(json!(null));

    assert!(matches_size(&pet, None));
    for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
        assert!(!matches_size(&pet, Some(size)));
    }
}

#[test]
fn test_missing_flags_count_as_false() {
    let pet = create_pet(json!(3));

    assert!(!matches_allergy(&pet, true));
    assert!(!matches_neuter(&pet, true));
}

#[test]
fn test_no_answers_means_no_local_filtering() {
    let filter = PetFilter::from_answers(&AnswerSet::new());
    let candidates = vec![create_pet(json!("n/a")), create_pet(json!(40))];

    assert_eq!(filter.apply(candidates).len(), 2);
}

#[test]
fn test_sample_is_subset() {
    let mut rng = StdRng::seed_from_u64(99);
    let items: Vec<u32> = (100..130).collect();

    let picked = sample(items.clone(), 5, &mut rng);

    assert_eq!(picked.len(), 5);
    assert!(picked.iter().all(|p| items.contains(p)));
}
