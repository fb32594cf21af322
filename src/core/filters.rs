use crate::core::questions::{ACTIVITY_KEY, ALLERGIES_KEY, NEUTERED_KEY, SIZE_KEY, TYPE_KEY, YES};
use crate::models::{ActivityTier, AnswerSet, PetQuery, PetRecord, SizeClass};

/// Local filter criteria derived from a completed answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetFilter {
    pub size: Option<SizeClass>,
    pub hypoallergenic_only: bool,
    pub neutered_only: bool,
}

impl PetFilter {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            size: SizeClass::from_answer(answers.get(SIZE_KEY)),
            hypoallergenic_only: answers.get(ALLERGIES_KEY) == Some(YES),
            neutered_only: answers.get(NEUTERED_KEY) == Some(YES),
        }
    }

    /// Run the size, allergy and neuter filters in order
    pub fn apply(&self, candidates: Vec<PetRecord>) -> Vec<PetRecord> {
        candidates
            .into_iter()
            // Stage 2: size band
            .filter(|pet| matches_size(pet, self.size))
            // Stage 3: allergy
            .filter(|pet| matches_allergy(pet, self.hypoallergenic_only))
            // Stage 4: neuter status
            .filter(|pet| matches_neuter(pet, self.neutered_only))
            .collect()
    }
}

/// Remote query for the answers: chosen type plus mapped activity tier
pub fn build_pet_query(answers: &AnswerSet) -> PetQuery {
    PetQuery {
        category: answers.get(TYPE_KEY).unwrap_or_default().to_string(),
        activity_level: ActivityTier::from_answer(answers.get(ACTIVITY_KEY)),
    }
}

/// No size chosen keeps everything; otherwise the weight must be numeric
/// and inside the band.
#[inline]
pub fn matches_size(pet: &PetRecord, size: Option<SizeClass>) -> bool {
    match size {
        None => true,
        Some(size) => pet.numeric_weight().is_some_and(|w| size.contains(w)),
    }
}

#[inline]
pub fn matches_allergy(pet: &PetRecord, hypoallergenic_only: bool) -> bool {
    !hypoallergenic_only || pet.hypoallergenic()
}

#[inline]
pub fn matches_neuter(pet: &PetRecord, neutered_only: bool) -> bool {
    !neutered_only || pet.neutered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_pet(weight: serde_json::Value, hypoallergenic: bool, neutered: bool) -> PetRecord {
        serde_json::from_value(json!({
            "$id": "pet",
            "category": "Dog",
            "activityLevel": "moderate",
            "weight": weight,
            "isHypoallergenic": hypoallergenic,
            "isNeutered": neutered,
        }))
        .unwrap()
    }

    fn answers(size: &str, allergies: &str, neutered: &str) -> AnswerSet {
        [
            (TYPE_KEY, "Dog"),
            (SIZE_KEY, size),
            (ACTIVITY_KEY, "Moderately Active"),
            (ALLERGIES_KEY, allergies),
            (NEUTERED_KEY, neutered),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_filter_from_answers() {
        let filter = PetFilter::from_answers(&answers("Large", "Yes", "No"));

        assert_eq!(filter.size, Some(SizeClass::Large));
        assert!(filter.hypoallergenic_only);
        assert!(!filter.neutered_only);
    }

    #[test]
    fn test_no_size_keeps_non_numeric_weight() {
        let pet = create_test_pet(json!("unknown"), false, false);

        assert!(matches_size(&pet, None));
        assert!(!matches_size(&pet, Some(SizeClass::Small)));
    }

    #[test]
    fn test_allergy_filter() {
        let plain = create_test_pet(json!(5), false, false);
        let poodle = create_test_pet(json!(5), true, false);

        assert!(matches_allergy(&plain, false));
        assert!(!matches_allergy(&plain, true));
        assert!(matches_allergy(&poodle, true));
    }

    #[test]
    fn test_neuter_filter() {
        let intact = create_test_pet(json!(5), false, false);
        let neutered = create_test_pet(json!(5), false, true);

        assert!(!matches_neuter(&intact, true));
        assert!(matches_neuter(&neutered, true));
        assert!(matches_neuter(&intact, false));
    }

    #[test]
    fn test_apply_all_stages() {
        let filter = PetFilter::from_answers(&answers("Medium", "Yes", "Yes"));
        let candidates = vec![
            create_test_pet(json!(15), true, true),  // Keeps
            create_test_pet(json!(15), false, true), // Not hypoallergenic
            create_test_pet(json!(15), true, false), // Not neutered
            create_test_pet(json!(30), true, true),  // Too heavy
        ];

        let kept = filter.apply(candidates);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_build_pet_query() {
        let query = build_pet_query(&answers("Small", "No", "No"));

        assert_eq!(query.category, "Dog");
        assert_eq!(query.activity_level, ActivityTier::Moderate);
    }
}
