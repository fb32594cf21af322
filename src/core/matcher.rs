use crate::core::{
    filters::{build_pet_query, PetFilter},
    sampling::sample,
};
use crate::models::{AnswerSet, MatchResult, PetRecord};
use crate::services::store::PetStore;
use rand::Rng;
use std::sync::Arc;

/// Most pets ever shown after a quiz, and the default cap
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Message shown to the user when the pet query fails
pub const MATCH_FAILED_ALERT: &str = "We couldn't load matching pets right now. Please try again.";

/// Match orchestrator - turns a completed answer set into a short pet list
///
/// # Pipeline Stages
/// 1. Equality query on category and activity level (remote)
/// 2. Size band filter
/// 3. Allergy filter
/// 4. Neuter status filter
/// 5. Uniform random sample
#[derive(Clone)]
pub struct PetMatcher {
    store: Arc<dyn PetStore>,
    max_results: usize,
}

impl PetMatcher {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self {
            store,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Lower the result cap. Values above `DEFAULT_MAX_RESULTS` are clamped.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        if max_results > DEFAULT_MAX_RESULTS {
            tracing::warn!(
                "max_results {} exceeds the limit of {}, clamping",
                max_results,
                DEFAULT_MAX_RESULTS
            );
        }
        self.max_results = max_results.min(DEFAULT_MAX_RESULTS);
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run the full pipeline for a completed quiz.
    ///
    /// Store failures never escape: they are logged and produce an empty
    /// result carrying an alert for the user.
    pub async fn find_matches(&self, answers: &AnswerSet) -> MatchResult {
        let query = build_pet_query(answers);

        let candidates = match self.store.query_pets(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!(
                    "Pet query failed for category={}, activityLevel={}: {}",
                    query.category,
                    query.activity_level.as_str(),
                    e
                );
                return MatchResult::failed(MATCH_FAILED_ALERT);
            }
        };

        let result = self.select(answers, candidates, &mut rand::thread_rng());

        tracing::info!(
            "Matched {} pets (from {} candidates, {} after filters)",
            result.pets.len(),
            result.total_candidates,
            result.filtered_candidates
        );

        result
    }

    /// Local stages of the pipeline over already-fetched candidates
    pub fn select<R: Rng + ?Sized>(
        &self,
        answers: &AnswerSet,
        candidates: Vec<PetRecord>,
        rng: &mut R,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let filtered = PetFilter::from_answers(answers).apply(candidates);
        let filtered_candidates = filtered.len();

        MatchResult {
            pets: sample(filtered, self.max_results, rng),
            total_candidates,
            filtered_candidates,
            alert: None,
        }
    }
}
