// Core quiz and matching exports
pub mod filters;
pub mod matcher;
pub mod questions;
pub mod quiz;
pub mod sampling;

pub use filters::{build_pet_query, matches_allergy, matches_neuter, matches_size, PetFilter};
pub use matcher::{PetMatcher, DEFAULT_MAX_RESULTS, MATCH_FAILED_ALERT};
pub use questions::default_questions;
pub use quiz::{QuizEngine, QuizError, QuizState};
pub use sampling::sample;
