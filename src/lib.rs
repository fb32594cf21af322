//! Pet Match - match quiz service for the pet adoption app
//!
//! This library provides the quiz engine and the pet match pipeline used by
//! the adoption app: a fixed five-question quiz whose answers drive an
//! equality query against the pets collection, three local filters and a
//! uniform random sample.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{default_questions, PetMatcher, QuizEngine, QuizError, QuizState};
pub use models::{ActivityTier, AnswerSet, MatchResult, PetQuery, PetRecord, Question, SizeClass};
pub use services::{AppwriteClient, InMemoryPetStore, PetStore, SessionStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = QuizEngine::default();
        assert_eq!(engine.questions().len(), default_questions().len());
    }
}
