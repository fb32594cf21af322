// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ActivityTier, AnswerSet, MatchResult, PetQuery, PetRecord, Question, SizeClass};
pub use requests::AnswerRequest;
pub use responses::{ErrorResponse, HealthResponse, QuestionsResponse, SessionResponse, SessionStatus};
