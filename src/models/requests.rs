use serde::{Deserialize, Serialize};
use validator::Validate;

/// Answer the current question of a quiz session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1))]
    pub option: String,
}
