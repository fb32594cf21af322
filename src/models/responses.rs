use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::quiz::{QuizEngine, QuizState};
use crate::models::domain::{AnswerSet, MatchResult, Question};

/// Where a session currently is in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Asking,
    Results,
}

/// Snapshot of a quiz session returned by every session endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    pub status: SessionStatus,
    #[serde(rename = "questionIndex")]
    pub question_index: usize,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    pub answers: AnswerSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<MatchResult>,
}

impl SessionResponse {
    pub fn new(session_id: Uuid, engine: &QuizEngine) -> Self {
        let total_questions = engine.questions().len();
        let (status, question_index, results) = match engine.state() {
            QuizState::AskingQuestion(index) => (SessionStatus::Asking, *index, None),
            QuizState::ShowingResults(result) => {
                (SessionStatus::Results, total_questions, Some(result.clone()))
            }
        };

        Self {
            session_id,
            status,
            question_index,
            total_questions,
            question: engine.current_question().cloned(),
            answers: engine.answers().clone(),
            results,
        }
    }
}

/// Fixed quiz questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "activeSessions")]
    pub active_sessions: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
