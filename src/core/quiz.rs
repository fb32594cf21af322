use crate::core::matcher::PetMatcher;
use crate::core::questions::default_questions;
use crate::models::{AnswerSet, MatchResult, Question};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors from driving the quiz with an answer it cannot accept
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("answer key '{0}' is used by more than one question")]
    DuplicateAnswerKey(String),

    #[error("'{option}' is not an option for question '{answer_key}'")]
    InvalidOption { answer_key: String, option: String },

    #[error("quiz is complete; restart to answer again")]
    AlreadyComplete,
}

/// Quiz position
#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    /// Waiting for an answer to the question at this index
    AskingQuestion(usize),
    /// All questions answered; terminal until restart
    ShowingResults(MatchResult),
}

/// Walks a user through the fixed question list, one answer per question
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Arc<[Question]>,
    answers: AnswerSet,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: Arc<[Question]>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut keys = HashSet::new();
        for question in questions.iter() {
            if !keys.insert(question.answer_key.as_str()) {
                return Err(QuizError::DuplicateAnswerKey(question.answer_key.clone()));
            }
        }

        Ok(Self {
            questions,
            answers: AnswerSet::new(),
            state: QuizState::AskingQuestion(0),
        })
    }

    pub fn with_default_questions() -> Self {
        Self {
            questions: default_questions().into(),
            answers: AnswerSet::new(),
            state: QuizState::AskingQuestion(0),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Question waiting for an answer, `None` once results are showing
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::AskingQuestion(index) => self.questions.get(index),
            QuizState::ShowingResults(_) => None,
        }
    }

    pub fn results(&self) -> Option<&MatchResult> {
        match &self.state {
            QuizState::ShowingResults(result) => Some(result),
            QuizState::AskingQuestion(_) => None,
        }
    }

    /// Record `option` for the current question and move on.
    ///
    /// Answering the last question runs the matcher and switches to
    /// showing results. Rejected answers leave the engine untouched.
    pub async fn select_option(
        &mut self,
        option: &str,
        matcher: &PetMatcher,
    ) -> Result<&QuizState, QuizError> {
        let index = match self.state {
            QuizState::AskingQuestion(index) => index,
            QuizState::ShowingResults(_) => return Err(QuizError::AlreadyComplete),
        };

        let question = &self.questions[index];
        if !question.has_option(option) {
            return Err(QuizError::InvalidOption {
                answer_key: question.answer_key.clone(),
                option: option.to_string(),
            });
        }

        self.answers.record(question.answer_key.clone(), option);

        if index + 1 < self.questions.len() {
            self.state = QuizState::AskingQuestion(index + 1);
        } else {
            tracing::debug!("Quiz complete with answers: {:?}", self.answers);
            let result = matcher.find_matches(&self.answers).await;
            self.state = QuizState::ShowingResults(result);
        }

        Ok(&self.state)
    }

    /// Back to the first question with no answers and no results
    pub fn restart(&mut self) {
        self.answers.clear();
        self.state = QuizState::AskingQuestion(0);
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::with_default_questions()
    }
}
