use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::core::{PetMatcher, QuizError};
use crate::models::{AnswerRequest, ErrorResponse, HealthResponse, QuestionsResponse, SessionResponse};
use crate::services::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub matcher: PetMatcher,
}

/// Configure all quiz-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/quiz/questions", web::get().to(list_questions))
        .route("/quiz/sessions", web::post().to(create_session))
        .route("/quiz/sessions/{id}", web::get().to(get_session))
        .route("/quiz/sessions/{id}", web::delete().to(delete_session))
        .route("/quiz/sessions/{id}/answers", web::post().to(answer_question))
        .route("/quiz/sessions/{id}/restart", web::post().to(restart_session));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn session_not_found(id: &Uuid) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        "Session not found",
        format!("No quiz session with id {}", id),
    )
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: state.sessions.len(),
    })
}

/// GET /api/v1/quiz/questions
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(QuestionsResponse {
        questions: state.sessions.questions().to_vec(),
    })
}

/// POST /api/v1/quiz/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (id, handle) = state.sessions.create().await;
    let engine = handle.lock().await;

    tracing::info!("Started quiz session {}", id);

    HttpResponse::Created().json(SessionResponse::new(id, &engine))
}

/// GET /api/v1/quiz/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    match state.sessions.get(&id).await {
        Some(handle) => {
            let engine = handle.lock().await;
            HttpResponse::Ok().json(SessionResponse::new(id, &engine))
        }
        None => session_not_found(&id),
    }
}

/// Answer the current question
///
/// POST /api/v1/quiz/sessions/{id}/answers
///
/// Request body:
/// ```json
/// { "option": "Dog" }
/// ```
///
/// Answering the last question runs the pet match before responding. The
/// session stays locked for the whole round trip, so concurrent answers to
/// the same session queue up behind it.
async fn answer_question(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<AnswerRequest>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for answer on session {}: {:?}", id, errors);
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let Some(handle) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };

    let mut engine = handle.lock().await;

    if let Err(e) = engine.select_option(&req.option, &state.matcher).await {
        tracing::info!("Rejected answer on session {}: {}", id, e);
        let (status, error) = match e {
            QuizError::InvalidOption { .. } => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Invalid option")
            }
            QuizError::AlreadyComplete => {
                (actix_web::http::StatusCode::CONFLICT, "Quiz already complete")
            }
            QuizError::NoQuestions | QuizError::DuplicateAnswerKey(_) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "Quiz unavailable")
            }
        };
        return error_response(status, error, e.to_string());
    }

    if let Some(result) = engine.results() {
        tracing::info!(
            "Session {} finished the quiz with {} matches (from {} candidates)",
            id,
            result.pets.len(),
            result.total_candidates
        );
    }

    HttpResponse::Ok().json(SessionResponse::new(id, &engine))
}

/// POST /api/v1/quiz/sessions/{id}/restart
async fn restart_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    let Some(handle) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };

    let mut engine = handle.lock().await;
    engine.restart();

    tracing::debug!("Restarted quiz session {}", id);

    HttpResponse::Ok().json(SessionResponse::new(id, &engine))
}

/// DELETE /api/v1/quiz/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    if state.sessions.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        session_not_found(&id)
    }
}
