use crate::core::quiz::{QuizEngine, QuizError};
use crate::models::Question;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Shared handle to one quiz session
pub type SessionHandle = Arc<Mutex<QuizEngine>>;

/// In-process store of active quiz sessions
///
/// Sessions are evicted after sitting idle for the configured timeout or when
/// capacity is exceeded. Nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, SessionHandle>,
    template: QuizEngine,
}

impl SessionStore {
    pub fn new(
        questions: Arc<[Question]>,
        max_sessions: u64,
        idle_timeout: Duration,
    ) -> Result<Self, QuizError> {
        let template = QuizEngine::new(questions)?;
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        Ok(Self { sessions, template })
    }

    pub fn questions(&self) -> &[Question] {
        self.template.questions()
    }

    /// Start a new session at the first question
    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(self.template.clone()));

        self.sessions.insert(id, handle.clone()).await;
        tracing::debug!("Created quiz session {}", id);

        (id, handle)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions.get(id).await
    }

    /// Drop a session, returning whether it existed
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).await.is_some();
        if removed {
            tracing::debug!("Removed quiz session {}", id);
        }
        removed
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
