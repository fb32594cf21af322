use async_trait::async_trait;
use crate::models::{PetQuery, PetRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors that can occur when querying the pet store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: invalid API key or session")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the pets collection.
///
/// Passed explicitly into the matcher so tests and alternate backends can
/// stand in for the hosted document store.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// All pets where `category` and `activityLevel` equal the query values.
    /// Result order is unspecified.
    async fn query_pets(&self, query: &PetQuery) -> Result<Vec<PetRecord>, StoreError>;
}

/// Pet store backed by a fixed list of records
#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: Vec<PetRecord>,
    offline: AtomicBool,
}

impl InMemoryPetStore {
    pub fn new(pets: Vec<PetRecord>) -> Self {
        Self {
            pets,
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every query fails with `StoreError::Unavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

#[async_trait]
impl PetStore for InMemoryPetStore {
    async fn query_pets(&self, query: &PetQuery) -> Result<Vec<PetRecord>, StoreError> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }

        Ok(self
            .pets
            .iter()
            .filter(|p| {
                p.category == query.category && p.activity_level == query.activity_level.as_str()
            })
            .cloned()
            .collect())
    }
}
