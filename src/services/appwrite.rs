use async_trait::async_trait;
use crate::models::{PetQuery, PetRecord};
use crate::services::store::{PetStore, StoreError};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Appwrite API client
///
/// Read-only access to the pets collection of the hosted document store.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    pets_collection: String,
    query_limit: usize,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        pets_collection: String,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            pets_collection,
            query_limit: 100,
            client,
        })
    }

    /// Page size for document listings
    pub fn with_query_limit(mut self, limit: usize) -> Self {
        self.query_limit = limit.max(1);
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.pets_collection
        )
    }
}

/// Appwrite query strings for one page of an equality-scoped pet query
pub fn build_queries(query: &PetQuery, limit: usize, offset: usize) -> Vec<String> {
    vec![
        equal("category", &query.category),
        equal("activityLevel", query.activity_level.as_str()),
        format!("limit({})", limit),
        format!("offset({})", offset),
    ]
}

fn equal(attribute: &str, value: &str) -> String {
    // serde_json takes care of quoting and escaping the value
    format!("equal(\"{}\", [{}])", attribute, Value::String(value.to_string()))
}

/// One page of a document listing
struct DocumentPage {
    total: Option<u64>,
    documents: Vec<Value>,
}

impl AppwriteClient {
    async fn fetch_page(&self, query: &PetQuery, offset: usize) -> Result<DocumentPage, StoreError> {
        let params = build_queries(query, self.query_limit, offset)
            .iter()
            .map(|q| format!("queries%5B%5D={}", urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}?{}", self.documents_url(), params);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Pet query failed: {} - {}", status, body);
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64());

        let documents = match json.get_mut("documents").map(Value::take) {
            Some(Value::Array(documents)) => documents,
            _ => return Err(StoreError::InvalidResponse("Missing documents array".into())),
        };

        Ok(DocumentPage { total, documents })
    }
}

#[async_trait]
impl PetStore for AppwriteClient {
    /// Pages through every matching document, `query_limit` at a time,
    /// until `total` is reached or a short page comes back.
    async fn query_pets(&self, query: &PetQuery) -> Result<Vec<PetRecord>, StoreError> {
        tracing::debug!(
            "Querying pets: category={}, activityLevel={}",
            query.category,
            query.activity_level.as_str()
        );

        let mut pets = Vec::new();
        let mut offset = 0;
        let mut pages = 0;

        loop {
            let page = self.fetch_page(query, offset).await?;
            let fetched = page.documents.len();
            pages += 1;
            offset += fetched;

            pets.extend(page.documents.into_iter().filter_map(|doc| {
                match serde_json::from_value::<PetRecord>(doc) {
                    Ok(pet) => Some(pet),
                    Err(e) => {
                        tracing::warn!("Skipping malformed pet document: {}", e);
                        None
                    }
                }
            }));

            let reached_total = page.total.is_some_and(|total| offset as u64 >= total);
            if fetched == 0 || fetched < self.query_limit || reached_total {
                break;
            }
        }

        tracing::debug!("Queried {} pets over {} page(s)", pets.len(), pages);

        Ok(pets)
    }
}
