use crate::core::couple;
use crate::domain::model::{Actor, Actress};
use crate::domain::ports::{CastSource, ConfigProvider, Entity};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the actresses/actors API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<E: Entity>(&self) -> String {
        format!("{}/{}", self.base_url, E::COLLECTION)
    }

    fn record_url<E: Entity>(&self, id: u64) -> String {
        format!("{}/{}/{}", self.base_url, E::COLLECTION, id)
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches and validates one record, surfacing the failure reason.
    pub async fn fetch_one<E: Entity>(&self, id: u64) -> Result<E> {
        let value = self.get_json(&self.record_url::<E>(id)).await?;
        E::from_json(value)
    }

    /// Fetches the whole collection. Elements that fail validation are
    /// dropped; a body that is not an array is an error.
    pub async fn fetch_all<E: Entity>(&self) -> Result<Vec<E>> {
        let value = self.get_json(&self.collection_url::<E>()).await?;

        let Value::Array(items) = value else {
            return Err(ClientError::UnexpectedShape {
                expected: format!("a JSON array of {}", E::COLLECTION),
            });
        };

        let total = items.len();
        let records: Vec<E> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match E::from_json(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping invalid {} at index {}: {}", E::LABEL, index, e);
                    None
                }
            })
            .collect();

        if records.len() < total {
            tracing::warn!(
                "Kept {} of {} {} from the collection",
                records.len(),
                total,
                E::COLLECTION
            );
        }

        Ok(records)
    }

    pub async fn get_one<E: Entity>(&self, id: u64) -> Option<E> {
        match self.fetch_one::<E>(id).await {
            Ok(record) => {
                tracing::debug!("Fetched {} {}: {:?}", E::LABEL, id, record);
                Some(record)
            }
            Err(e) => {
                tracing::error!("Failed to fetch {} {}: {}", E::LABEL, id, e);
                None
            }
        }
    }

    pub async fn get_all<E: Entity>(&self) -> Vec<E> {
        match self.fetch_all::<E>().await {
            Ok(records) => {
                tracing::debug!("Fetched {} {}", records.len(), E::COLLECTION);
                records
            }
            Err(e) => {
                tracing::error!("Failed to fetch {}: {}", E::COLLECTION, e);
                Vec::new()
            }
        }
    }

    /// One slot per requested id, in request order. Requests run concurrently
    /// without a limit.
    pub async fn get_many<E: Entity>(&self, ids: &[u64]) -> Vec<Option<E>> {
        tracing::debug!("Fetching {} {} concurrently", ids.len(), E::COLLECTION);
        join_all(ids.iter().map(|&id| self.get_one::<E>(id))).await
    }

    pub async fn random_couple(&self) -> Option<(Actress, Actor)> {
        couple::random_couple(self).await
    }
}

#[async_trait]
impl CastSource for ApiClient {
    async fn get_actress(&self, id: u64) -> Option<Actress> {
        self.get_one(id).await
    }

    async fn get_all_actresses(&self) -> Vec<Actress> {
        self.get_all().await
    }

    async fn get_actresses(&self, ids: &[u64]) -> Vec<Option<Actress>> {
        self.get_many(ids).await
    }

    async fn get_actor(&self, id: u64) -> Option<Actor> {
        self.get_one(id).await
    }

    async fn get_all_actors(&self) -> Vec<Actor> {
        self.get_all().await
    }

    async fn get_actors(&self, ids: &[u64]) -> Vec<Option<Actor>> {
        self.get_many(ids).await
    }
}
