use crate::domain::model::UserProfile;
use crate::domain::ports::ProfileSource;
use crate::utils::error::{CardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_ENDPOINT: &str = "https://randomuser.me/api/";

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RandomUserRecord {
    name: RandomUserName,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

/// Takes the first entry of `results`; everything else in the body is ignored.
pub fn parse_profile(body: &[u8]) -> Result<UserProfile> {
    let response: RandomUserResponse = serde_json::from_slice(body)?;

    let first = match response.results {
        None => {
            return Err(CardError::MissingProfile {
                reason: "response has no results field".to_string(),
            })
        }
        Some(results) => results.into_iter().next().ok_or_else(|| CardError::MissingProfile {
            reason: "results is empty, no user to display".to_string(),
        })?,
    };

    let record: RandomUserRecord = serde_json::from_value(first)?;
    Ok(UserProfile::new(record.name.first, record.name.last))
}

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RandomUserClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT)
    }
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CardError::HttpStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        parse_profile(&body)
    }
}
