//! HTTP client for the RxNorm REST API.

use crate::config::client_config::ClientConfig;
use crate::domain::model::{PropertyRecord, Rxcui};
use crate::domain::ports::DrugInfoSource;
use crate::utils::error::{Result, RxNormError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Stateless RxNorm client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RxNormClient {
    client: Client,
    base_url: Url,
}

impl RxNormClient {
    /// Client for the public NLM endpoint with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Client for a custom base URL, e.g. a local RxNav-in-a-Box.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base path (each percent-encoded) and add `params` as the query.
    fn endpoint_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| RxNormError::Config {
                message: format!("Base URL cannot carry a path: {}", self.base_url),
            })?;
            path.pop_if_empty().extend(segments);
        }

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    async fn make_request(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint_url(segments, params)?;

        tracing::debug!("Making RxNorm request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("RxNorm response status: {}", status);

        if !status.is_success() {
            tracing::warn!("RxNorm request to {} failed with status {}", url, status);
            return Err(RxNormError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Resolve a drug name to its RxCUI. `Ok(None)` when RxNorm has no match.
    pub async fn get_rxcui(&self, drug_name: &str) -> Result<Option<Rxcui>> {
        let data = self
            .make_request(&["rxcui.json"], &[("name", drug_name)])
            .await?;
        let rxcui = first_rxnorm_id(&data);

        match &rxcui {
            Some(id) => tracing::debug!("Resolved '{}' to RxCUI {}", drug_name, id),
            None => tracing::debug!("No RxCUI found for '{}'", drug_name),
        }
        Ok(rxcui)
    }

    /// All properties of a concept, in the order the service lists them.
    pub async fn get_drug_properties(&self, rxcui: &Rxcui) -> Result<Vec<PropertyRecord>> {
        let data = self
            .make_request(
                &["rxcui", rxcui.as_str(), "allProperties.json"],
                &[("prop", "all")],
            )
            .await?;
        let properties = property_concepts(data)?;

        tracing::debug!("RxCUI {} has {} properties", rxcui, properties.len());
        Ok(properties)
    }

    /// Raw interaction payload for a concept.
    pub async fn get_drug_interactions(&self, rxcui: &Rxcui) -> Result<Value> {
        self.make_request(
            &["interaction", "interaction.json"],
            &[("rxcui", rxcui.as_str())],
        )
        .await
    }

    /// Raw `allnames` payload for a concept.
    pub async fn get_drug_names(&self, rxcui: &Rxcui) -> Result<Value> {
        self.make_request(&["rxcui", rxcui.as_str(), "allnames"], &[])
            .await
    }
}

#[async_trait]
impl DrugInfoSource for RxNormClient {
    async fn get_rxcui(&self, drug_name: &str) -> Result<Option<Rxcui>> {
        RxNormClient::get_rxcui(self, drug_name).await
    }

    async fn get_drug_properties(&self, rxcui: &Rxcui) -> Result<Vec<PropertyRecord>> {
        RxNormClient::get_drug_properties(self, rxcui).await
    }

    async fn get_drug_interactions(&self, rxcui: &Rxcui) -> Result<Value> {
        RxNormClient::get_drug_interactions(self, rxcui).await
    }

    async fn get_drug_names(&self, rxcui: &Rxcui) -> Result<Value> {
        RxNormClient::get_drug_names(self, rxcui).await
    }
}

/// `idGroup.rxnormId[0]`, or `None` if any step is missing or empty.
fn first_rxnorm_id(data: &Value) -> Option<Rxcui> {
    data.get("idGroup")
        .and_then(|group| group.get("rxnormId"))
        .and_then(Value::as_array)
        .and_then(|ids| ids.first())
        .and_then(Value::as_str)
        .map(Rxcui::from)
}

/// `propConceptGroup.propConcept`; missing or null at either level means no properties.
fn property_concepts(mut data: Value) -> Result<Vec<PropertyRecord>> {
    match data
        .get_mut("propConceptGroup")
        .and_then(|group| group.get_mut("propConcept"))
        .map(Value::take)
    {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => Ok(serde_json::from_value(list)?),
    }
}
