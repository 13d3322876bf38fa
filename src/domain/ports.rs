use crate::domain::model::{PropertyRecord, Rxcui};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The four RxNorm lookups. Each call is one independent round trip.
#[async_trait]
pub trait DrugInfoSource: Send + Sync {
    /// `Ok(None)` means the service knows no concept by that name.
    async fn get_rxcui(&self, drug_name: &str) -> Result<Option<Rxcui>>;

    /// Empty when the service reports no properties.
    async fn get_drug_properties(&self, rxcui: &Rxcui) -> Result<Vec<PropertyRecord>>;

    async fn get_drug_interactions(&self, rxcui: &Rxcui) -> Result<serde_json::Value>;

    async fn get_drug_names(&self, rxcui: &Rxcui) -> Result<serde_json::Value>;
}
