use async_trait::async_trait;

use crate::core::models::WarehouseError;

#[async_trait]
pub trait RetrievalUrlProvider: Send + Sync {
    async fn generate_retrieval_url(&self, asset_name: &str) -> Result<String, WarehouseError>;
}
