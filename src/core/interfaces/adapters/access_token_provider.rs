use async_trait::async_trait;

use crate::core::models::WarehouseError;

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, WarehouseError>;
}
