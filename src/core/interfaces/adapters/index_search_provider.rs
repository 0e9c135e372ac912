use async_trait::async_trait;

use crate::core::models::{SearchRequest, SearchResultItem, WarehouseError};

#[async_trait]
pub trait IndexSearchProvider: Send + Sync {
    async fn search_index_endpoint(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResultItem>, WarehouseError>;
}
