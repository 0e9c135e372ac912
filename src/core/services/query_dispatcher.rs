use crate::core::interfaces::adapters::IndexSearchProvider;
use crate::core::models::{SearchRequest, SearchResultItem, ServiceSettings, WarehouseError};
use crate::infrastructure::LogHandle;

pub async fn dispatch_query(
    provider: &dyn IndexSearchProvider,
    settings: &ServiceSettings,
    query: &str,
    log: &LogHandle,
) -> Result<Vec<SearchResultItem>, WarehouseError> {
    if query.trim().is_empty() {
        log.warn("Refusing to search with an empty query");
        return Err(WarehouseError::EmptyQuery);
    }

    let request = SearchRequest::build_for_query(settings, query);
    log.debug(format!(
        "Searching {} for {:?} (page size {})",
        request.index_endpoint, request.text_query, request.page_size
    ));

    match provider.search_index_endpoint(&request).await {
        Ok(mut items) => {
            items.truncate(request.page_size as usize);
            log.info(format!(
                "Search for {:?} returned {} items",
                request.text_query,
                items.len()
            ));
            Ok(items)
        }
        Err(error) => {
            log.error_with_cause("Error during search", &error);
            Err(error)
        }
    }
}
