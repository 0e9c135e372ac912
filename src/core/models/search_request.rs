use crate::core::models::ServiceSettings;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub index_endpoint: String,
    pub text_query: String,
    pub page_size: u32,
}

impl SearchRequest {
    pub fn build_for_query(settings: &ServiceSettings, query: &str) -> Self {
        Self {
            index_endpoint: settings.index_endpoint_name(),
            text_query: query.trim().to_string(),
            page_size: global_constants::SEARCH_PAGE_SIZE,
        }
    }
}
