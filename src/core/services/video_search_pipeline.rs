use crate::core::interfaces::adapters::{IndexSearchProvider, RetrievalUrlProvider};
use crate::core::models::{ServiceSettings, VideoEntry};
use crate::core::services::{query_dispatcher, url_resolver, video_entry_assembler};
use crate::global_constants;
use crate::infrastructure::LogHandle;

#[derive(Debug, Clone, Copy)]
pub struct PipelineLogs {
    pub search: LogHandle,
    pub resolver: LogHandle,
    pub timestamp: LogHandle,
}

impl Default for PipelineLogs {
    fn default() -> Self {
        Self {
            search: LogHandle::new(global_constants::LOG_TAG_SEARCH),
            resolver: LogHandle::new(global_constants::LOG_TAG_RESOLVER),
            timestamp: LogHandle::new(global_constants::LOG_TAG_TIMESTAMP),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Empty,
    Found(Vec<VideoEntry>),
    Failed(String),
}

impl SearchOutcome {
    pub fn status_message(&self) -> String {
        match self {
            SearchOutcome::Empty => global_constants::USER_MESSAGE_NO_RESULTS.to_string(),
            SearchOutcome::Found(entries) => format!("Found {} results.", entries.len()),
            SearchOutcome::Failed(reason) => format!("Search failed: {}", reason),
        }
    }

    pub fn entries(&self) -> &[VideoEntry] {
        match self {
            SearchOutcome::Found(entries) => entries,
            SearchOutcome::Empty | SearchOutcome::Failed(_) => &[],
        }
    }

    pub fn unavailable_count(&self) -> usize {
        self.entries().iter().filter(|e| !e.is_playable()).count()
    }
}

/// Search, then resolve every hit's URL, then pair them up by asset.
pub async fn run_search(
    search_provider: &dyn IndexSearchProvider,
    url_provider: &dyn RetrievalUrlProvider,
    settings: &ServiceSettings,
    query: &str,
    logs: &PipelineLogs,
) -> SearchOutcome {
    let results =
        match query_dispatcher::dispatch_query(search_provider, settings, query, &logs.search)
            .await
        {
            Ok(results) => results,
            Err(error) => return SearchOutcome::Failed(error.to_string()),
        };

    if results.is_empty() {
        return SearchOutcome::Empty;
    }

    let asset_names: Vec<String> = results.iter().map(|r| r.asset_name.clone()).collect();
    let resolved = url_resolver::resolve_urls(url_provider, &asset_names, &logs.resolver).await;
    logs.resolver.info(format!(
        "Resolved {} of {} retrieval URLs",
        url_resolver::successful_urls(&resolved).len(),
        asset_names.len()
    ));

    SearchOutcome::Found(video_entry_assembler::assemble_entries(
        &results,
        &resolved,
        &logs.timestamp,
    ))
}
