pub mod query_dispatcher;
pub mod timestamp_extractor;
pub mod url_resolver;
pub mod video_entry_assembler;
pub mod video_search_pipeline;

pub use video_search_pipeline::{run_search, PipelineLogs, SearchOutcome};
