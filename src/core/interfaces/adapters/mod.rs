mod access_token_provider;
mod index_search_provider;
mod retrieval_url_provider;
mod video_launcher;

pub use access_token_provider::AccessTokenProvider;
pub use index_search_provider::IndexSearchProvider;
pub use retrieval_url_provider::RetrievalUrlProvider;
pub use video_launcher::VideoLauncher;
