mod resolved_url;
mod search_request;
mod search_result_item;
mod user_settings;
mod video_entry;
mod warehouse_error;

pub use resolved_url::ResolvedUrl;
pub use search_request::SearchRequest;
pub use search_result_item::SearchResultItem;
pub use user_settings::{ServiceSettings, ThemeMode};
pub use video_entry::{Playback, VideoEntry};
pub use warehouse_error::WarehouseError;
