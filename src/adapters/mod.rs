mod gcloud_access_token_provider;
pub mod logo_loader;
mod system_video_launcher;
mod warehouse_client;

pub use gcloud_access_token_provider::GcloudAccessTokenProvider;
pub use system_video_launcher::SystemVideoLauncher;
pub use warehouse_client::WarehouseClient;
