pub mod app_theme;
mod video_grid_view;

pub use video_grid_view::{render_video_grid, VideoGridMessage};
