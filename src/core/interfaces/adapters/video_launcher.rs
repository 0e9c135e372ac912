use anyhow::Result;

pub trait VideoLauncher: Send + Sync {
    fn launch(&self, playback_url: &str) -> Result<()>;
}
