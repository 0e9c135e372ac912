use anyhow::{Context, Result};

use crate::core::interfaces::adapters::VideoLauncher;
use crate::global_constants;
use crate::infrastructure::LogHandle;

/// Hands the signed URL to the desktop's default handler (browser or player).
pub struct SystemVideoLauncher {
    log: LogHandle,
}

impl SystemVideoLauncher {
    pub fn new() -> Self {
        Self {
            log: LogHandle::new(global_constants::LOG_TAG_PLAYER),
        }
    }
}

impl Default for SystemVideoLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoLauncher for SystemVideoLauncher {
    fn launch(&self, playback_url: &str) -> Result<()> {
        self.log.info("Opening video in system player");
        self.log.debug(format!("Playback URL: {}", playback_url));

        open::that(playback_url).context("Failed to open playback URL")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_logs_under_player_tag() {
        let launcher = SystemVideoLauncher::default();

        assert_eq!(launcher.log, LogHandle::new(global_constants::LOG_TAG_PLAYER));
    }
}
