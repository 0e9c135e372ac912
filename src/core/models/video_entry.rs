use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Ready(String),
    Unavailable(String),
}

/// A search hit paired with the signed URL generated for its own asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub asset_name: String,
    pub start_offset: Duration,
    pub segment_length: Option<Duration>,
    pub playback: Playback,
}

impl VideoEntry {
    pub fn is_playable(&self) -> bool {
        matches!(self.playback, Playback::Ready(_))
    }

    pub fn signed_uri(&self) -> Option<&str> {
        match &self.playback {
            Playback::Ready(uri) => Some(uri),
            Playback::Unavailable(_) => None,
        }
    }

    /// Signed URL with a media fragment so players seek to the matched segment.
    pub fn playback_url(&self) -> Option<String> {
        self.signed_uri()
            .map(|uri| format!("{}#t={}", uri, self.start_offset.as_secs()))
    }

    pub fn short_title(&self) -> String {
        shorten_asset_name(&self.asset_name)
    }

    pub fn offset_caption(&self) -> String {
        match self.segment_length {
            Some(length) => format!(
                "starts at {} ({} long)",
                format_offset(self.start_offset),
                format_offset(length)
            ),
            None => format!("starts at {}", format_offset(self.start_offset)),
        }
    }
}

pub fn shorten_asset_name(asset_name: &str) -> String {
    if asset_name.chars().count() <= global_constants::TITLE_MAX_CHARS {
        return asset_name.to_string();
    }

    let last_segment = asset_name.rsplit('/').next().unwrap_or(asset_name);
    let prefix: String = last_segment
        .chars()
        .take(global_constants::TITLE_MAX_CHARS)
        .collect();
    format!("{}...", prefix)
}

pub fn format_offset(offset: Duration) -> String {
    let total = offset.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
