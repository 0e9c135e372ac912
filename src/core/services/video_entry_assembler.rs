use std::collections::{HashMap, VecDeque};

use crate::core::models::{Playback, ResolvedUrl, SearchResultItem, VideoEntry};
use crate::core::services::timestamp_extractor;
use crate::infrastructure::LogHandle;

/// Builds one entry per search result, in search order, looking each URL up
/// by asset name so a failed URL call can't shift another result's offset.
///
/// An asset hit more than once gets its resolutions in request order, one per
/// hit, so a failure on one segment never marks its siblings unavailable.
pub fn assemble_entries(
    results: &[SearchResultItem],
    resolved: &[ResolvedUrl],
    log: &LogHandle,
) -> Vec<VideoEntry> {
    let mut urls_by_asset: HashMap<&str, VecDeque<&Result<String, String>>> = HashMap::new();
    for resolution in resolved {
        urls_by_asset
            .entry(resolution.asset_name.as_str())
            .or_default()
            .push_back(&resolution.signed_uri);
    }

    results
        .iter()
        .map(|item| {
            let next_url = urls_by_asset
                .get_mut(item.asset_name.as_str())
                .and_then(VecDeque::pop_front);

            let playback = match next_url {
                Some(Ok(uri)) => Playback::Ready(uri.clone()),
                Some(Err(reason)) => Playback::Unavailable(reason.clone()),
                None => Playback::Unavailable("no retrieval URL requested".to_string()),
            };

            VideoEntry {
                asset_name: item.asset_name.clone(),
                start_offset: timestamp_extractor::seek_offset(&item.start_time, log),
                segment_length: timestamp_extractor::segment_length(
                    &item.start_time,
                    item.end_time.as_deref(),
                    log,
                ),
                playback,
            }
        })
        .collect()
}

pub fn playable(entries: &[VideoEntry]) -> impl Iterator<Item = (usize, &VideoEntry)> {
    entries.iter().enumerate().filter(|(_, e)| e.is_playable())
}
