use std::time::Duration;

use chrono::DateTime;

use crate::infrastructure::LogHandle;

/// Whole seconds since the Unix epoch for an RFC 3339 timestamp, or 0 when it
/// cannot be parsed.
pub fn get_seconds(timestamp: &str, log: &LogHandle) -> i64 {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(parsed) => parsed.timestamp(),
        Err(error) => {
            log.error_with_cause(
                format!("Error extracting seconds from {:?}", timestamp),
                &error,
            );
            0
        }
    }
}

/// Segment positions are encoded as timestamps counted from the epoch, so the
/// epoch seconds are the seek position inside the video.
pub fn seek_offset(timestamp: &str, log: &LogHandle) -> Duration {
    let seconds = get_seconds(timestamp, log);
    Duration::from_secs(seconds.max(0) as u64)
}

/// Length of a segment, or `None` when the end is missing or not after the start.
pub fn segment_length(
    start_time: &str,
    end_time: Option<&str>,
    log: &LogHandle,
) -> Option<Duration> {
    let end_time = end_time?;
    let length = get_seconds(end_time, log) - get_seconds(start_time, log);
    (length > 0).then(|| Duration::from_secs(length as u64))
}
