//! Recognized speech segments and derived captions.

use serde::{Deserialize, Serialize};

/// A single recognized speech segment with timing.
///
/// Produced by an external transcription provider. Sequence order defines
/// caption order; segments are not required to be gap-free or
/// non-overlapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSegment {
    /// Start time in seconds.
    pub start_secs: f64,
    /// End time in seconds.
    pub end_secs: f64,
    /// Recognized text.
    pub text: String,
}

impl SpeechSegment {
    pub fn new(start_secs: f64, end_secs: f64, text: impl Into<String>) -> Self {
        Self {
            start_secs,
            end_secs,
            text: text.into(),
        }
    }
}

/// A caption derived from a speech segment.
///
/// Invariant: `display_end_secs = start_secs + max(recognized duration,
/// minimum display duration)` — short utterances are stretched, long ones
/// keep their natural end time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// 1-based position in the track, assigned in input order with no gaps.
    pub index: u32,
    /// Start time in seconds.
    pub start_secs: f64,
    /// Adjusted end of the display interval in seconds.
    pub display_end_secs: f64,
    /// Trimmed caption text.
    pub text: String,
}
