//! Caption track construction and SRT serialization.

use std::path::Path;

use subburn_common::error::{SubburnError, SubburnResult};

use crate::segment::{Caption, SpeechSegment};

/// Builds a validated SRT caption track from recognized speech segments.
///
/// Stateless aside from the configured minimum display duration; safe to
/// reuse across build calls.
#[derive(Debug, Clone)]
pub struct CaptionTrackBuilder {
    min_display_secs: f64,
}

impl CaptionTrackBuilder {
    /// Create a builder with the given minimum display duration.
    ///
    /// Returns a validation error unless the duration is strictly positive.
    pub fn new(min_display_secs: f64) -> SubburnResult<Self> {
        if !(min_display_secs > 0.0) {
            return Err(SubburnError::validation(format!(
                "Minimum display duration must be positive, got {min_display_secs}"
            )));
        }
        Ok(Self { min_display_secs })
    }

    /// Minimum display duration in seconds.
    pub fn min_display_secs(&self) -> f64 {
        self.min_display_secs
    }

    /// Derive captions from segments, in input order.
    ///
    /// Each caption is shown for at least the minimum display duration:
    /// the display end is `start + max(end - start, min)`. Long segments
    /// keep their natural end time. No overlap correction is performed, so
    /// a stretched caption may run past the next segment's start. Text is
    /// trimmed; segments that trim to empty still get a caption and an
    /// index.
    pub fn build(&self, segments: &[SpeechSegment]) -> Vec<Caption> {
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let duration = (segment.end_secs - segment.start_secs).max(self.min_display_secs);
                Caption {
                    index: i as u32 + 1,
                    start_secs: segment.start_secs,
                    display_end_secs: segment.start_secs + duration,
                    text: segment.text.trim().to_string(),
                }
            })
            .collect()
    }

    /// Render captions as an SRT document.
    ///
    /// Each block is an index line, a timing line, the text, and a blank
    /// separator line. An empty caption list renders as an empty document.
    pub fn render(captions: &[Caption]) -> String {
        let mut output = String::new();

        for caption in captions {
            output.push_str(&format!("{}\n", caption.index));
            output.push_str(&format!(
                "{} --> {}\n",
                format_srt_time(caption.start_secs),
                format_srt_time(caption.display_end_secs),
            ));
            output.push_str(&caption.text);
            output.push_str("\n\n");
        }

        output
    }

    /// Build and write a caption track to `path`, replacing any existing
    /// document there.
    ///
    /// The write is all-or-nothing: the document is serialized to a
    /// sibling temp file and renamed over the target, so a failure partway
    /// never leaves a truncated track behind.
    pub fn write_track(&self, segments: &[SpeechSegment], path: &Path) -> SubburnResult<()> {
        let captions = self.build(segments);
        let content = Self::render(&captions);

        let mut tmp_name = path
            .file_name()
            .ok_or_else(|| {
                SubburnError::validation(format!(
                    "Caption track path has no file name: {}",
                    path.display()
                ))
            })?
            .to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = std::fs::write(&tmp_path, content) {
            std::fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            std::fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }

        tracing::info!(
            path = %path.display(),
            captions = captions.len(),
            "Wrote caption track"
        );
        Ok(())
    }
}

/// Format seconds as an SRT timestamp: HH:MM:SS,mmm.
///
/// Milliseconds are truncated from the fractional second, not rounded;
/// downstream players expect this exact textual form.
pub fn format_srt_time(secs: f64) -> String {
    let total_ms = (secs * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(min: f64) -> CaptionTrackBuilder {
        CaptionTrackBuilder::new(min).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_min_duration() {
        assert!(CaptionTrackBuilder::new(0.0).is_err());
        assert!(CaptionTrackBuilder::new(-1.0).is_err());
        assert!(CaptionTrackBuilder::new(f64::NAN).is_err());
        assert!(CaptionTrackBuilder::new(0.5).is_ok());
    }

    #[test]
    fn test_natural_duration_preserved_when_long_enough() {
        let captions = builder(1.0).build(&[SpeechSegment::new(2.0, 5.5, "hello")]);
        assert_eq!(captions.len(), 1);
        assert!((captions[0].display_end_secs - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_segment_stretched_to_min_duration() {
        let captions = builder(1.0).build(&[SpeechSegment::new(2.0, 2.3, "hi")]);
        assert!((captions[0].display_end_secs - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_indices_are_one_based_and_gapless() {
        let segments = vec![
            SpeechSegment::new(0.0, 1.0, "a"),
            SpeechSegment::new(1.0, 2.0, "b"),
            SpeechSegment::new(2.0, 3.0, "c"),
        ];
        let captions = builder(1.0).build(&segments);
        let indices: Vec<u32> = captions.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_text_is_trimmed_and_empty_captions_kept() {
        let segments = vec![
            SpeechSegment::new(0.0, 1.0, "  spaced out  "),
            SpeechSegment::new(1.0, 2.0, "   "),
        ];
        let captions = builder(1.0).build(&segments);
        assert_eq!(captions[0].text, "spaced out");
        assert_eq!(captions[1].text, "");
        assert_eq!(captions[1].index, 2);
    }

    #[test]
    fn test_stretching_may_overlap_next_caption() {
        // Overlap from min-duration stretching is accepted, not corrected.
        let segments = vec![
            SpeechSegment::new(0.0, 0.2, "first"),
            SpeechSegment::new(0.5, 1.5, "second"),
        ];
        let captions = builder(2.0).build(&segments);
        assert!(captions[0].display_end_secs > captions[1].start_secs);
    }

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(3725.4), "01:02:05,400");
        assert_eq!(format_srt_time(3661.5), "01:01:01,500");
    }

    #[test]
    fn test_millis_truncated_not_rounded() {
        assert_eq!(format_srt_time(1.9996), "00:00:01,999");
    }

    #[test]
    fn test_render_block_format() {
        let captions = builder(1.0).build(&[
            SpeechSegment::new(0.0, 2.5, "Hello world"),
            SpeechSegment::new(3.0, 5.0, "This is a test"),
        ]);
        let srt = CaptionTrackBuilder::render(&captions);
        assert!(srt.contains("1\n00:00:00,000 --> 00:00:02,500\nHello world\n\n"));
        assert!(srt.contains("2\n00:00:03,000 --> 00:00:05,000\nThis is a test\n\n"));
    }

    #[test]
    fn test_empty_segments_render_empty_document() {
        let captions = builder(1.0).build(&[]);
        assert!(captions.is_empty());
        assert_eq!(CaptionTrackBuilder::render(&captions), "");
    }

    #[test]
    fn test_write_track_replaces_previous_document() {
        let dir = std::env::temp_dir().join("subburn_test_track_replace");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("captions.srt");

        let b = builder(1.0);
        let first = vec![
            SpeechSegment::new(0.0, 1.0, "one"),
            SpeechSegment::new(1.0, 2.0, "two"),
            SpeechSegment::new(2.0, 3.0, "three"),
        ];
        b.write_track(&first, &path).unwrap();

        let second = vec![SpeechSegment::new(0.0, 1.0, "only")];
        b.write_track(&second, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("only"));
        assert!(!content.contains("three"));
        assert!(!content.contains('2'));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_track_empty_segments_writes_empty_file() {
        let dir = std::env::temp_dir().join("subburn_test_track_empty");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("captions.srt");

        builder(1.0).write_track(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        std::fs::remove_dir_all(&dir).ok();
    }
}
