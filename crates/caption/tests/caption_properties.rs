use proptest::prelude::*;

use subburn_caption::{format_srt_time, CaptionTrackBuilder, SpeechSegment};

proptest! {
    #[test]
    fn display_end_never_shorter_than_min_duration(
        start in 0.0f64..86_400.0,
        duration in 0.0f64..30.0,
        min in 0.001f64..10.0,
    ) {
        let builder = CaptionTrackBuilder::new(min).unwrap();
        let captions = builder.build(&[SpeechSegment::new(start, start + duration, "x")]);
        let shown = captions[0].display_end_secs - captions[0].start_secs;
        prop_assert!(shown >= min - 1e-9);
    }

    #[test]
    fn long_segments_keep_natural_end(
        start in 0.0f64..86_400.0,
        extra in 0.0f64..30.0,
        min in 0.001f64..10.0,
    ) {
        let end = start + min + extra;
        let builder = CaptionTrackBuilder::new(min).unwrap();
        let captions = builder.build(&[SpeechSegment::new(start, end, "x")]);
        prop_assert!((captions[0].display_end_secs - end).abs() < 1e-9);
    }

    #[test]
    fn indices_match_input_positions(count in 0usize..50) {
        let segments: Vec<SpeechSegment> = (0..count)
            .map(|i| SpeechSegment::new(i as f64, i as f64 + 0.5, format!("seg {i}")))
            .collect();
        let builder = CaptionTrackBuilder::new(1.0).unwrap();
        let captions = builder.build(&segments);
        prop_assert_eq!(captions.len(), count);
        for (i, caption) in captions.iter().enumerate() {
            prop_assert_eq!(caption.index as usize, i + 1);
        }
    }

    #[test]
    fn formatted_time_shape_is_stable(secs in 0.0f64..359_999.0) {
        let formatted = format_srt_time(secs);
        let parts: Vec<&str> = formatted.split(&[':', ','][..]).collect();
        prop_assert_eq!(parts.len(), 4);
        prop_assert!(parts[0].len() >= 2);
        prop_assert_eq!(parts[1].len(), 2);
        prop_assert_eq!(parts[2].len(), 2);
        prop_assert_eq!(parts[3].len(), 3);
        prop_assert!(parts[1].parse::<u32>().unwrap() < 60);
        prop_assert!(parts[2].parse::<u32>().unwrap() < 60);
    }

    #[test]
    fn rendered_block_count_matches_segment_count(count in 0usize..20) {
        let segments: Vec<SpeechSegment> = (0..count)
            .map(|i| SpeechSegment::new(i as f64 * 2.0, i as f64 * 2.0 + 1.5, "line"))
            .collect();
        let builder = CaptionTrackBuilder::new(1.0).unwrap();
        let srt = CaptionTrackBuilder::render(&builder.build(&segments));
        let blocks = srt.split("\n\n").filter(|b| !b.is_empty()).count();
        prop_assert_eq!(blocks, count);
    }
}
