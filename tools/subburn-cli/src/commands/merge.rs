//! Burn an SRT caption track into a video.

use std::path::PathBuf;

use subburn_common::error::SubburnError;
use subburn_media::{CaptionOverlayMerger, FfmpegTranscoder, Transcoder};

pub fn run(video: PathBuf, captions: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let transcoder = FfmpegTranscoder::new();
    if !transcoder.is_available() {
        return Err(SubburnError::unsupported("ffmpeg not found in PATH").into());
    }

    println!("Burning captions into: {}", video.display());
    println!("  Captions: {}", captions.display());
    println!("  Output: {}", output.display());

    let merger = CaptionOverlayMerger::new(Box::new(transcoder));
    let written = merger.merge(&video, &captions, &output)?;

    println!("Merged video written to {}", written.display());
    Ok(())
}
