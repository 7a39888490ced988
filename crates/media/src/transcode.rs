//! Narrow media transcoder capability.
//!
//! The rest of the workspace depends only on: accepts an input path, an
//! output path, and one directive; overwrites the output; reports success
//! or failure. The concrete implementation shells out to ffmpeg.

use std::path::Path;
use std::process::Command;

use subburn_common::error::{SubburnError, SubburnResult};

/// A single media operation, passed opaquely to the transcoder.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscodeDirective {
    /// Extract the audio stream as 16 kHz mono PCM WAV (recognizer input).
    ExtractAudio,
    /// Apply one video filter string, re-encoding the pixel stream.
    VideoFilter(String),
}

/// Trait for transcoder backends (ffmpeg, GStreamer, library bindings).
pub trait Transcoder: Send {
    /// Run one transcode operation, overwriting `output`.
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        directive: &TranscodeDirective,
    ) -> SubburnResult<()>;

    /// Check if this backend is available on the system.
    fn is_available(&self) -> bool;

    /// Backend name.
    fn name(&self) -> &str;
}

/// Transcoder backed by an `ffmpeg` binary on PATH.
#[derive(Debug, Default)]
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self
    }

    fn build_args(input: &Path, output: &Path, directive: &TranscodeDirective) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-i".to_string(),
            input.display().to_string(),
        ];

        match directive {
            TranscodeDirective::ExtractAudio => {
                args.extend([
                    "-vn".to_string(),
                    "-acodec".to_string(),
                    "pcm_s16le".to_string(),
                    "-ar".to_string(),
                    "16000".to_string(),
                    "-ac".to_string(),
                    "1".to_string(),
                ]);
            }
            TranscodeDirective::VideoFilter(filter) => {
                args.extend([
                    "-vf".to_string(),
                    filter.clone(),
                    "-c:a".to_string(),
                    "copy".to_string(),
                ]);
            }
        }

        args.push(output.display().to_string());
        args
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        directive: &TranscodeDirective,
    ) -> SubburnResult<()> {
        if !input.exists() {
            return Err(SubburnError::FileNotFound {
                path: input.to_path_buf(),
            });
        }

        let args = Self::build_args(input, output, directive);
        tracing::debug!(args = ?args, "Running ffmpeg");

        let started = std::time::Instant::now();
        let result = Command::new("ffmpeg")
            .args(&args)
            .output()
            .map_err(|e| SubburnError::transcoder(format!("Failed to start ffmpeg: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SubburnError::transcoder(format!(
                "ffmpeg failed (status {}): {}",
                result.status,
                stderr.trim()
            )));
        }

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            elapsed_ms = started.elapsed().as_millis(),
            "Transcode complete"
        );
        Ok(())
    }

    fn is_available(&self) -> bool {
        command_exists("ffmpeg")
    }

    fn name(&self) -> &str {
        "ffmpeg"
    }
}

pub(crate) fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
