//! Whisper.cpp CLI backend.
//!
//! Runs speech-to-text locally (no cloud APIs) by shelling out to a
//! whisper.cpp binary and parsing its timed stdout lines.

use std::path::Path;
use std::process::Command;

use subburn_caption::SpeechSegment;
use subburn_common::error::{SubburnError, SubburnResult};

use crate::recognizer::{SpeechRecognizer, TranscriptionConfig};

/// Recognizer backed by a whisper.cpp CLI binary on PATH.
#[derive(Debug, Clone)]
pub struct WhisperCliRecognizer {
    binary: String,
}

impl WhisperCliRecognizer {
    pub fn new() -> Self {
        Self {
            binary: "whisper-cli".to_string(),
        }
    }

    /// Use a custom binary name or path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for WhisperCliRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechRecognizer for WhisperCliRecognizer {
    fn transcribe(
        &self,
        audio_path: &Path,
        config: &TranscriptionConfig,
    ) -> SubburnResult<Vec<SpeechSegment>> {
        if !audio_path.exists() {
            return Err(SubburnError::FileNotFound {
                path: audio_path.to_path_buf(),
            });
        }

        let model_path = config.model_dir.join(config.model.filename());
        if !model_path.exists() {
            return Err(SubburnError::FileNotFound { path: model_path });
        }

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-m")
            .arg(&model_path)
            .arg("-f")
            .arg(audio_path)
            .arg("-t")
            .arg(config.threads.to_string());
        if let Some(language) = &config.language {
            cmd.arg("-l").arg(language);
        }

        tracing::info!(
            path = %audio_path.display(),
            model = ?config.model,
            language = ?config.language,
            "Starting transcription"
        );

        let started = std::time::Instant::now();
        let output = cmd
            .output()
            .map_err(|e| SubburnError::transcription(format!("Failed to run whisper: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SubburnError::transcription(format!(
                "whisper failed (status {}): {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let segments = parse_whisper_output(&stdout);

        tracing::info!(
            segments = segments.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Transcription complete"
        );
        Ok(segments)
    }

    fn is_available(&self) -> bool {
        Command::new("sh")
            .arg("-c")
            .arg(format!("command -v {} >/dev/null 2>&1", self.binary))
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &str {
        "whisper-cli"
    }
}

/// Parse whisper.cpp stdout into timed segments.
///
/// Timed lines look like:
/// `[00:00:00.000 --> 00:00:02.540]   Hello world`
/// Anything else (banners, progress noise) is skipped.
pub fn parse_whisper_output(stdout: &str) -> Vec<SpeechSegment> {
    stdout.lines().filter_map(parse_timed_line).collect()
}

fn parse_timed_line(line: &str) -> Option<SpeechSegment> {
    let rest = line.trim_start().strip_prefix('[')?;
    let (times, text) = rest.split_once(']')?;
    let (start, end) = times.split_once(" --> ")?;
    Some(SpeechSegment::new(
        parse_timestamp(start.trim())?,
        parse_timestamp(end.trim())?,
        text.trim(),
    ))
}

/// Parse `HH:MM:SS.mmm` into seconds.
fn parse_timestamp(value: &str) -> Option<f64> {
    let mut parts = value.split(':');
    let hours: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next()?.parse().ok()?;
    let seconds: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timed_lines() {
        let stdout = "\
whisper_init: loading model\n\
[00:00:00.000 --> 00:00:02.540]   Hello world\n\
[00:00:02.540 --> 00:00:05.000]   Second line\n\
\n\
whisper_print_timings: total time\n";
        let segments = parse_whisper_output(stdout);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].start_secs - 0.0).abs() < 1e-9);
        assert!((segments[0].end_secs - 2.54).abs() < 1e-9);
        assert_eq!(segments[0].text, "Hello world");
        assert_eq!(segments[1].text, "Second line");
    }

    #[test]
    fn test_parse_timestamp_over_an_hour() {
        let segments =
            parse_whisper_output("[01:02:05.400 --> 01:02:07.000]  late in the recording\n");
        assert!((segments[0].start_secs - 3725.4).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let segments = parse_whisper_output("[bad line]\n[00:00 --> 00:01] short stamps\n");
        assert!(segments.is_empty());
    }

    #[test]
    fn test_empty_output_is_empty_segments() {
        assert!(parse_whisper_output("").is_empty());
    }
}
