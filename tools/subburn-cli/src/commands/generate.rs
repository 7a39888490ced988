//! Transcribe a video or audio file into an SRT caption track.

use std::path::{Path, PathBuf};

use subburn_caption::CaptionTrackBuilder;
use subburn_common::config::AppConfig;
use subburn_common::error::{SubburnError, SubburnResult};
use subburn_media::{FfmpegTranscoder, TranscodeDirective, Transcoder};
use subburn_transcribe::{
    is_supported_language, SpeechRecognizer, TranscriptionConfig, WhisperCliRecognizer,
    WhisperModel,
};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "flv"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];

pub fn run(
    input: PathBuf,
    output: PathBuf,
    language: Option<String>,
    model: Option<String>,
    min_display_secs: Option<f64>,
) -> anyhow::Result<()> {
    let mut config = AppConfig::load();
    let language = language.unwrap_or_else(|| config.language.clone());
    let model = model.unwrap_or_else(|| config.model.clone());
    let min_display_secs = min_display_secs.unwrap_or(config.min_display_secs);

    generate_track(&input, &output, &language, &model, min_display_secs)?;

    // Remember the chosen preferences for next time.
    config.language = language;
    config.model = model;
    config.min_display_secs = min_display_secs;
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save preferences: {e}");
    }

    println!("Caption track written to {}", output.display());
    Ok(())
}

/// Shared generate pipeline: extract audio, transcribe, write the track.
pub fn generate_track(
    input: &Path,
    output: &Path,
    language: &str,
    model: &str,
    min_display_secs: f64,
) -> anyhow::Result<()> {
    validate_input_extension(input)?;
    if !is_supported_language(language) {
        return Err(
            SubburnError::validation(format!("Unsupported language code: {language}")).into(),
        );
    }
    let model: WhisperModel = model.parse()?;
    let builder = CaptionTrackBuilder::new(min_display_secs)?;

    let transcoder = FfmpegTranscoder::new();
    if !transcoder.is_available() {
        return Err(SubburnError::unsupported("ffmpeg not found in PATH").into());
    }

    println!("Transcribing: {}", input.display());
    println!("  Language: {language}");
    println!("  Model: {}", model.as_str());

    let audio_path = std::env::temp_dir().join("subburn-extract.wav");
    transcoder.transcode(input, &audio_path, &TranscodeDirective::ExtractAudio)?;

    let transcription = TranscriptionConfig {
        model,
        language: Some(language.to_string()),
        ..TranscriptionConfig::default()
    };
    let recognizer = WhisperCliRecognizer::new();
    let result = recognizer.transcribe(&audio_path, &transcription);

    // The intermediate wav is transient regardless of outcome.
    std::fs::remove_file(&audio_path).ok();

    let segments = result?;
    println!("  Recognized {} segment(s)", segments.len());

    builder.write_track(&segments, output)?;
    Ok(())
}

fn validate_input_extension(input: &Path) -> SubburnResult<()> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if VIDEO_EXTENSIONS.contains(&extension.as_str())
        || AUDIO_EXTENSIONS.contains(&extension.as_str())
    {
        Ok(())
    } else {
        Err(SubburnError::validation(format!(
            "Unsupported file type: {}. Use video ({}) or audio ({})",
            input.display(),
            VIDEO_EXTENSIONS.join(", "),
            AUDIO_EXTENSIONS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_validation() {
        assert!(validate_input_extension(Path::new("clip.mp4")).is_ok());
        assert!(validate_input_extension(Path::new("clip.MKV")).is_ok());
        assert!(validate_input_extension(Path::new("voice.wav")).is_ok());
        assert!(validate_input_extension(Path::new("notes.txt")).is_err());
        assert!(validate_input_extension(Path::new("noext")).is_err());
    }
}
