//! Check system capabilities.

use subburn_media::{FfmpegTranscoder, Transcoder};
use subburn_transcribe::{SpeechRecognizer, TranscriptionConfig, WhisperCliRecognizer};

pub fn run() -> anyhow::Result<()> {
    println!("SubBurn System Check");
    println!("{}", "=".repeat(50));

    let transcoder = FfmpegTranscoder::new();
    if transcoder.is_available() {
        println!("[OK] Transcoder: {} in PATH", transcoder.name());
    } else {
        println!("[FAIL] Transcoder: ffmpeg not found in PATH");
    }

    let recognizer = WhisperCliRecognizer::new();
    if recognizer.is_available() {
        println!("[OK] Recognizer: {} in PATH", recognizer.name());
    } else {
        println!("[FAIL] Recognizer: whisper-cli not found in PATH");
    }

    let config = TranscriptionConfig::default();
    println!("[OK] Model directory: {}", config.model_dir.display());
    let mut models_found = 0;
    for model in ["tiny", "base", "small", "medium", "large"] {
        let parsed: subburn_transcribe::WhisperModel = model.parse()?;
        let path = config.model_dir.join(parsed.filename());
        if path.exists() {
            println!("     {} (downloaded)", parsed.filename());
            models_found += 1;
        }
    }
    if models_found == 0 {
        println!("[WARN] No whisper models downloaded yet");
    }

    println!();
    if transcoder.is_available() && recognizer.is_available() && models_found > 0 {
        println!("All capabilities are available. SubBurn is ready.");
    } else {
        println!("Some capabilities are missing. See above.");
    }

    Ok(())
}
