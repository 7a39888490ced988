//! Caption overlay burning.
//!
//! Takes a finished caption track and an input video and produces a new
//! video with the captions rendered into every frame, via one transcoder
//! invocation with a `subtitles=` filter directive.

use std::path::{Path, PathBuf};

use subburn_common::error::{SubburnError, SubburnResult};

use crate::transcode::{TranscodeDirective, Transcoder};

/// Fixed rendering attributes for burned-in captions.
///
/// Colours use the libass `&HAABBGGRR` hex form. The style is chosen up
/// front and never derived from caption content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayStyle {
    pub font_name: String,
    pub primary_colour: String,
    pub secondary_colour: String,
    pub outline_colour: String,
    pub back_colour: String,
    pub border_style: u8,
    pub outline: u8,
    pub shadow: u8,
    pub alignment: u8,
    pub margin_l: u32,
    pub margin_r: u32,
    pub margin_v: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_name: "Tahoma".to_string(),
            primary_colour: "&H0000FFFF".to_string(),
            secondary_colour: "&H00000000".to_string(),
            outline_colour: "&H00000000".to_string(),
            back_colour: "&H00000000".to_string(),
            border_style: 1,
            outline: 1,
            shadow: 0,
            alignment: 2,
            margin_l: 10,
            margin_r: 10,
            margin_v: 50,
        }
    }
}

impl OverlayStyle {
    /// Render the libass `force_style` clause.
    pub fn force_style(&self) -> String {
        format!(
            "FontName={},PrimaryColour={},SecondaryColour={},OutlineColour={},BackColour={},BorderStyle={},Outline={},Shadow={},Alignment={},MarginL={},MarginR={},MarginV={}",
            self.font_name,
            self.primary_colour,
            self.secondary_colour,
            self.outline_colour,
            self.back_colour,
            self.border_style,
            self.outline,
            self.shadow,
            self.alignment,
            self.margin_l,
            self.margin_r,
            self.margin_v,
        )
    }
}

/// Burns a caption track into a video through an external transcoder.
pub struct CaptionOverlayMerger {
    transcoder: Box<dyn Transcoder>,
    style: OverlayStyle,
}

impl CaptionOverlayMerger {
    /// Create a merger with the default overlay style.
    pub fn new(transcoder: Box<dyn Transcoder>) -> Self {
        Self::with_style(transcoder, OverlayStyle::default())
    }

    pub fn with_style(transcoder: Box<dyn Transcoder>, style: OverlayStyle) -> Self {
        Self { transcoder, style }
    }

    /// Burn the caption track at `captions_path` into `video_path`,
    /// writing the result to `output_path` (overwriting it).
    ///
    /// The track is read as UTF-8 and copied verbatim to a fixed temp-dir
    /// file first: the `subtitles=` filter string is fragile with respect
    /// to special characters in arbitrary user paths, and a controlled
    /// temp name removes that class of failure. The copy is deleted on
    /// every exit path. The fixed name means concurrent merges collide;
    /// callers run at most one merge at a time.
    pub fn merge(
        &self,
        video_path: &Path,
        captions_path: &Path,
        output_path: &Path,
    ) -> SubburnResult<PathBuf> {
        if !captions_path.exists() {
            return Err(SubburnError::FileNotFound {
                path: captions_path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(captions_path)?;
        let content = String::from_utf8(bytes).map_err(|_| SubburnError::Encoding {
            path: captions_path.to_path_buf(),
        })?;

        let temp = TempTrack::write(temp_track_path(), &content)?;

        let filter = format!(
            "subtitles={}:force_style='{}'",
            escape_filter_path(&temp.path),
            self.style.force_style(),
        );

        tracing::info!(
            video = %video_path.display(),
            captions = %captions_path.display(),
            output = %output_path.display(),
            backend = self.transcoder.name(),
            "Burning captions"
        );

        self.transcoder.transcode(
            video_path,
            output_path,
            &TranscodeDirective::VideoFilter(filter),
        )?;

        Ok(output_path.to_path_buf())
    }
}

/// Well-known location of the transient caption-track copy.
pub fn temp_track_path() -> PathBuf {
    std::env::temp_dir().join("subburn-overlay-captions.srt")
}

/// Escape a path for use inside an ffmpeg filter argument.
fn escape_filter_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace('=', "\\=")
}

/// Caption-track copy that is removed when it goes out of scope,
/// regardless of whether the transcoder succeeded.
struct TempTrack {
    path: PathBuf,
}

impl TempTrack {
    fn write(path: PathBuf, content: &str) -> SubburnResult<Self> {
        std::fs::write(&path, content)?;
        Ok(Self { path })
    }
}

impl Drop for TempTrack {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove caption copy");
        }
    }
}
