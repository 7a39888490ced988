//! SubBurn Media Pipeline
//!
//! External media operations behind a narrow capability boundary:
//! - **Transcoding:** ffmpeg-backed audio extraction and filtered
//!   re-encoding
//! - **Overlay burning:** rendering a caption track into the pixel stream
//!   of a video

pub mod overlay;
pub mod transcode;

pub use overlay::*;
pub use transcode::*;
