//! SubBurn Caption Core
//!
//! Transforms recognized speech into a timed SRT caption track:
//! - **Segments:** recognizer output with start/end times and text
//! - **Track building:** minimum-display-duration adjustment and 1-based
//!   indexing in input order
//! - **Serialization:** SRT block output, written atomically

pub mod segment;
pub mod track;

pub use segment::*;
pub use track::*;
