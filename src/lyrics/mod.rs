//! Time-synchronized lyric model
//!
//! This module provides:
//! - LRC parser turning provider text into ordered [`LyricLine`]s
//! - Time lookup selecting the line active at a playback position

pub mod lookup;
pub mod parser;

pub use lookup::line_at;
pub use parser::{parse_lrc, LyricLine};
