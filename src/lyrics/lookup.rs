//! Lookup of the lyric line active at a playback position

use super::parser::LyricLine;
use crate::error::{LyriflowError, LyriflowResult};

/// Return the text of the line active at `position` seconds
///
/// Scans forward and keeps the last line whose timestamp is not after
/// `position`, stopping at the first line that starts later. Lines are
/// expected in non-decreasing time order; out-of-order input is not
/// detected. An empty string is a valid result meaning "instrumental".
/// A NaN position matches no line.
pub fn line_at(lines: &[LyricLine], position: f64) -> LyriflowResult<&str> {
    if position.is_nan() {
        return Err(LyriflowError::NoApplicableLine(position));
    }

    let mut current = None;

    for line in lines {
        if line.timestamp() > position {
            break;
        }
        current = Some(line);
    }

    current
        .map(LyricLine::text)
        .ok_or(LyriflowError::NoApplicableLine(position))
}
