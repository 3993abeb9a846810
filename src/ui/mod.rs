//! Terminal and status-bar output
//!
//! Everything printed to stdout goes through here so that `--waybar`
//! output stays a single JSON object per invocation. Logs go to stderr.

mod output;

pub use output::{plain_line, render, step_ok, tooltip, WaybarOutput};
