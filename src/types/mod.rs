#![allow(dead_code)]

mod call_log;
mod error;
mod lead;
mod tenant;
mod tone;

pub use call_log::*;
pub use error::*;
pub use lead::*;
pub use tenant::*;
pub use tone::*;

/// Normalize user-typed enum input: lowercase, spaces and underscores become dashes.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}
