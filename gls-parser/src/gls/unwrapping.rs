//! Addition unwrapping
//!
//! Replaces each `\addition[options]{content}` with `content`. This runs on
//! expanded text, so an addition may contain resolved acronyms.

use tracing::debug;

use crate::gls::ast::Segment;
use crate::gls::error::SyntaxError;
use crate::gls::parsing::parse_additions;

/// Unwrap every addition block in `text` by one level.
pub fn unwrap_additions(text: &str) -> Result<String, SyntaxError> {
    let segments = parse_additions(text)?;
    let additions = segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Addition(_)))
        .count();
    debug!(additions, "unwrapping additions");
    Ok(join_segments(&segments))
}

/// Concatenate segments, dropping the addition wrappers.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) | Segment::Addition(text) => text.as_str(),
        })
        .collect()
}
