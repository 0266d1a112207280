//! Marked regions in text files.
//!
//! A region is the span from a literal start marker through the next literal
//! end marker. Generated content lives between the two marker lines:
//!
//! ```text
//! //APP_VERSIONER_BUILD_PATH_START
//! $build-path: "/dist/1-0-0/";
//! //APP_VERSIONER_BUILD_PATH_END
//! ```
//!
//! Only `?` and `*` are escaped when a marker becomes part of the search
//! pattern. Markers containing other pattern metacharacters either fail to
//! compile (`AppVersionerError::Pattern`) or match more loosely than written.
//!
//! Read-modify-write of a file is not atomic; concurrent callers targeting the
//! same file must serialize externally.

use std::ops::Range;

use regex::{NoExpand, Regex};

use crate::error::Result;

/// Escapes `?` and `*` so they match literally.
pub fn escape_marker(marker: &str) -> String {
    marker.replace('?', "\\?").replace('*', "\\*")
}

fn region_pattern(start_marker: &str, end_marker: &str) -> Result<Regex> {
    let pattern = format!(
        "{}[\\s\\S]*?{}",
        escape_marker(start_marker),
        escape_marker(end_marker)
    );
    Ok(Regex::new(&pattern)?)
}

/// Byte range of the first complete region, markers included.
pub fn find_region(
    text: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<Option<Range<usize>>> {
    let rx = region_pattern(start_marker, end_marker)?;
    Ok(rx.find(text).map(|m| m.range()))
}

/// Replaces the interior of the region with `interior`.
///
/// When neither marker occurs in `text`, an empty region is first prepended,
/// followed by a blank line. When only one marker occurs there is no complete
/// region to match and the text comes back unchanged.
pub fn upsert_region(
    text: &str,
    start_marker: &str,
    end_marker: &str,
    interior: &str,
) -> Result<String> {
    let mut contents = text.to_string();
    if !contents.contains(start_marker) && !contents.contains(end_marker) {
        contents = format!("{}\n{}\n\n{}", start_marker, end_marker, contents);
    }

    let rx = region_pattern(start_marker, end_marker)?;
    let replacement = format!("{}\n{}\n{}", start_marker, interior, end_marker);
    let replaced = rx.replace(&contents, NoExpand(replacement.as_str()));
    Ok(replaced.into_owned())
}

/// The assignment line written into a region: `<name>: "<value>";`
pub fn variable_line(variable_name: &str, value: &str) -> String {
    format!("{}: \"{}\";", variable_name, value)
}

/// Sets `variable_name` to `value` inside the marked region. Idempotent.
pub fn splice_variable(
    text: &str,
    variable_name: &str,
    value: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<String> {
    let line = variable_line(variable_name, value);
    upsert_region(text, start_marker, end_marker, &line)
}
