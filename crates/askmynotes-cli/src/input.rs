//! Where the notes text comes from.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Resolve notes from an inline value, a file, or stdin, in that order.
///
/// An empty result is returned as-is; rejecting blank notes is the
/// session's job.
pub fn read_notes(inline: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(notes) = inline {
        return Ok(notes);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading notes from {}", path.display()));
    }
    read_from(std::io::stdin().lock())
}

fn read_from(mut reader: impl Read) -> anyhow::Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("reading notes from stdin")?;
    Ok(buf)
}
