use std::fs;
use std::io;
use std::ops::Range;
use std::path::Path;

use thiserror::Error;

/// Heading that opens the spell-description section of the manual.
pub const SECTION_START: &str = "### Descripciones de conjuros";
/// First heading after the spells; everything from here on is ignored.
pub const SECTION_END: &str = "### Trampas";

#[derive(Debug, Error)]
pub enum ManualError {
    #[error("cannot read manual {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("spell section boundaries not found (start={start:?}, end={end:?})")]
    Bounds {
        start: Option<usize>,
        end: Option<usize>,
    },
}

/// Read the whole manual into memory, one element per line.
pub fn load_lines(path: &Path) -> Result<Vec<String>, ManualError> {
    let content = fs::read_to_string(path).map_err(|source| ManualError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content.lines().map(|l| l.to_string()).collect())
}

/// Find the line range strictly between the first `start_marker` line and the
/// first `end_marker` line after it. Markers are compared against the trimmed
/// line and are themselves excluded from the range.
pub fn locate_section(
    lines: &[String],
    start_marker: &str,
    end_marker: &str,
) -> Result<Range<usize>, ManualError> {
    let start = lines.iter().position(|l| l.trim() == start_marker);
    let end = start.and_then(|s| {
        lines[s + 1..]
            .iter()
            .position(|l| l.trim() == end_marker)
            .map(|off| s + 1 + off)
    });
    match (start, end) {
        (Some(s), Some(e)) => Ok(s + 1..e),
        _ => Err(ManualError::Bounds { start, end }),
    }
}
