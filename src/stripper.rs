//! The line filter that drops marker-delimited regions.
//!
//! Each line is checked against the start marker, then the end marker, and
//! only then against the skip state. A line carrying both markers therefore
//! toggles skipping on and straight back off, and is kept. The end-marker
//! line of a region is kept as well.

/// Result of stripping a document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub content: String,
    pub lines_read: usize,
    pub lines_removed: usize,
    /// At least one line contained the start marker.
    pub start_marker_found: bool,
    /// The last start marker was never followed by an end marker, so the
    /// removal ran to the end of the document.
    pub unterminated: bool,
}

impl StripOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.lines_removed == 0
    }
}

struct Scan<'a> {
    kept: Vec<&'a str>,
    skipping: bool,
    start_marker_found: bool,
}

fn scan<'a, I>(lines: I, start_marker: &str, end_marker: &str) -> Scan<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept = Vec::new();
    let mut skipping = false;
    let mut start_marker_found = false;

    for (index, line) in lines.into_iter().enumerate() {
        if line.contains(start_marker) {
            log::trace!("start marker on line {}", index + 1);
            skipping = true;
            start_marker_found = true;
        }

        if line.contains(end_marker) {
            log::trace!("end marker on line {}", index + 1);
            skipping = false;
        }

        if !skipping {
            kept.push(line);
        }
    }

    Scan {
        kept,
        skipping,
        start_marker_found,
    }
}

/// Returns the lines that survive a single pass over `lines`.
pub fn strip_lines<'a, I>(lines: I, start_marker: &str, end_marker: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    scan(lines, start_marker, end_marker).kept
}

/// Strips `content`, keeping every retained line byte-for-byte, terminator
/// included.
pub fn strip_content(content: &str, start_marker: &str, end_marker: &str) -> StripOutcome {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let lines_read = lines.len();

    let Scan {
        kept,
        skipping,
        start_marker_found,
    } = scan(lines, start_marker, end_marker);

    StripOutcome {
        lines_read,
        lines_removed: lines_read - kept.len(),
        start_marker_found,
        unterminated: skipping,
        content: kept.concat(),
    }
}
