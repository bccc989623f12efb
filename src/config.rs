//! The fixed target and markers the tool operates on.

use std::path::PathBuf;

/// File rewritten by the binary, relative to the working directory.
pub const DEFAULT_TARGET_PATH: &str = "src/lib/supabaseService.ts";

/// A line containing this text opens the region to remove.
pub const DEFAULT_START_MARKER: &str = "// export const getClinic =";

/// A line containing this text closes the region. The line itself is kept.
pub const DEFAULT_END_MARKER: &str = "// Clinic Expenses";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub path: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
}

impl StripConfig {
    pub fn new(
        path: impl Into<PathBuf>,
        start_marker: impl Into<String>,
        end_marker: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_PATH, DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}
