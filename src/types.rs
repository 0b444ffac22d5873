use std::path::PathBuf;

/// What was found when reading a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Valid UTF-8 with no NUL byte in the sniffed prefix.
    Text(String),
    /// A NUL byte was found in the first [`SNIFF_LEN`](crate::SNIFF_LEN) bytes.
    Binary,
    /// No NUL byte in the prefix, but the file is not valid UTF-8.
    Undecodable,
    /// Opening or reading failed; holds the error description.
    Unreadable(String),
}

/// One visited file, ready to be written to the report.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Base name of the file.
    pub name: String,
    /// Absolute root joined with [`relative`](Self::relative).
    pub absolute: PathBuf,
    /// Path relative to the explored root.
    pub relative: PathBuf,
    /// Size in bytes at the time it was visited.
    pub size: u64,
    pub content: FileContent,
}

/// Counts describing a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExploreSummary {
    /// File records written, whatever their content classification.
    pub files: usize,
    pub binary: usize,
    pub undecodable: usize,
    pub unreadable: usize,
    /// Per-file processing and walk errors.
    pub errors: usize,
    /// Set when setup failed and no files were visited.
    pub aborted: bool,
}

impl ExploreSummary {
    pub(crate) fn record(&mut self, content: &FileContent) {
        self.files += 1;
        match content {
            FileContent::Text(_) => {}
            FileContent::Binary => self.binary += 1,
            FileContent::Undecodable => self.undecodable += 1,
            FileContent::Unreadable(_) => self.unreadable += 1,
        }
    }
}
