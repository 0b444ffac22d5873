use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Inputs to a single exploration run.
#[derive(Debug, Clone)]
pub struct ExploreOptions {
    /// Directory to walk.
    pub root: PathBuf,
    /// Start of the run. Printed in the report header and used to name the
    /// report file.
    pub started_at: DateTime<Local>,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            started_at: Local::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ExploreBuilder {
    options: ExploreOptions,
}

impl ExploreBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExploreOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn started_at(mut self, at: DateTime<Local>) -> Self {
        self.options.started_at = at;
        self
    }
    pub fn build(self) -> ExploreOptions {
        self.options
    }
}
