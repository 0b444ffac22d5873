//! # file_explorer
//!
//! `file_explorer` walks a directory tree and writes a single text report
//! listing every file's name, absolute path, relative path, size and, for text
//! files, contents, preceded by a timestamped header.
//!
//! Problems met along the way (an unreadable file, a file that is not UTF-8, a
//! root that does not exist) are written into the report instead of being
//! returned, so a report is always produced. Files whose first
//! [`SNIFF_LEN`] bytes contain a NUL byte are reported as binary.
//!
//! # Features
//!
//! - `logging` (default): Emits diagnostics via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use file_explorer::{ExploreBuilder, explore};
//!
//! let options = ExploreBuilder::new(".").build();
//! let mut report = Vec::new();
//! let summary = explore(&options, &mut report).expect("Failed to write report");
//!
//! println!("{} files recorded", summary.files);
//! print!("{}", String::from_utf8_lossy(&report));
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{SNIFF_LEN, classify_content, explore};
pub use error::{ContentReadError, ExplorerError, FileProcessingError, SetupError};
pub use options::{ExploreBuilder, ExploreOptions};
pub use output::{report_file_name, write_report_to_file};
pub use types::{ExploreSummary, FileContent, FileRecord};
