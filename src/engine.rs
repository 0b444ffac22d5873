use crate::error::{ContentReadError, ExplorerError, FileProcessingError, SetupError};
use crate::options::ExploreOptions;
use crate::output;
use crate::types::{ExploreSummary, FileContent, FileRecord};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Number of leading bytes inspected for a NUL byte when deciding whether a
/// file is binary.
///
/// This is a heuristic: text in encodings that contain NUL bytes (UTF-16,
/// UTF-32) is reported as binary.
pub const SNIFF_LEN: u64 = 1024;

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);
        Self {
            inner: builder.build(),
        }
    }

    /// Plain files in enumeration order, plus any errors the walk hit.
    fn files(self) -> impl Iterator<Item = Result<PathBuf, FileProcessingError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.path().is_file() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(FileProcessingError::Walk {
                path: walk_error_path(&e).map(Path::to_path_buf),
                message: walk_error_message(&e),
            })),
        })
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Text of the underlying error, without the path prefix that
/// `WithPath` adds; the marker already names the path.
fn walk_error_message(err: &ignore::Error) -> String {
    match err {
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => walk_error_message(err),
        _ => err.to_string(),
    }
}

fn read_file_content(path: &Path) -> Result<FileContent, ContentReadError> {
    let file = File::open(path).map_err(|e| ContentReadError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(SNIFF_LEN as usize);
    reader
        .by_ref()
        .take(SNIFF_LEN)
        .read_to_end(&mut bytes)
        .map_err(|e| ContentReadError::io(path, e))?;
    if bytes.contains(&0) {
        return Ok(FileContent::Binary);
    }
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ContentReadError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| ContentReadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileContent::Text(text))
}

/// Reads `path` and decides how its content appears in the report.
///
/// Never fails: read and decode errors become [`FileContent::Unreadable`] and
/// [`FileContent::Undecodable`].
pub fn classify_content(path: &Path) -> FileContent {
    match read_file_content(path) {
        Ok(content) => content,
        Err(ContentReadError::Decode { .. }) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Undecodable file: {}", path.display());
            FileContent::Undecodable
        }
        Err(e @ ContentReadError::Io { .. }) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}

fn build_record(
    root: &Path,
    absolute_root: &Path,
    path: PathBuf,
) -> Result<FileRecord, FileProcessingError> {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Err(FileProcessingError::NoFileName { path }),
    };
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => return Err(FileProcessingError::OutsideRoot { path }),
    };
    let size = fs::metadata(&path)
        .map_err(|e| FileProcessingError::metadata(&path, e))?
        .len();
    let content = classify_content(&path);
    Ok(FileRecord {
        name,
        absolute: absolute_root.join(&relative),
        relative,
        size,
        content,
    })
}

fn check_root(root: &Path) -> Result<(), SetupError> {
    let metadata = fs::metadata(root).map_err(|source| SetupError::Access {
        root: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(SetupError::NotADirectory {
            root: root.to_path_buf(),
        });
    }
    Ok(())
}

fn abort<W: Write>(sink: &mut W, error: SetupError) -> Result<ExploreSummary, ExplorerError> {
    #[cfg(feature = "logging")]
    tracing::warn!("Exploration aborted: {}", error);
    output::write_setup_error(sink, &error)?;
    Ok(ExploreSummary {
        aborted: true,
        ..Default::default()
    })
}

/// Walks `options.root` and appends the full report to `sink`.
///
/// Setup failures, per-file failures and unreadable content are written into
/// the report rather than returned. The only error is a failure to write to
/// `sink`.
pub fn explore<W: Write>(
    options: &ExploreOptions,
    sink: &mut W,
) -> Result<ExploreSummary, ExplorerError> {
    let root = options.root.as_path();
    #[cfg(feature = "logging")]
    tracing::info!("Starting exploration of {}", root.display());

    output::write_title(sink, &options.started_at)?;
    let absolute_root = match std::path::absolute(root) {
        Ok(path) => path,
        Err(source) => {
            return abort(
                sink,
                SetupError::Absolute {
                    root: root.to_path_buf(),
                    source,
                },
            );
        }
    };
    output::write_root(sink, &absolute_root)?;
    if let Err(e) = check_root(root) {
        return abort(sink, e);
    }

    let mut summary = ExploreSummary::default();
    for entry in Walker::new(root).files() {
        match entry.and_then(|path| build_record(root, &absolute_root, path)) {
            Ok(record) => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "Recording {} ({} bytes)",
                    record.relative.display(),
                    record.size
                );
                output::write_record(sink, &record)?;
                summary.record(&record.content);
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Failed to process entry: {}", e);
                output::write_processing_error(sink, &e, root)?;
                summary.errors += 1;
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::info!(
        "Exploration finished: {} files, {} errors",
        summary.files,
        summary.errors
    );
    Ok(summary)
}
