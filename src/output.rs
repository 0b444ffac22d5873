//! Report formatting.
//!
//! Every function here appends to a [`Write`] sink. The layout is fixed: a
//! header block followed by one block per visited file, each opened by a
//! [`SEPARATOR_WIDTH`]-wide line of `=`.

use crate::error::{ExplorerError, FileProcessingError, SetupError};
use crate::options::ExploreOptions;
use crate::types::{ExploreSummary, FileContent, FileRecord};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SEPARATOR_WIDTH: usize = 50;

pub const TITLE: &str = "ファイル探索レポート";
pub const BINARY_MARKER: &str = "[バイナリファイル - 内容は表示できません]";
pub const UNDECODABLE_MARKER: &str =
    "[バイナリファイルまたは未対応のエンコーディング - 内容は表示できません]";

const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILE_NAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Name of the report file for a run started at `started_at`,
/// e.g. `file_explorer_20240102_030405.txt`.
pub fn report_file_name(started_at: &DateTime<Local>) -> String {
    format!(
        "file_explorer_{}.txt",
        started_at.format(FILE_NAME_TIME_FORMAT)
    )
}

/// Formats `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Creates (or truncates) `path` and writes the whole report for `options`
/// into it. The file is closed when this returns, on success or failure.
pub fn write_report_to_file(
    options: &ExploreOptions,
    path: impl AsRef<Path>,
) -> Result<ExploreSummary, ExplorerError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExplorerError::OutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut sink = BufWriter::new(file);
    let summary = crate::explore(options, &mut sink)?;
    sink.flush()?;
    Ok(summary)
}

// ----------------------- Internal formatting -----------------------

pub(crate) fn write_title<W: Write>(
    sink: &mut W,
    started_at: &DateTime<Local>,
) -> std::io::Result<()> {
    writeln!(sink, "{TITLE}")?;
    writeln!(sink, "実行日時: {}", started_at.format(HEADER_TIME_FORMAT))
}

pub(crate) fn write_root<W: Write>(sink: &mut W, absolute_root: &Path) -> std::io::Result<()> {
    writeln!(sink, "探索ディレクトリ: {}", absolute_root.display())?;
    writeln!(sink, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    writeln!(sink)
}

fn open_record<W: Write>(sink: &mut W) -> std::io::Result<()> {
    write!(sink, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))
}

pub(crate) fn write_record<W: Write>(
    sink: &mut W,
    record: &FileRecord,
) -> std::io::Result<()> {
    open_record(sink)?;
    writeln!(sink, "ファイル名: {}", record.name)?;
    writeln!(sink, "絶対パス: {}", record.absolute.display())?;
    writeln!(sink, "相対パス: {}", record.relative.display())?;
    writeln!(sink, "サイズ: {} bytes", group_thousands(record.size))?;
    writeln!(sink, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    writeln!(sink, "ファイル内容:")?;
    match &record.content {
        FileContent::Text(text) => writeln!(sink, "{text}"),
        FileContent::Binary => writeln!(sink, "{BINARY_MARKER}"),
        FileContent::Undecodable => writeln!(sink, "{UNDECODABLE_MARKER}"),
        FileContent::Unreadable(message) => {
            writeln!(sink, "[ファイル内容の読み取りエラー: {message}]")
        }
    }
}

/// `fallback` names the file when the error itself carries no path.
pub(crate) fn write_processing_error<W: Write>(
    sink: &mut W,
    error: &FileProcessingError,
    fallback: &Path,
) -> std::io::Result<()> {
    let path = error.path().unwrap_or(fallback);
    open_record(sink)?;
    writeln!(
        sink,
        "[ファイル {} の処理中にエラーが発生: {}]",
        path.display(),
        error
    )
}

pub(crate) fn write_setup_error<W: Write>(
    sink: &mut W,
    error: &SetupError,
) -> std::io::Result<()> {
    writeln!(sink, "エラーが発生しました: {error}")
}
