//! Report persistence.
//!
//! A file destination is replaced atomically: the text goes to a sibling
//! temporary file which is then renamed over the target, so a failed write
//! never leaves a truncated report behind.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use report_core::error::{ReportError, Result};
use report_core::models::ReportSink;

/// Write `text` to `sink`, replacing any previous content.
///
/// `stream` opens the writer for [`ReportSink::Stdout`] and is only called
/// for that sink.
pub fn write_report<W, F>(text: &str, sink: &ReportSink, stream: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> W,
{
    match sink {
        ReportSink::File(path) => write_file(path, text),
        ReportSink::Stdout => write_stream(stream(), text),
    }
}

/// Write `text` to an arbitrary stream and flush it.
pub fn write_stream<W: Write>(mut out: W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|source| ReportError::DestinationWrite {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

/// Atomically overwrite the file at `path` with `text`.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    let destination_error = |source| ReportError::DestinationWrite {
        path: path.to_path_buf(),
        source,
    };

    let tmp = temp_path_for(path);
    std::fs::write(&tmp, text).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        destination_error(e)
    })?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(destination_error(e));
    }

    Ok(())
}

/// `summary.txt` -> `summary.txt.tmp`, in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
