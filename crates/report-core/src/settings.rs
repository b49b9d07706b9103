use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::models::{BatchConfig, ReportSink, WeekSource};

/// Destination used when neither the CLI nor a batch file names one.
pub const DEFAULT_OUTPUT: &str = "summary.txt";

/// The fixed batch run when no weeks are configured explicitly.
pub fn default_weeks() -> Vec<WeekSource> {
    vec![
        WeekSource::new(41, "week41.csv"),
        WeekSource::new(42, "week42.csv"),
        WeekSource::new(43, "week43.csv"),
    ]
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Weekly electricity consumption and production report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "energy-report",
    about = "Weekly electricity consumption and production report",
    version
)]
pub struct Settings {
    /// Week and its source file as N=PATH (repeatable; order is report order)
    #[arg(long = "week", value_name = "N=PATH", value_parser = parse_week_arg)]
    pub weeks: Vec<WeekSource>,

    /// JSON batch file listing weeks and an optional output path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report destination file [default: summary.txt]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write the report to standard output instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── BatchFile ──────────────────────────────────────────────────────────────────

/// On-disk batch description loaded via `--config`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct BatchFile {
    #[serde(default)]
    pub weeks: Vec<WeekSource>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl BatchFile {
    /// Load a batch file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!("cannot read batch file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ReportError::Config(format!("invalid batch file {}: {}", path.display(), e))
        })
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Log level after applying `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    /// Merge CLI flags, the optional batch file and the built-in defaults into
    /// a single [`BatchConfig`].
    ///
    /// Weeks: `--week` flags, else the batch file, else [`default_weeks`].
    /// Destination: `--stdout`, else `--output`, else the batch file, else
    /// [`DEFAULT_OUTPUT`].
    pub fn resolve_batch(&self) -> Result<BatchConfig> {
        let file = match &self.config {
            Some(path) => Some(BatchFile::load_from(path)?),
            None => None,
        };

        let weeks = if !self.weeks.is_empty() {
            self.weeks.clone()
        } else if let Some(f) = &file {
            f.weeks.clone()
        } else {
            default_weeks()
        };

        if weeks.is_empty() {
            return Err(ReportError::Config("no weeks configured".to_string()));
        }

        let destination = if self.stdout {
            ReportSink::Stdout
        } else {
            let path = self
                .output
                .clone()
                .or_else(|| file.and_then(|f| f.output))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            ReportSink::File(path)
        };

        tracing::debug!(
            "Resolved batch: {} week(s) -> {}",
            weeks.len(),
            destination
        );

        Ok(BatchConfig { weeks, destination })
    }
}

// ── Helper: parse a `--week N=PATH` value ──────────────────────────────────────

/// Parse `N=PATH` into a [`WeekSource`].
pub fn parse_week_arg(s: &str) -> std::result::Result<WeekSource, String> {
    let (week, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected N=PATH, got \"{}\"", s))?;
    let week: u32 = week
        .trim()
        .parse()
        .map_err(|_| format!("week number must be a non-negative integer, got \"{}\"", week))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing source path for week {}", week));
    }
    Ok(WeekSource::new(week, path))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_batch_file(tmp: &TempDir, json: &str) -> PathBuf {
        let path = tmp.path().join("batch.json");
        std::fs::write(&path, json).expect("write batch file");
        path
    }

    // ── parse_week_arg ────────────────────────────────────────────────────────

    #[test]
    fn test_parse_week_arg_valid() {
        let ws = parse_week_arg("42=data/week42.csv").unwrap();
        assert_eq!(ws, WeekSource::new(42, "data/week42.csv"));
    }

    #[test]
    fn test_parse_week_arg_missing_separator() {
        assert!(parse_week_arg("42").is_err());
    }

    #[test]
    fn test_parse_week_arg_bad_number() {
        let err = parse_week_arg("forty=week.csv").unwrap_err();
        assert!(err.contains("forty"));
    }

    #[test]
    fn test_parse_week_arg_empty_path() {
        assert!(parse_week_arg("42=").is_err());
    }

    // ── test_settings_default_values ─────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["energy-report"]);

        assert!(settings.weeks.is_empty());
        assert!(settings.config.is_none());
        assert!(settings.output.is_none());
        assert!(!settings.stdout);
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_cli_weeks_keep_order() {
        let settings = Settings::parse_from([
            "energy-report",
            "--week",
            "43=c.csv",
            "--week",
            "41=a.csv",
        ]);
        assert_eq!(
            settings.weeks,
            vec![WeekSource::new(43, "c.csv"), WeekSource::new(41, "a.csv")]
        );
    }

    #[test]
    fn test_settings_stdout_conflicts_with_output() {
        let result =
            Settings::try_parse_from(["energy-report", "--stdout", "--output", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_debug_overrides_log_level() {
        let settings = Settings::parse_from(["energy-report", "--debug"]);
        assert_eq!(settings.effective_log_level(), "DEBUG");
    }

    // ── resolve_batch ─────────────────────────────────────────────────────────

    #[test]
    fn test_resolve_batch_defaults() {
        let settings = Settings::parse_from(["energy-report"]);
        let batch = settings.resolve_batch().unwrap();

        assert_eq!(batch.weeks, default_weeks());
        assert_eq!(batch.destination, ReportSink::File(PathBuf::from("summary.txt")));
    }

    #[test]
    fn test_resolve_batch_stdout() {
        let settings = Settings::parse_from(["energy-report", "--stdout"]);
        let batch = settings.resolve_batch().unwrap();
        assert_eq!(batch.destination, ReportSink::Stdout);
    }

    #[test]
    fn test_resolve_batch_from_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_batch_file(
            &tmp,
            r#"{"weeks":[{"week":7,"source":"w7.csv"},{"week":5,"source":"w5.csv"}],"output":"out.txt"}"#,
        );
        let settings = Settings::parse_from([
            "energy-report".into(),
            "--config".into(),
            path.into_os_string(),
        ]);

        let batch = settings.resolve_batch().unwrap();
        assert_eq!(
            batch.weeks,
            vec![WeekSource::new(7, "w7.csv"), WeekSource::new(5, "w5.csv")]
        );
        assert_eq!(batch.destination, ReportSink::File(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_resolve_batch_cli_overrides_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_batch_file(
            &tmp,
            r#"{"weeks":[{"week":7,"source":"w7.csv"}],"output":"out.txt"}"#,
        );
        let settings = Settings::parse_from([
            "energy-report".into(),
            "--config".into(),
            path.into_os_string(),
            "--week".into(),
            "1=one.csv".into(),
            "--output".into(),
            "cli.txt".into(),
        ]);

        let batch = settings.resolve_batch().unwrap();
        assert_eq!(batch.weeks, vec![WeekSource::new(1, "one.csv")]);
        assert_eq!(batch.destination, ReportSink::File(PathBuf::from("cli.txt")));
    }

    #[test]
    fn test_resolve_batch_empty_file_weeks_is_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_batch_file(&tmp, r#"{"weeks":[]}"#);
        let settings = Settings::parse_from([
            "energy-report".into(),
            "--config".into(),
            path.into_os_string(),
        ]);

        let err = settings.resolve_batch().unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_resolve_batch_missing_file_is_error() {
        let settings = Settings::parse_from([
            "energy-report",
            "--config",
            "/tmp/does-not-exist-energy-report/batch.json",
        ]);
        let err = settings.resolve_batch().unwrap_err();
        assert!(err.to_string().contains("cannot read batch file"));
    }

    #[test]
    fn test_batch_file_output_is_optional() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_batch_file(&tmp, r#"{"weeks":[{"week":41,"source":"week41.csv"}]}"#);

        let file = BatchFile::load_from(&path).unwrap();
        assert_eq!(
            file,
            BatchFile {
                weeks: vec![WeekSource::new(41, "week41.csv")],
                output: None,
            }
        );
    }

    #[test]
    fn test_batch_file_invalid_json() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_batch_file(&tmp, "{not json");
        let err = BatchFile::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid batch file"));
    }
}
