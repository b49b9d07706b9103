mod bootstrap;

use anyhow::{Context, Result};
use clap::Parser;
use report_core::models::ReportSink;
use report_core::settings::Settings;
use report_runtime::combiner::run_batch;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("Energy report v{} starting", env!("CARGO_PKG_VERSION"));

    let batch = settings.resolve_batch()?;
    let outcome = run_batch(&batch).context("report generation failed")?;

    tracing::info!(
        "{} section(s), {} bytes",
        outcome.sections,
        outcome.bytes
    );

    // Streamed reports are the output; only confirm file writes.
    if let ReportSink::File(path) = &outcome.destination {
        println!("Report successfully written to {}", path.display());
    }

    Ok(())
}
