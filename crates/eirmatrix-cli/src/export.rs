//! Write matrix rows and summaries to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use clap::ValueEnum;
use eirmatrix_core::{MatrixRow, MatrixSummary, responsiveness};
use parquet::arrow::ArrowWriter;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed camelCase JSON.
    Json,
    /// Arrow IPC file.
    Arrow,
    Parquet,
}

/// Rows as a JSON array, or a batch in the matrix row schema.
pub fn write_rows(rows: &[MatrixRow], format: ExportFormat, path: &Path) -> anyhow::Result<()> {
    match format {
        ExportFormat::Json => write_json(rows, path)?,
        ExportFormat::Arrow => write_ipc(&responsiveness::rows_to_batch(rows)?, path)?,
        ExportFormat::Parquet => write_parquet(&responsiveness::rows_to_batch(rows)?, path)?,
    }
    info!(rows = rows.len(), format = ?format, path = %path.display(), "exported matrix");
    Ok(())
}

/// The summary as a JSON object, or a one-row batch in the summary schema.
pub fn write_summary(
    summary: &MatrixSummary,
    format: ExportFormat,
    path: &Path,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Json => write_json(summary, path)?,
        ExportFormat::Arrow => write_ipc(&responsiveness::summary_to_batch(summary)?, path)?,
        ExportFormat::Parquet => {
            write_parquet(&responsiveness::summary_to_batch(summary)?, path)?
        }
    }
    info!(
        percent = summary.percent_addressed,
        format = ?format,
        path = %path.display(),
        "exported summary"
    );
    Ok(())
}

// ── Writers ──

fn create(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("creating {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_ipc(batch: &RecordBatch, path: &Path) -> anyhow::Result<()> {
    let mut writer = FileWriter::try_new(create(path)?, &batch.schema())?;
    writer.write(batch)?;
    writer.finish()?;
    Ok(())
}

fn write_parquet(batch: &RecordBatch, path: &Path) -> anyhow::Result<()> {
    let mut writer = ArrowWriter::try_new(create(path)?, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}
