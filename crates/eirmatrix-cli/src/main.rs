mod display;
mod export;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use eirmatrix_core::{CoverageStatus, load_analysis, load_form_data};
use eirmatrix_engine::{MatrixBuilder, ThinnessPolicy, summarise_matrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::display::MatrixHeader;
use crate::export::ExportFormat;

/// Check how well a BIM Execution Plan responds to an analysed EIR.
#[derive(Parser)]
#[command(name = "eirmatrix", version)]
struct Cli {
    /// EIR analysis JSON: a bare analysis or a stored analysis record.
    #[arg(long, env = "EIRMATRIX_ANALYSIS")]
    analysis: PathBuf,

    /// BEP form data JSON object.
    #[arg(long, env = "EIRMATRIX_FORM")]
    form: Option<PathBuf>,

    /// Answers shorter than this many characters count as thin.
    #[arg(long, env = "EIRMATRIX_THIN_CHARS", default_value_t = 30)]
    thin_chars: usize,

    /// Lists with fewer items than this count as thin.
    #[arg(long, env = "EIRMATRIX_THIN_ITEMS", default_value_t = 2)]
    thin_items: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the matrix grouped by EIR category.
    Show {
        /// Only show rows with this status (addressed, partial, not-addressed).
        #[arg(long)]
        status: Option<CoverageStatus>,
    },
    /// Print every row as a table.
    Table,
    /// Print status totals and the completion percentage.
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Write the matrix rows to a file.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[arg(long, short)]
        output: PathBuf,
        /// Also write the summary, in the same format, to this file.
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("eirmatrix v{}", env!("CARGO_PKG_VERSION"));

    let envelope = load_analysis(&cli.analysis)
        .with_context(|| format!("loading EIR analysis {}", cli.analysis.display()))?;
    let form = cli
        .form
        .as_deref()
        .map(load_form_data)
        .transpose()
        .context("loading BEP form data")?;

    let policy = ThinnessPolicy {
        min_text_chars: cli.thin_chars,
        min_list_items: cli.thin_items,
    };
    let rows = MatrixBuilder::default()
        .with_policy(policy)
        .build(envelope.as_ref().map(|e| &e.analysis), form.as_ref());
    info!(rows = rows.len(), "built responsiveness matrix");

    match cli.command {
        Command::Show { status } => {
            let header = MatrixHeader::new(envelope.as_ref(), form.as_ref());
            print!("{}", display::render_matrix(&header, &rows, status)?);
        }
        Command::Table => {
            println!("{}", display::render_table(&rows)?);
        }
        Command::Summary { json } => {
            let summary = summarise_matrix(&rows);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", display::render_summary_line(&summary));
            }
        }
        Command::Export {
            format,
            output,
            summary,
        } => {
            export::write_rows(&rows, format, &output)
                .with_context(|| format!("exporting matrix to {}", output.display()))?;
            if let Some(path) = summary {
                export::write_summary(&summarise_matrix(&rows), format, &path)
                    .with_context(|| format!("exporting summary to {}", path.display()))?;
            }
        }
    }

    Ok(())
}
