use anyhow::{Context, Result};
use clap::Args;
use log::info;
use mutasi_core::IssuerVariant;
use mutasi_export::{DEFAULT_REPORT_NAME, ExportFormat, Labels, Row, write_report};
use mutasi_ingest::{DocumentText, Extraction};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::input::load_document;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Fragment dumps (.json) or reconstructed statement text files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// csv, json or table (default from config)
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Output file, or a directory to place a timestamped report in (default: stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Passphrase for encrypted inputs; prompted for when missing
    #[arg(long)]
    pub password: Option<String>,

    /// Parse as this issuer instead of detecting it
    #[arg(long)]
    pub issuer: Option<IssuerVariant>,

    /// Also write each document's reconstructed text into this directory
    #[arg(long)]
    pub raw_out: Option<PathBuf>,

    /// Column headers: en or id (default from config)
    #[arg(long)]
    pub labels: Option<Labels>,
}

pub async fn run(args: ConvertArgs, cfg: &Config) -> Result<()> {
    let format = args.format.unwrap_or(cfg.export.format);
    let labels = args.labels.unwrap_or(cfg.export.labels);
    let extractor = Arc::new(cfg.extractor()?);

    // decoding stays on this thread so passphrase prompts never interleave
    let mut docs = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        docs.push(load_document(path, args.password.as_deref())?);
    }

    let handles: Vec<_> = docs
        .into_iter()
        .map(|doc| {
            let extractor = Arc::clone(&extractor);
            let issuer = args.issuer;
            tokio::task::spawn_blocking(move || match issuer {
                Some(variant) => extractor.extract_as(doc, variant),
                None => extractor.extract(doc),
            })
        })
        .collect();

    let mut rows = Vec::new();
    for (path, handle) in args.inputs.iter().zip(handles) {
        let extraction = handle
            .await
            .with_context(|| format!("extract {}", path.display()))?;
        summarize(path, &extraction);
        if let Some(dir) = &args.raw_out {
            write_raw(dir, path, &extraction.raw_text)?;
        }
        rows.extend(Row::from_transactions(&extraction.transactions));
    }

    write_output(&rows, labels, format, args.out.as_deref())
}

fn summarize(path: &Path, extraction: &Extraction) {
    match extraction.issuer {
        Some(issuer) => eprintln!(
            "{}: {} ({} transactions, {} blocks dropped, {} warnings)",
            path.display(),
            issuer.bank_name(),
            extraction.transactions.len(),
            extraction.blocks_dropped,
            extraction.warnings.len()
        ),
        None => eprintln!("{}: unsupported statement format", path.display()),
    }
    if extraction.is_empty() {
        eprintln!(
            "{}: no transactions found; inspect the text with `mutasi raw {}`",
            path.display(),
            path.display()
        );
    }
}

fn write_raw(dir: &Path, input: &Path, text: &DocumentText) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("document");
    let target = dir.join(format!("{stem}.txt"));
    fs::write(&target, text.as_str()).with_context(|| format!("write {}", target.display()))?;
    info!("raw text written to {}", target.display());
    Ok(())
}

fn report_file_name(format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        DEFAULT_REPORT_NAME,
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

fn write_output(rows: &[Row], labels: Labels, format: ExportFormat, out: Option<&Path>) -> Result<()> {
    let Some(out) = out else {
        let mut stdout = io::stdout().lock();
        write_report(rows, labels, format, &mut stdout).context("write report")?;
        stdout.flush()?;
        return Ok(());
    };

    let target = if out.is_dir() { out.join(report_file_name(format)) } else { out.to_path_buf() };
    let file = File::create(&target).with_context(|| format!("create {}", target.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(rows, labels, format, &mut writer).with_context(|| format!("write {}", target.display()))?;
    writer.flush()?;
    eprintln!("Wrote {} rows to {}", rows.len(), target.display());
    Ok(())
}
