//! Directory traversal and per-file dispatch to the statement importers.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use fatura_core::Transaction;
use fatura_ingest::{LineRecognizer, NubankPdf, PicPayPdf, parse_nubank_csv, scan_pages};
use tracing::{debug, info, warn};

/// Ingest every recognizable statement file under `dir`, one batch per file.
///
/// A file that fails to read or extract is logged and skipped; a bad
/// document never aborts the run.
pub fn ingest_dir(dir: &Path) -> Result<Vec<Vec<Transaction>>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut batches = Vec::new();
    for path in files {
        match ingest_file(&path) {
            Ok(Some(batch)) => {
                info!(file = %path.display(), records = batch.len(), "ingested statement");
                batches.push(batch);
            }
            Ok(None) => debug!(file = %path.display(), "not a statement file, skipping"),
            Err(e) => warn!(file = %path.display(), error = %e, "failed to ingest, skipping"),
        }
    }
    Ok(batches)
}

/// Parse one file if its name and extension identify a known statement format.
fn ingest_file(path: &Path) -> Result<Option<Vec<Transaction>>> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let batch = match ext.as_str() {
        "csv" if stem.contains("nubank") => parse_nubank_csv(path)?,
        "pdf" | "txt" if stem.contains("nubank") => {
            scan_document(path, &ext, &mut NubankPdf::new())?
        }
        "pdf" | "txt" if stem.contains("picpay") => {
            scan_document(path, &ext, &mut PicPayPdf::new())?
        }
        _ => return Ok(None),
    };
    Ok(Some(batch))
}

fn scan_document<R: LineRecognizer>(
    path: &Path,
    ext: &str,
    recognizer: &mut R,
) -> Result<Vec<Transaction>> {
    let text = match ext {
        "pdf" => extract_pdf_text(path)?,
        // .txt is accepted as pre-extracted statement text.
        _ => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
    };
    let pages = text.split('\u{0c}');
    Ok(scan_pages(pages, recognizer))
}

/// Extract text with `pdftotext -layout`; pages come back separated by form feeds.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .context("running pdftotext (is poppler-utils installed?)")?;

    if !output.status.success() {
        bail!(
            "pdftotext failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
