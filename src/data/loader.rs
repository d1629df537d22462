use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse an oxalate CSV file.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing the
/// whole load.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset = parse_dataset(&String::from_utf8_lossy(&bytes));
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Like [`load_file`], but degrades to an empty dataset on failure.
///
/// The error is only logged; every later query then sees an empty table.
pub fn load_or_empty(path: &Path) -> Dataset {
    match load_file(path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Error loading CSV: {e:#}");
            Dataset::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

/// Parse the raw file text. The first line is a header and is ignored;
/// blank lines and rows with fewer than seven fields are skipped.
pub fn parse_dataset(text: &str) -> Dataset {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in text.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Record::from_fields(split_line(line)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Skipped {dropped} rows with missing fields");
    }
    Dataset::from_records(records)
}

/// Split one line on commas, honouring double quotes.
///
/// A `"` toggles quoted mode, in which commas are kept as text. Quotes are
/// never emitted and every field is trimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
