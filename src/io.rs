//! File-level plumbing: read AIRR-C tables, write HLAGuessr tables and
//! derive output/patient names from input paths.
use crate::transform::{AirrRecord, GuessrRecord};
use anyhow::{anyhow, Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a tab-separated AIRR-C rearrangement file, transparently
/// gzip-decoded when the path ends in `.gz` (the usual `.tsv.gz` naming).
pub fn read_airr_file(path: &str) -> Result<Vec<AirrRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
    let reader: Box<dyn Read> = if path.ends_with(".gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let rec: AirrRecord = row.with_context(|| format!("malformed row in {path}"))?;
        records.push(rec);
    }
    Ok(records)
}

/// Write the output table, gzip-compressed on request. The header line is
/// written even when no rows survived the conversion.
pub fn write_guessr_file(path: &str, rows: &[GuessrRecord], compress: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {path}"))?;
    let writer: Box<dyn Write> = if compress {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(file)
    };
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(["cdr3aa", "v_family", "Patient"])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Base name of an input file: directory prefix stripped, then truncated at
/// the first `.tsv` occurrence. Paths without `.tsv` are rejected, which
/// surfaces as a per-file skip in the driver.
pub fn file_base_name(path: &str) -> Result<String> {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid input path {path:?}"))?;
    match name.find(".tsv") {
        Some(idx) => Ok(name[..idx].to_string()),
        None => Err(anyhow!("input file name {name:?} does not contain '.tsv'")),
    }
}

/// Output file name; the file lands in the current working directory.
pub fn output_file_name(base: &str, compress: bool) -> String {
    if compress {
        format!("{base}_hlaguessr.tsv.gz")
    } else {
        format!("{base}_hlaguessr.tsv")
    }
}

/// Label written in the Patient column. An explicit override wins;
/// otherwise the base name, truncated at `truncate_str` when that string
/// occurs past the start of the name.
pub fn patient_label(
    base: &str,
    truncate_str: Option<&str>,
    name_override: Option<&str>,
) -> String {
    if let Some(name) = name_override {
        return name.to_string();
    }
    if let Some(pat) = truncate_str {
        match base.find(pat) {
            Some(idx) if idx > 0 => return base[..idx].to_string(),
            _ => warn!("truncate string {pat:?} does not appear in filename {base:?}, ignoring"),
        }
    }
    base.to_string()
}
