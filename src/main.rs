use airr2hlaguessr::cli::Cli;
use airr2hlaguessr::io::{
    file_base_name, output_file_name, patient_label, read_airr_file, write_guessr_file,
};
use airr2hlaguessr::transform::{convert_records, TransformOptions};
use airr2hlaguessr::ChainFilter;
use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};
use std::io::Read;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Cli::parse();

    let in_files = resolve_input_files(args.in_files.as_deref())?;
    if in_files.is_empty() {
        bail!("No input files detected. Please pipe a valid file list, or use --in_files.");
    }
    let chain_filter = args
        .chain_filter
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(ChainFilter::from_arg)
        .transpose()?;

    let opts = TransformOptions {
        ignore_ambiguous: args.ignore_ambiguous,
        keep_duplicates: args.keep_duplicates,
        chain_filter,
    };

    for path in &in_files {
        println!("Processing {path}...");
        if let Err(err) = process_file(path, &args, &opts) {
            warn!("failed to read in file {path}, skipping: {err:#}");
        }
    }
    Ok(())
}

/// Explicit comma-delimited list if given, otherwise whatever was piped in.
fn resolve_input_files(in_files: Option<&str>) -> Result<Vec<String>> {
    match in_files {
        Some(list) if !list.is_empty() => Ok(list.split(',').map(str::to_string).collect()),
        _ => {
            let mut piped = String::new();
            std::io::stdin().read_to_string(&mut piped)?;
            Ok(piped.split_whitespace().map(str::to_string).collect())
        }
    }
}

fn process_file(path: &str, args: &Cli, opts: &TransformOptions) -> Result<()> {
    let records = read_airr_file(path)?;
    let base = file_base_name(path)?;
    let patient = patient_label(
        &base,
        args.truncate_str.as_deref(),
        args.name_override.as_deref(),
    );
    let rows = convert_records(&records, &patient, opts);
    info!(
        "{path}: kept {} output rows from {} records",
        rows.len(),
        records.len()
    );
    write_guessr_file(&output_file_name(&base, args.compress), &rows, args.compress)
}
