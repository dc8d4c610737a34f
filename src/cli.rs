//! Command-line surface.
//!
//! The snake_case long options also accept two-letter hidden aliases
//! (`--ia`, `--kd`, `--ts`, `--in`).
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "airr2hlaguessr",
    version,
    about = "Convert AIRR-C TCR repertoire files to the HLAGuessr input format"
)]
pub struct Cli {
    /// Ignore TCRs with ambiguous V calls (default behaviour is to include
    /// their CDR3s with each gene family redundantly)
    #[arg(long = "ignore_ambiguous", alias = "ia")]
    pub ignore_ambiguous: bool,

    /// Gzip compress the output
    #[arg(short = 'z', long = "compress")]
    pub compress: bool,

    /// Keep duplicate TCRs, skipping the dedup/sort pass. Useful when
    /// processing very large datasets
    #[arg(long = "keep_duplicates", alias = "kd")]
    pub keep_duplicates: bool,

    /// Truncate inferred names at this string, e.g. to use the same name
    /// for both alpha and beta files
    #[arg(long = "truncate_str", alias = "ts", value_name = "STR")]
    pub truncate_str: Option<String>,

    /// Comma-delimited input paths. If omitted, the file list is read from
    /// standard input, split on whitespace
    #[arg(long = "in_files", alias = "in", value_name = "PATHS")]
    pub in_files: Option<String>,

    /// Only output one TCR chain: 'TRA'/'TRB', or 'A'/'B'
    #[arg(short = 'c', long = "chain_filter", value_name = "CHAIN")]
    pub chain_filter: Option<String>,

    /// Use this name in the Patient column instead of inferring it from
    /// the filename (overrides --truncate_str)
    #[arg(short = 'n', long = "name_override", value_name = "NAME")]
    pub name_override: Option<String>,
}
