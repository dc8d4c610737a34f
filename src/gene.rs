//! Deal with V gene names: family normalization and chain filtering
use anyhow::{anyhow, Result};
use itertools::Itertools;

/// Collapse one gene call to its family label, e.g. "TRBV12-3*01" -> "TRBV12".
fn family_of(call: &str) -> &str {
    call.split('*')
        .next()
        .unwrap_or("")
        .split('-')
        .next()
        .unwrap_or("")
}

/// Distinct gene families named by a (possibly ambiguous, comma-separated)
/// `v_call`, in first-seen order. Entries that are blank after stripping
/// allele and subfamily suffixes are discarded.
pub fn v_family_set(v_call: &str) -> Vec<String> {
    v_call
        .split(',')
        .map(|call| family_of(call.trim()))
        .filter(|fam| !fam.is_empty())
        .unique()
        .map(String::from)
        .collect()
}

/// Receptor chains selectable on the command line.
///
/// The chain is encoded by the 3rd character of the family label
/// (TRAV1 -> 'A'). Alpha also keeps delta families, since TRD genes
/// recombine within the alpha locus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainFilter {
    Alpha,
    Beta,
}

impl ChainFilter {
    /// Resolve a user-supplied chain name by its last character,
    /// case-insensitively ("TRA", "a" -> Alpha).
    pub fn from_arg(arg: &str) -> Result<ChainFilter> {
        match arg.chars().last().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(ChainFilter::Alpha),
            Some('B') => Ok(ChainFilter::Beta),
            _ => Err(anyhow!(
                "Inappropriate chain filter selected ({arg:?}): only 'TRA'/'TRB', or 'A'/'B' are valid"
            )),
        }
    }

    /// Whether a family label belongs to this chain. Labels shorter than
    /// 3 characters carry no chain letter and never match.
    pub fn keeps(&self, family: &str) -> bool {
        match family.chars().nth(2) {
            Some(c) => match self {
                ChainFilter::Alpha => c == 'A' || c == 'D',
                ChainFilter::Beta => c == 'B',
            },
            None => false,
        }
    }
}
