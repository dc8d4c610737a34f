//! The record transformer: filters AIRR-C rearrangement rows and reshapes
//! them into the three-column table HLAGuessr consumes.
use crate::gene::{v_family_set, ChainFilter};
use serde::{Deserialize, Serialize};

/// The subset of an AIRR-C rearrangement row that the conversion consumes.
/// All three columns must be present in the input header; any further
/// columns are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct AirrRecord {
    pub productive: String,
    pub junction_aa: String,
    pub v_call: String,
}

/// One row of the output table. Field order doubles as the sort key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GuessrRecord {
    pub cdr3aa: String,
    pub v_family: String,
    #[serde(rename = "Patient")]
    pub patient: String,
}

/// Behaviour flags, fixed once at startup and shared by every file.
#[derive(Clone, Debug, Default)]
pub struct TransformOptions {
    pub ignore_ambiguous: bool,
    pub keep_duplicates: bool,
    pub chain_filter: Option<ChainFilter>,
}

/// Convert one repertoire table into output rows labelled with `patient`.
///
/// Non-productive rows and rows without a CDR3 are dropped. A rearrangement
/// whose V call resolves to several gene families is either dropped
/// (`ignore_ambiguous`) or fanned out into one row per candidate family,
/// so downstream inference sees every family the CDR3 might belong to.
/// Unless `keep_duplicates` is set the result is sorted and exact duplicate
/// rows are removed; a chain filter, if any, is applied last.
pub fn convert_records(
    records: &[AirrRecord],
    patient: &str,
    opts: &TransformOptions,
) -> Vec<GuessrRecord> {
    let mut out = Vec::new();
    for rec in records {
        if rec.productive == "F" || rec.junction_aa.is_empty() {
            continue;
        }
        // the family set is deduplicated first, so calls that only differ
        // in allele or subfamily do not count as ambiguous
        let families = v_family_set(&rec.v_call);
        if families.len() > 1 && opts.ignore_ambiguous {
            continue;
        }
        for fam in families {
            out.push(GuessrRecord {
                cdr3aa: rec.junction_aa.clone(),
                v_family: fam,
                patient: patient.to_string(),
            });
        }
    }
    if !opts.keep_duplicates {
        out.sort();
        out.dedup();
    }
    if let Some(chain) = opts.chain_filter {
        out.retain(|row| chain.keeps(&row.v_family));
    }
    out
}
