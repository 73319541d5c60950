use std::{fs::File, path::Path, str::FromStr};

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use vela_distributor::ClaimLeaf;

use crate::error::{TreeError, TreeResult};

/// Expected headers of a claim list CSV, in exact order.
pub const CLAIM_CSV_HEADERS: &[&str] = &["claimant", "amount"];

/// One row of a claim list CSV. The leaf index is not a column; it is assigned
/// from the row position, so the file order is the canonical leaf order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvEntry {
    /// Claimant's public key in base58 form.
    pub claimant: String,
    /// Total token entitlement for this claimant, in native units.
    pub amount: u64,
}

impl CsvEntry {
    pub fn read_from_file(path: &Path) -> TreeResult<Vec<Self>> {
        let file = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(file);

        let mut entries = Vec::new();
        for row in rdr.deserialize() {
            let entry: CsvEntry = row?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// Converts CSV rows into claim leaves, assigning indexes sequentially.
pub fn leaves_from_entries(entries: &[CsvEntry]) -> TreeResult<Vec<ClaimLeaf>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let claimant = Pubkey::from_str(&entry.claimant)
                .map_err(|_| TreeError::InvalidPubkey(entry.claimant.clone()))?;
            Ok(ClaimLeaf {
                index: index as u64,
                claimant,
                amount: entry.amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_parsing_and_leaf_assignment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        writeln!(file, "claimant,amount").unwrap();
        writeln!(file, "{a},1000").unwrap();
        writeln!(file, "{b},2500").unwrap();

        let entries = CsvEntry::read_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount, 1000);

        let leaves = leaves_from_entries(&entries).unwrap();
        assert_eq!(leaves[0].index, 0);
        assert_eq!(leaves[0].claimant, a);
        assert_eq!(leaves[1].index, 1);
        assert_eq!(leaves[1].claimant, b);
        assert_eq!(leaves[1].amount, 2500);
    }

    #[test]
    fn test_bad_pubkey_is_rejected() {
        let entries = vec![CsvEntry {
            claimant: "not-a-pubkey".to_string(),
            amount: 1,
        }];
        match leaves_from_entries(&entries) {
            Err(TreeError::InvalidPubkey(s)) => assert_eq!(s, "not-a-pubkey"),
            other => panic!("expected InvalidPubkey, got {other:?}"),
        }
    }
}
