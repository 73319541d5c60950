pub mod claim_tree;
pub mod csv_entry;
pub mod error;

pub use claim_tree::{ClaimTree, ProofStep, TreeNode};
pub use csv_entry::{leaves_from_entries, CsvEntry};
pub use error::{TreeError, TreeResult};

// Re-export the on-chain leaf and proof types so tooling built on this crate
// shares one definition with the program.
pub use vela_distributor::{hash_claim_leaf, verify_claim_proof, ClaimLeaf, ProofEntry};
