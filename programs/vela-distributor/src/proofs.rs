use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::Hasher;

use crate::constants::INTERNAL_NODE_PREFIX;

/// One step of a Merkle audit path, from leaf level toward the root.
/// `is_left` records which side the sibling sat on when the parent was hashed,
/// so verification reproduces the build-time pairing order exactly.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofEntry {
    /// Hash of the sibling subtree at this level.
    pub sibling: [u8; 32],
    /// True if the sibling was the left child of the parent node.
    pub is_left: bool,
}

/// Hashes an internal node: SHA256(0x01 || left || right).
/// Children are positional; direction comes from the proof, not from sorting.
pub fn hash_internal_node(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Hasher::default();
    hasher.hash(&[INTERNAL_NODE_PREFIX]);
    hasher.hash(left);
    hasher.hash(right);
    hasher.result().to_bytes()
}

/// Recomputes a candidate root from `leaf_hash` and `proof`, and accepts only a
/// bit-for-bit match with `root`. Pure function; every entry of the proof is
/// consumed before the comparison, so there is no partial-match acceptance.
pub fn verify_claim_proof(root: &[u8; 32], leaf_hash: &[u8; 32], proof: &[ProofEntry]) -> bool {
    let mut computed = *leaf_hash;
    for entry in proof {
        computed = if entry.is_left {
            hash_internal_node(&entry.sibling, &computed)
        } else {
            hash_internal_node(&computed, &entry.sibling)
        };
    }
    computed == *root
}
