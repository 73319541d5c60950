use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::Hasher;

use crate::constants::LEAF_PREFIX;

/// The data committed into one leaf of the distribution tree.
/// Each leaf records a single claimant's total entitlement.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimLeaf {
    /// Position of this leaf in the canonical (index-ordered) leaf set.
    pub index: u64,
    /// The public key that must sign the claim for this leaf.
    pub claimant: Pubkey,
    /// Total token entitlement for this claimant, before vesting.
    pub amount: u64,
}

impl ClaimLeaf {
    pub fn to_hash(&self) -> [u8; 32] {
        hash_claim_leaf(self)
    }
}

/// Hashes a `ClaimLeaf` to produce a 32-byte hash suitable for tree construction.
/// Scheme: SHA256(0x00 || borsh_serialized_leaf). Borsh gives a fixed-width,
/// separator-free layout (u64 LE || 32-byte pubkey || u64 LE), so two distinct
/// leaves can never encode to the same bytes. The 0x00 prefix keeps leaf hashes
/// disjoint from internal node hashes (which use 0x01).
pub fn hash_claim_leaf(leaf: &ClaimLeaf) -> [u8; 32] {
    let mut hasher = Hasher::default();
    hasher.hash(&[LEAF_PREFIX]);

    let serialized = leaf.try_to_vec().expect("ClaimLeaf serialization is infallible");
    hasher.hash(&serialized);

    hasher.result().to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_claim_leaf_consistent() {
        let claimant = Pubkey::new_unique();
        let leaf_a = ClaimLeaf {
            index: 0,
            claimant,
            amount: 100,
        };
        let leaf_b = ClaimLeaf {
            index: 0,
            claimant,
            amount: 100,
        };
        let leaf_c = ClaimLeaf {
            index: 1,
            claimant,
            amount: 100,
        };

        assert_eq!(
            hash_claim_leaf(&leaf_a),
            hash_claim_leaf(&leaf_b),
            "identical leaves must hash identically"
        );
        assert_ne!(
            hash_claim_leaf(&leaf_a),
            hash_claim_leaf(&leaf_c),
            "distinct leaves must hash differently"
        );
    }

    #[test]
    fn test_hash_claim_leaf_sensitive_to_every_field() {
        let base = ClaimLeaf {
            index: 7,
            claimant: Pubkey::new_unique(),
            amount: 1_000,
        };
        let base_hash = base.to_hash();

        let mut changed = base;
        changed.index = 8;
        assert_ne!(base_hash, changed.to_hash());

        let mut changed = base;
        changed.claimant = Pubkey::new_unique();
        assert_ne!(base_hash, changed.to_hash());

        let mut changed = base;
        changed.amount = 1_001;
        assert_ne!(base_hash, changed.to_hash());
    }

    #[test]
    fn test_hash_claim_leaf_prefix() {
        // The 0x00 prefix must influence the hash; otherwise leaves and internal
        // nodes would share a hash domain.
        let leaf = ClaimLeaf {
            index: 0,
            claimant: Pubkey::new_unique(),
            amount: 1,
        };
        let serialized = leaf.try_to_vec().unwrap();

        let mut unprefixed = Hasher::default();
        unprefixed.hash(&serialized);
        assert_ne!(leaf.to_hash(), unprefixed.result().to_bytes());

        let mut prefixed = Hasher::default();
        prefixed.hash(&[LEAF_PREFIX]);
        prefixed.hash(&serialized);
        assert_eq!(leaf.to_hash(), prefixed.result().to_bytes());
    }
}
