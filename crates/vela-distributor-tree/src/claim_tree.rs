use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use vela_distributor::{hash_claim_leaf, hash_internal_node, verify_claim_proof, ClaimLeaf, ProofEntry};

use crate::csv_entry::{leaves_from_entries, CsvEntry};
use crate::error::{TreeError, TreeResult};

/// One step of a stored audit path. Same shape as the on-chain `ProofEntry`,
/// with the sibling hash hex-encoded for the interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    #[serde(with = "serde_hash")]
    pub sibling: [u8; 32],
    pub is_left: bool,
}

impl From<ProofStep> for ProofEntry {
    fn from(step: ProofStep) -> Self {
        ProofEntry {
            sibling: step.sibling,
            is_left: step.is_left,
        }
    }
}

impl From<ProofEntry> for ProofStep {
    fn from(entry: ProofEntry) -> Self {
        ProofStep {
            sibling: entry.sibling,
            is_left: entry.is_left,
        }
    }
}

/// One leaf of a built tree together with its precomputed audit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub index: u64,
    #[serde(with = "serde_pubkey")]
    pub claimant: Pubkey,
    pub amount: u64,
    pub proof: Vec<ProofStep>,
}

impl TreeNode {
    pub fn leaf(&self) -> ClaimLeaf {
        ClaimLeaf {
            index: self.index,
            claimant: self.claimant,
            amount: self.amount,
        }
    }

    pub fn proof_entries(&self) -> Vec<ProofEntry> {
        self.proof.iter().copied().map(ProofEntry::from).collect()
    }
}

/// A fully built claim tree: the committed root, the aggregates the on-chain
/// distributor is initialized with, and every leaf with its proof.
///
/// Round-trips losslessly through JSON; reloading a tree recovers the exact
/// `max_total_claim` computed at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTree {
    #[serde(with = "serde_hash")]
    pub root: [u8; 32],
    /// Sum of all leaf amounts; the distributor's total-claim cap.
    pub max_total_claim: u64,
    /// Leaf count; the distributor's node-count cap.
    pub max_num_nodes: u64,
    pub nodes: Vec<TreeNode>,
}

impl ClaimTree {
    /// Builds a tree over `leaves`, which must be non-empty, strictly
    /// ascending by `index` (the canonical order is validated, never repaired
    /// by sorting, so the caller cannot hand over one order and commit to
    /// another), and free of repeated claimants.
    ///
    /// Pairing policy, fixed: adjacent hashes are paired level by level, and a
    /// level with odd count duplicates its last hash as the right child. The
    /// duplicated sibling shows up in proofs as an ordinary entry, so the
    /// verifier needs no special case.
    pub fn from_leaves(leaves: Vec<ClaimLeaf>) -> TreeResult<Self> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyLeaves);
        }
        for pair in leaves.windows(2) {
            if pair[1].index == pair[0].index {
                return Err(TreeError::DuplicateLeafIndex(pair[1].index));
            }
            if pair[1].index < pair[0].index {
                return Err(TreeError::UnsortedLeaves(pair[1].index));
            }
        }

        // Claim statuses are keyed by claimant, so only one leaf per claimant
        // is ever claimable; a second would be committed but stranded.
        let mut seen_claimants = HashSet::with_capacity(leaves.len());
        for leaf in &leaves {
            if !seen_claimants.insert(leaf.claimant) {
                return Err(TreeError::DuplicateClaimant(leaf.claimant));
            }
        }

        let max_total_claim = leaves
            .iter()
            .try_fold(0u64, |acc, leaf| acc.checked_add(leaf.amount))
            .ok_or(TreeError::TotalClaimOverflow)?;
        let max_num_nodes = leaves.len() as u64;

        let leaf_hashes: Vec<[u8; 32]> = leaves.iter().map(hash_claim_leaf).collect();
        let levels = build_levels(leaf_hashes);
        let root = *levels
            .last()
            .and_then(|level| level.first())
            .expect("non-empty input always yields a root");

        let nodes = leaves
            .iter()
            .enumerate()
            .map(|(position, leaf)| TreeNode {
                index: leaf.index,
                claimant: leaf.claimant,
                amount: leaf.amount,
                proof: proof_for_position(&levels, position),
            })
            .collect();

        log::debug!(
            "built claim tree: {} leaves, max_total_claim {}, root {}",
            max_num_nodes,
            max_total_claim,
            hex::encode(root),
        );

        Ok(ClaimTree {
            root,
            max_total_claim,
            max_num_nodes,
            nodes,
        })
    }

    pub fn from_csv(path: &Path) -> TreeResult<Self> {
        let entries = CsvEntry::read_from_file(path)?;
        Self::from_leaves(leaves_from_entries(&entries)?)
    }

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    /// Returns the precomputed audit path for the leaf with `index`.
    pub fn proof_for(&self, index: u64) -> TreeResult<Vec<ProofEntry>> {
        self.node_for(index).map(TreeNode::proof_entries)
    }

    pub fn node_for(&self, index: u64) -> TreeResult<&TreeNode> {
        self.nodes
            .iter()
            .find(|node| node.index == index)
            .ok_or(TreeError::LeafNotFound(index))
    }

    pub fn node_for_claimant(&self, claimant: &Pubkey) -> Option<&TreeNode> {
        self.nodes.iter().find(|node| node.claimant == *claimant)
    }

    /// Checks every stored proof against the stored root.
    pub fn verify_all(&self) -> bool {
        self.nodes.iter().all(|node| {
            verify_claim_proof(
                &self.root,
                &hash_claim_leaf(&node.leaf()),
                &node.proof_entries(),
            )
        })
    }

    pub fn write_to_file(&self, path: &Path) -> TreeResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn read_from_file(path: &Path) -> TreeResult<Self> {
        let file = File::open(path)?;
        let tree = serde_json::from_reader(BufReader::new(file))?;
        Ok(tree)
    }
}

/// Hashes levels bottom-up until a single root remains. `levels[0]` is the
/// leaf hashes; each next level pairs adjacent entries, duplicating the last
/// hash of an odd-count level.
fn build_levels(leaf_hashes: Vec<[u8; 32]>) -> Vec<Vec<[u8; 32]>> {
    let mut levels = vec![leaf_hashes];
    while levels.last().expect("levels never empty").len() > 1 {
        let current = levels.last().expect("levels never empty");
        let mut next = Vec::with_capacity((current.len() + 1) / 2);
        for pair in current.chunks(2) {
            let left = pair[0];
            let right = if pair.len() == 2 { pair[1] } else { pair[0] };
            next.push(hash_internal_node(&left, &right));
        }
        levels.push(next);
    }
    levels
}

/// Walks one leaf position from the bottom level to the root, recording the
/// sibling hash and which side it sat on at each step.
fn proof_for_position(levels: &[Vec<[u8; 32]>], position: usize) -> Vec<ProofStep> {
    let mut proof = Vec::with_capacity(levels.len().saturating_sub(1));
    let mut idx = position;
    for level in &levels[..levels.len() - 1] {
        let step = if idx % 2 == 0 {
            // Right sibling, or the duplicated self at an odd level end.
            let sibling_idx = if idx + 1 < level.len() { idx + 1 } else { idx };
            ProofStep {
                sibling: level[sibling_idx],
                is_left: false,
            }
        } else {
            ProofStep {
                sibling: level[idx - 1],
                is_left: true,
            }
        };
        proof.push(step);
        idx /= 2;
    }
    proof
}

mod serde_hash {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected a 32-byte hex string"))
    }
}

mod serde_pubkey {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
