use anchor_lang::prelude::Pubkey;
use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("a claim tree requires at least one leaf")]
    EmptyLeaves,

    #[error("leaves must be sorted by index; leaf index {0} is out of order")]
    UnsortedLeaves(u64),

    #[error("duplicate leaf index {0}")]
    DuplicateLeafIndex(u64),

    #[error("claimant {0} appears in more than one leaf")]
    DuplicateClaimant(Pubkey),

    #[error("no leaf with index {0} in this tree")]
    LeafNotFound(u64),

    #[error("sum of leaf amounts overflows u64")]
    TotalClaimOverflow,

    #[error("invalid claimant pubkey: {0}")]
    InvalidPubkey(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
