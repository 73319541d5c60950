use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const DISTRIBUTOR_V0_SEED_PREFIX: &[u8] = b"distributor_v0";

#[constant]
pub const CLAIM_STATUS_V0_SEED_PREFIX: &[u8] = b"claim_status_v0";

/// The only distributor schema version this program build understands.
pub const SUPPORTED_DISTRIBUTOR_VERSION: u8 = 0;

/// Domain-separation prefix hashed ahead of serialized leaf data.
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain-separation prefix hashed ahead of internal node children.
pub const INTERNAL_NODE_PREFIX: u8 = 0x01;
