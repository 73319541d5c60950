pub mod claim_leaf;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod proofs;
pub mod state;
pub mod vesting;

pub use claim_leaf::*;
pub use constants::{
    CLAIM_STATUS_V0_SEED_PREFIX, DISTRIBUTOR_V0_SEED_PREFIX, SUPPORTED_DISTRIBUTOR_VERSION,
};
pub use error::ErrorCode;
pub use instructions::*;
pub use proofs::*;
pub use state::*;
pub use vesting::claimable_amount;

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vela_distributor {
    use super::instructions;
    use super::*;

    // admin
    pub fn initialize_distributor_v0(
        ctx: Context<InitializeDistributorV0>,
        version: u8,
        root: [u8; 32],
        max_total_claim: u64,
        max_num_nodes: u64,
        start_vesting_ts: i64,
        end_vesting_ts: i64,
    ) -> Result<()> {
        instructions::handle_initialize_distributor_v0(
            ctx,
            version,
            root,
            max_total_claim,
            max_num_nodes,
            start_vesting_ts,
            end_vesting_ts,
        )
    }

    // claimant
    pub fn claim_tokens_v0(
        ctx: Context<ClaimTokensV0>,
        index: u64,
        amount: u64,
        proof: Vec<ProofEntry>,
    ) -> Result<()> {
        instructions::handle_claim_tokens_v0(ctx, index, amount, proof)
    }

    // admin
    pub fn clawback_v0(ctx: Context<ClawbackV0>) -> Result<()> {
        instructions::handle_clawback_v0(ctx)
    }
}
