use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::state::DistributorV0;
use crate::DISTRIBUTOR_V0_SEED_PREFIX;

#[derive(Accounts)]
#[instruction(version: u8)]
pub struct InitializeDistributorV0<'info> {
    /// The distributor PDA. A second initialize with the same
    /// (mint, admin, version) key fails here: the account already exists.
    #[account(
        init,
        payer = admin,
        space = 8 + DistributorV0::INIT_SPACE,
        seeds = [
            DISTRIBUTOR_V0_SEED_PREFIX,
            mint.key().as_ref(),
            admin.key().as_ref(),
            &[version],
        ],
        bump
    )]
    pub distributor: Account<'info, DistributorV0>,

    /// The mint to distribute.
    pub mint: Account<'info, Mint>,

    /// Vault holding the tokens to distribute, owned by the distributor PDA.
    /// The admin is expected to seed it with `max_total_claim` tokens after
    /// this instruction.
    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = distributor,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Creator of the campaign; pays for the accounts and becomes the only
    /// authority allowed to claw the campaign back.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_initialize_distributor_v0(
    ctx: Context<InitializeDistributorV0>,
    version: u8,
    root: [u8; 32],
    max_total_claim: u64,
    max_num_nodes: u64,
    start_vesting_ts: i64,
    end_vesting_ts: i64,
) -> Result<()> {
    DistributorV0::validate_params(
        version,
        max_total_claim,
        max_num_nodes,
        start_vesting_ts,
        end_vesting_ts,
    )?;

    let distributor = &mut ctx.accounts.distributor;
    distributor.set_inner(DistributorV0 {
        version,
        root,
        mint: ctx.accounts.mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        admin: ctx.accounts.admin.key(),
        max_total_claim,
        max_num_nodes,
        total_amount_claimed: 0,
        num_nodes_claimed: 0,
        start_vesting_ts,
        end_vesting_ts,
        clawed_back: false,
        bump: ctx.bumps.distributor,
    });

    msg!(
        "distributor v{} initialized: mint={} vault={} max_total_claim={} max_num_nodes={} vesting=[{}, {}]",
        version,
        distributor.mint,
        distributor.token_vault,
        max_total_claim,
        max_num_nodes,
        start_vesting_ts,
        end_vesting_ts,
    );

    Ok(())
}
