use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::claim_leaf::{hash_claim_leaf, ClaimLeaf};
use crate::error::ErrorCode;
use crate::proofs::{verify_claim_proof, ProofEntry};
use crate::state::{ClaimStatusV0, DistributorV0};
use crate::vesting::claimable_amount;
use crate::{CLAIM_STATUS_V0_SEED_PREFIX, DISTRIBUTOR_V0_SEED_PREFIX};

#[derive(Accounts)]
pub struct ClaimTokensV0<'info> {
    #[account(
        mut,
        seeds = [
            DISTRIBUTOR_V0_SEED_PREFIX,
            distributor.mint.as_ref(),
            distributor.admin.as_ref(),
            &[distributor.version],
        ],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, DistributorV0>,

    /// The person claiming the tokens. The leaf is rebuilt from this signer's
    /// key, so a proof can only ever pay out to the claimant it commits to.
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(address = distributor.mint)]
    pub mint: Account<'info, Mint>,

    /// The distributor's vault, source of the transfer.
    #[account(mut, address = distributor.token_vault)]
    pub token_vault: Account<'info, TokenAccount>,

    /// The claimant's token account where the claimed tokens land.
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint,
        associated_token::authority = claimant,
    )]
    pub claimant_token_account: Account<'info, TokenAccount>,

    /// Per-claimant replay guard. `init` makes a second claim for the same
    /// claimant fail before any state is touched.
    #[account(
        init,
        payer = claimant,
        space = 8 + ClaimStatusV0::INIT_SPACE,
        seeds = [
            CLAIM_STATUS_V0_SEED_PREFIX,
            distributor.key().as_ref(),
            claimant.key().as_ref(),
        ],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatusV0>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, anchor_spl::associated_token::AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim_tokens_v0(
    ctx: Context<ClaimTokensV0>,
    index: u64,
    amount: u64,
    proof: Vec<ProofEntry>,
) -> Result<()> {
    let distributor = &ctx.accounts.distributor;
    distributor.assert_open()?;

    // Rebuild the leaf from the signer; a proof for someone else's leaf can
    // never hash to the committed root under this claimant's key.
    let leaf = ClaimLeaf {
        index,
        claimant: ctx.accounts.claimant.key(),
        amount,
    };
    require!(
        verify_claim_proof(&distributor.root, &hash_claim_leaf(&leaf), &proof),
        ErrorCode::InvalidProof
    );

    let now_ts = Clock::get()?.unix_timestamp;
    let vested = claimable_amount(
        amount,
        distributor.start_vesting_ts,
        distributor.end_vesting_ts,
        now_ts,
    )?;

    // Cap checks and counter bumps; a failure here aborts the whole claim.
    ctx.accounts.distributor.record_claim(vested)?;

    let distributor = &ctx.accounts.distributor;
    let mint_key = distributor.mint;
    let admin_key = distributor.admin;
    let version_seed = [distributor.version];
    let bump_seed = [distributor.bump];
    let signer_seeds = [
        DISTRIBUTOR_V0_SEED_PREFIX,
        mint_key.as_ref(),
        admin_key.as_ref(),
        &version_seed,
        &bump_seed,
    ];

    // A claim before vesting starts is valid and simply transfers 0.
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: ctx.accounts.distributor.to_account_info(),
            },
            &[&signer_seeds[..]],
        ),
        vested,
    )?;

    let claim_status = &mut ctx.accounts.claim_status;
    claim_status.set_inner(ClaimStatusV0 {
        claimant: ctx.accounts.claimant.key(),
        distributor: ctx.accounts.distributor.key(),
        amount_claimed: vested,
        claimed_at: now_ts,
        bump: ctx.bumps.claim_status,
    });

    msg!(
        "claim: leaf index {} claimant {} vested {} of {}",
        index,
        claim_status.claimant,
        vested,
        amount,
    );

    Ok(())
}
