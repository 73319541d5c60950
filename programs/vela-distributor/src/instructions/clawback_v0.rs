use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::ErrorCode;
use crate::state::DistributorV0;
use crate::DISTRIBUTOR_V0_SEED_PREFIX;

#[derive(Accounts)]
pub struct ClawbackV0<'info> {
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

    /// The distributor's vault; whatever balance remains is reclaimed.
    #[account(mut, address = distributor.token_vault)]
    pub from: Account<'info, TokenAccount>,

    /// Admin-designated destination for the reclaimed tokens.
    #[account(mut)]
    pub to: Account<'info, TokenAccount>,

    /// Only the admin recorded at initialization can claw back.
    #[account(mut, address = distributor.admin @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Reclaims the remaining vault balance and closes the campaign to further
/// claims. Permitted at any time; not gated on the vesting end.
pub fn handle_clawback_v0(ctx: Context<ClawbackV0>) -> Result<()> {
    ctx.accounts.distributor.claw_back()?;

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

    let remaining = ctx.accounts.from.amount;
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.from.to_account_info(),
                to: ctx.accounts.to.to_account_info(),
                authority: ctx.accounts.distributor.to_account_info(),
            },
            &[&signer_seeds[..]],
        ),
        remaining,
    )?;

    msg!("clawback: {} tokens returned to {}", remaining, ctx.accounts.to.key());

    Ok(())
}
