use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{settle_locked_claim, transfer_from_vault, ClaimRequest};
use crate::event::*;

/**
 * Account context for withdrawing vested locked tokens
 *
 * Access Control: The claimant, plus the operator for permissioned distributors
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimLocked<'info> {
    /// The distributor account
    #[account(
        mut,
        has_one = token_vault,
        has_one = mint,
    )]
    pub distributor: Box<Account<'info, MerkleDistributor>>,

    /// Claim status created by the claimant's first claim
    #[account(
        mut,
        has_one = distributor,
        has_one = claimant @ DistributorError::OwnerMismatch,
        seeds = [
            CLAIM_STATUS_SEED.as_bytes(),
            claimant.key().as_ref(),
            distributor.key().as_ref()
        ],
        bump,
    )]
    pub claim_status: Box<Account<'info, ClaimStatus>>,

    /// Distributor ATA containing the tokens to distribute
    #[account(mut)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Account to send the claimed tokens to
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
        constraint = to.owner == claimant.key() @ DistributorError::OwnerMismatch
    )]
    pub to: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Who is claiming the tokens
    pub claimant: Signer<'info>,

    /// Operator co-signature, required by permissioned distributors
    pub operator: Option<Signer<'info>>,

    /// The token mint, needed by transfer_checked
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_claim_locked(ctx: Context<ClaimLocked>) -> Result<()> {
    let clock = Clock::get()?;
    let request = ClaimRequest {
        claimant: ctx.accounts.claimant.key(),
        operator: ctx.accounts.operator.as_ref().map(|operator| operator.key()),
        staking: false,
        curr_slot: clock.slot,
        curr_ts: clock.unix_timestamp,
    };

    let distributor = &mut ctx.accounts.distributor;
    let claimable = settle_locked_claim(distributor, &mut ctx.accounts.claim_status, &request)?;

    let version_bytes = distributor.version.to_le_bytes();
    let base_key = distributor.base;
    let mint_key = distributor.mint;
    let distributor_bump = distributor.bump;

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        base_key.as_ref(),
        mint_key.as_ref(),
        version_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_from_vault(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.to.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claimable.locked,
        ctx.accounts.mint.decimals,
        signer,
    )?;

    msg!(
        "Withdrew {} locked tokens, {} of {} withdrawn",
        claimable.locked,
        ctx.accounts.claim_status.locked_amount_withdrawn,
        ctx.accounts.claim_status.locked_amount,
    );

    emit_cpi!(ClaimedEvent {
        claimant: request.claimant,
        amount: claimable.locked,
    });

    Ok(())
}
