use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_from_vault;
use crate::event::*;

/**
 * Account context for clawing back unclaimed tokens
 *
 * Sweeps whatever is left in the vault to the clawback receiver once the
 * clawback period has started. Afterwards every claim fails with ClaimExpired.
 *
 * Access Control: Anyone, funds can only go to the stored clawback receiver
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Clawback<'info> {
    /// The distributor account
    #[account(
        mut,
        has_one = token_vault,
        has_one = mint,
        has_one = clawback_receiver @ DistributorError::Unauthorized,
    )]
    pub distributor: Account<'info, MerkleDistributor>,

    /// Distributor ATA containing the remaining tokens
    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The clawback token account
    #[account(mut)]
    pub clawback_receiver: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, needed by transfer_checked
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers the remaining vault balance to the clawback receiver
 *
 * Validation Rules:
 * - Not clawed back already
 * - Clawback period has started
 * - Vesting has ended
 */
pub fn handle_clawback(ctx: Context<Clawback>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    // ===== VALIDATION PHASE =====

    let curr_ts = Clock::get()?.unix_timestamp;
    distributor.validate_clawback(curr_ts)?;

    // ===== EFFECTS PHASE =====

    distributor.clawed_back = 1;

    let amount = ctx.accounts.token_vault.amount;
    let version_bytes = distributor.version.to_le_bytes();
    let base_key = distributor.base;
    let mint_key = distributor.mint;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // ===== INTERACTIONS PHASE =====

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
        ctx.accounts.clawback_receiver.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        signer,
    )?;

    msg!("Clawed back {} tokens", amount);

    emit_cpi!(ClawedBack {
        distributor: distributor_key,
        clawback_receiver: ctx.accounts.clawback_receiver.key(),
        amount,
    });

    Ok(())
}
