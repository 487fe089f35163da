use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{close_vault, transfer_from_vault};
use crate::event::*;

/**
 * Account context for closing a distributor
 *
 * Only available for distributors created as closable (test phase). Returns the
 * remaining tokens, closes the vault and the distributor, rent goes to the admin.
 *
 * Access Control: Only the admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseDistributor<'info> {
    /// The distributor account to close
    #[account(
        mut,
        has_one = admin @ DistributorError::Unauthorized,
        has_one = token_vault,
        has_one = mint,
        close = admin
    )]
    pub distributor: Account<'info, MerkleDistributor>,

    /// Distributor ATA, emptied and closed
    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, needed by transfer_checked
    pub mint: InterfaceAccount<'info, Mint>,

    /// Admin of the distributor, receives the rent
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Account receiving the remaining tokens
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_close_distributor(ctx: Context<CloseDistributor>) -> Result<()> {
    let distributor = &ctx.accounts.distributor;

    distributor.validate_close()?;

    let remaining_balance = ctx.accounts.token_vault.amount;
    let version_bytes = distributor.version.to_le_bytes();
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        distributor.base.as_ref(),
        distributor.mint.as_ref(),
        version_bytes.as_ref(),
        &[distributor.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_from_vault(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.destination_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        remaining_balance,
        ctx.accounts.mint.decimals,
        signer,
    )?;

    close_vault(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    msg!("Closed distributor, returned {} tokens", remaining_balance);

    emit_cpi!(DistributorClosed {
        distributor: distributor.key(),
        admin: ctx.accounts.admin.key(),
        amount_returned: remaining_balance,
    });

    // The distributor account itself is closed by the close = admin constraint
    Ok(())
}
