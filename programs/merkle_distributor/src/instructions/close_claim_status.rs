use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for closing claim status accounts
 *
 * Only available for claim statuses created under a closable distributor
 * (test phase). Rent is returned to the claimant.
 *
 * Access Control: Only the admin recorded in the claim status
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseClaimStatus<'info> {
    /// ClaimStatus account to be closed, rent returned to claimant
    #[account(
        mut,
        has_one = claimant @ DistributorError::OwnerMismatch,
        has_one = admin @ DistributorError::Unauthorized,
        close = claimant
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// The claimant of the ClaimStatus account
    /// CHECK: Matched against claim_status.claimant, only receives lamports
    #[account(mut)]
    pub claimant: AccountInfo<'info>,

    /// Admin recorded when the claim was created
    pub admin: Signer<'info>,
}

pub fn handle_close_claim_status(ctx: Context<CloseClaimStatus>) -> Result<()> {
    let claim_status = &ctx.accounts.claim_status;

    claim_status.validate_close()?;

    emit_cpi!(ClaimStatusClosed {
        distributor: claim_status.distributor,
        claimant: claim_status.claimant,
        locked_amount_withdrawn: claim_status.locked_amount_withdrawn,
    });

    Ok(())
}
