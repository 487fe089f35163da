use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for changing the clawback receiver
 *
 * Access Control: Only the admin can change the clawback receiver
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClawbackReceiver<'info> {
    /// The distributor account to update
    #[account(mut, has_one = admin @ DistributorError::Unauthorized)]
    pub distributor: Account<'info, MerkleDistributor>,

    /// New clawback token account
    /// - Must hold the distributor's mint
    #[account(token::mint = distributor.mint)]
    pub new_clawback_account: InterfaceAccount<'info, TokenAccount>,

    /// Admin of the distributor
    pub admin: Signer<'info>,
}

pub fn handle_set_clawback_receiver(ctx: Context<SetClawbackReceiver>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let new_clawback_receiver = ctx.accounts.new_clawback_account.key();

    let old_clawback_receiver = distributor.set_clawback_receiver(new_clawback_receiver)?;

    msg!("Clawback receiver changed to {}", new_clawback_receiver);

    emit_cpi!(ClawbackReceiverSet {
        distributor: distributor.key(),
        old_clawback_receiver,
        new_clawback_receiver,
    });

    Ok(())
}
