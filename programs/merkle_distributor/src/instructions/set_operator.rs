use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for changing the operator co-signer
 *
 * Access Control: Only the admin
 *
 * Business Logic:
 * - Permissioned distributors cannot drop their operator (default key)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetOperator<'info> {
    /// The distributor account to update
    #[account(mut, has_one = admin @ DistributorError::Unauthorized)]
    pub distributor: Account<'info, MerkleDistributor>,

    /// Admin of the distributor
    pub admin: Signer<'info>,
}

pub fn handle_set_operator(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    let old_operator = distributor.set_operator(new_operator)?;

    msg!("Operator changed from {} to {}", old_operator, new_operator);

    emit_cpi!(OperatorSet {
        distributor: distributor.key(),
        old_operator,
        new_operator,
    });

    Ok(())
}
