use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for handing the distributor over to a new admin
 *
 * Access Control: Only the current admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAdmin<'info> {
    /// The distributor account to update
    #[account(mut, has_one = admin @ DistributorError::Unauthorized)]
    pub distributor: Account<'info, MerkleDistributor>,

    /// Current admin
    pub admin: Signer<'info>,

    /// New admin account
    /// CHECK: Any key may administer the distributor, it is only stored
    pub new_admin: AccountInfo<'info>,
}

pub fn handle_set_admin(ctx: Context<SetAdmin>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let new_admin = ctx.accounts.new_admin.key();

    let old_admin = distributor.set_admin(new_admin)?;

    msg!("Admin changed from {} to {}", old_admin, new_admin);

    emit_cpi!(AdminSet {
        distributor: distributor.key(),
        old_admin,
        new_admin,
    });

    Ok(())
}
