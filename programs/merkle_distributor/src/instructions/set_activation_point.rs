use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for setting the activation point
 *
 * Access Control: Only the admin can move the activation point
 *
 * Business Logic:
 * - The point is a slot or a timestamp depending on the distributor activation type
 * - It cannot be set more than 90 days (or the slot equivalent) ahead of now
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetActivationPoint<'info> {
    /// The distributor account to update
    #[account(mut, has_one = admin @ DistributorError::Unauthorized)]
    pub distributor: Account<'info, MerkleDistributor>,

    /// Admin of the distributor
    pub admin: Signer<'info>,
}

pub fn handle_set_activation_point(
    ctx: Context<SetActivationPoint>,
    activation_point: u64,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    let clock = Clock::get()?;
    let current_point = distributor.current_point(clock.slot, clock.unix_timestamp)?;
    distributor.set_activation_point(activation_point, current_point)?;

    msg!("Activation point set to {}", activation_point);

    emit_cpi!(ActivationPointSet {
        distributor: distributor.key(),
        activation_point,
    });

    Ok(())
}
