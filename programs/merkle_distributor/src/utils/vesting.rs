use anchor_lang::prelude::*;

use crate::error::*;
use crate::state::{ClaimStatus, MerkleDistributor};

/// `total * elapsed / duration`, capped at `total`. A zero duration vests at once.
pub fn linear_vested(total: u64, elapsed: u64, duration: u64) -> Result<u64> {
    if duration == 0 || elapsed >= duration {
        return Ok(total);
    }
    let vested = (total as u128)
        .checked_mul(elapsed as u128)
        .and_then(|amount| amount.checked_div(duration as u128))
        .ok_or(DistributorError::ArithmeticError)?;
    u64::try_from(vested).map_err(|_| error!(DistributorError::TypeCastedError))
}

/// Locked tokens vested at `curr_ts` on the [start_ts, end_ts] schedule
pub fn locked_vested(locked_amount: u64, curr_ts: i64, start_ts: i64, end_ts: i64) -> Result<u64> {
    if curr_ts < start_ts {
        return Ok(0);
    }
    if curr_ts >= end_ts {
        return Ok(locked_amount);
    }
    let elapsed = curr_ts
        .checked_sub(start_ts)
        .ok_or(DistributorError::ArithmeticError)?;
    let duration = end_ts
        .checked_sub(start_ts)
        .ok_or(DistributorError::ArithmeticError)?;
    linear_vested(
        locked_amount,
        u64::try_from(elapsed).map_err(|_| error!(DistributorError::TypeCastedError))?,
        u64::try_from(duration).map_err(|_| error!(DistributorError::TypeCastedError))?,
    )
}

/// Claimant's pro-rata share of the whole bonus pool
pub fn bonus_entitlement(distributor: &MerkleDistributor, allocation: u64) -> Result<u64> {
    let total_bonus = distributor.airdrop_bonus.total_bonus;
    let max_total_claim_without_bonus = distributor.max_total_claim_without_bonus()?;
    if total_bonus == 0 || max_total_claim_without_bonus == 0 {
        return Ok(0);
    }
    let share = (allocation as u128)
        .checked_mul(total_bonus as u128)
        .and_then(|amount| amount.checked_div(max_total_claim_without_bonus as u128))
        .ok_or(DistributorError::ArithmeticError)?;
    u64::try_from(share).map_err(|_| error!(DistributorError::TypeCastedError))
}

/// Share of the bonus entitlement vested since the activation point
pub fn bonus_vested(distributor: &MerkleDistributor, entitlement: u64, current_point: u64) -> Result<u64> {
    let elapsed = current_point
        .checked_sub(distributor.activation_point)
        .ok_or(DistributorError::ArithmeticError)?;
    linear_vested(
        entitlement,
        elapsed,
        distributor.airdrop_bonus.vesting_duration,
    )
}

/// Amounts payable right now, per bucket
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimableAmounts {
    pub unlocked: u64,
    pub locked: u64,
    pub bonus: u64,
}

impl ClaimableAmounts {
    /// First claim: the unlocked bucket is paid in full together with the
    /// bonus vested so far. The bonus is settled once, later claims only
    /// release the locked bucket.
    pub fn for_new_claim(
        distributor: &MerkleDistributor,
        amount_unlocked: u64,
        amount_locked: u64,
        curr_ts: i64,
        current_point: u64,
    ) -> Result<Self> {
        distributor.validate_claim_window(current_point)?;
        require!(
            curr_ts >= distributor.start_ts,
            DistributorError::ClaimingIsNotStarted
        );

        let allocation = amount_unlocked
            .checked_add(amount_locked)
            .ok_or(DistributorError::ArithmeticError)?;
        let entitlement = bonus_entitlement(distributor, allocation)?;
        let bonus = bonus_vested(distributor, entitlement, current_point)?;

        Ok(Self {
            unlocked: amount_unlocked,
            locked: 0,
            bonus,
        })
    }

    /// Subsequent claims: vested locked tokens not yet withdrawn
    pub fn for_existing_claim(
        claim_status: &ClaimStatus,
        distributor: &MerkleDistributor,
        curr_ts: i64,
        current_point: u64,
    ) -> Result<Self> {
        distributor.validate_claim_window(current_point)?;
        let locked =
            claim_status.amount_withdrawable(curr_ts, distributor.start_ts, distributor.end_ts)?;

        Ok(Self {
            unlocked: 0,
            locked,
            bonus: 0,
        })
    }

    /// Tokens leaving the vault, bonus excluded
    pub fn base_amount(&self) -> Result<u64> {
        self.unlocked
            .checked_add(self.locked)
            .ok_or_else(|| error!(DistributorError::ArithmeticError))
    }

    /// Tokens leaving the vault, bonus included
    pub fn total(&self) -> Result<u64> {
        self.base_amount()?
            .checked_add(self.bonus)
            .ok_or_else(|| error!(DistributorError::ArithmeticError))
    }
}
