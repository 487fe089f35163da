use anchor_lang::prelude::*;

use crate::error::*;
use crate::state::MerkleDistributor;
use crate::utils::locked_vested;

/**
 * Individual claim status account
 *
 * Records a claimant's entitlement, fixed at the first claim from the merkle
 * proof, and their progress withdrawing the locked bucket.
 *
 * Derivation: ["ClaimStatus", claimant, distributor]
 *
 * Lifecycle:
 * 1. Created on first claim with init, a second first claim collides on creation
 * 2. locked_amount_withdrawn grows with each claim_locked call
 * 3. Closed by the admin only when the distributor was closable
 */
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct ClaimStatus {
    /// Admin of the distributor at claim time, authorizes test teardown
    pub admin: Pubkey,
    /// Distributor this claim belongs to
    pub distributor: Pubkey,
    /// Authority that claimed the tokens
    pub claimant: Pubkey,
    /// Locked amount
    pub locked_amount: u64,
    /// Locked amount withdrawn
    pub locked_amount_withdrawn: u64,
    /// Unlocked amount
    pub unlocked_amount: u64,
    /// Bonus paid with the first claim
    pub bonus_amount: u64,
    /// Whether the admin can close this account, for testing purpose
    pub closable: u8,
    /// Padding 0
    pub padding_0: [u8; 7],
    /// Padding 1
    pub padding_1: u128,
}

impl ClaimStatus {
    /// Space required for this account, 8-byte discriminator included
    pub const LEN: usize = 8 + ClaimStatus::INIT_SPACE;

    pub fn initialize(
        &mut self,
        distributor_key: Pubkey,
        distributor: &MerkleDistributor,
        claimant: Pubkey,
        amount_unlocked: u64,
        amount_locked: u64,
        bonus: u64,
    ) {
        self.admin = distributor.admin;
        self.distributor = distributor_key;
        self.claimant = claimant;
        self.locked_amount = amount_locked;
        self.locked_amount_withdrawn = 0;
        self.unlocked_amount = amount_unlocked;
        self.bonus_amount = bonus;
        self.closable = distributor.closable;
    }

    pub fn is_closable(&self) -> bool {
        self.closable != 0
    }

    pub fn validate_close(&self) -> Result<()> {
        require!(self.is_closable(), DistributorError::CannotCloseClaimStatus);
        Ok(())
    }

    /// Locked tokens vested at `curr_ts` and not yet withdrawn
    pub fn amount_withdrawable(&self, curr_ts: i64, start_ts: i64, end_ts: i64) -> Result<u64> {
        let vested = locked_vested(self.locked_amount, curr_ts, start_ts, end_ts)?;
        vested
            .checked_sub(self.locked_amount_withdrawn)
            .ok_or_else(|| error!(DistributorError::ArithmeticError))
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        let withdrawn = self
            .locked_amount_withdrawn
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            withdrawn <= self.locked_amount,
            DistributorError::ArithmeticError
        );
        self.locked_amount_withdrawn = withdrawn;
        Ok(())
    }
}
