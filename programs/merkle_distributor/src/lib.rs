use anchor_lang::prelude::*;

declare_id!("EkSs14bfNG5oTc4uJBxhKSuBMNqdBVW3FmZymndGGv3");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Distributor Program
 *
 * Airdrops a token to a fixed set of claimants committed in a merkle root.
 * Each leaf commits (claimant, unlocked amount, locked amount).
 *
 * Key Features:
 * - Unlocked bucket paid in full at the first claim
 * - Locked bucket vesting linearly between the start and end timestamps
 * - Optional bonus pool shared pro rata, vesting from the activation point
 * - Activation by slot or timestamp
 * - Permissioned claims co-signed by an operator
 * - Claim-and-stake straight into a max-lock voter escrow
 * - Clawback of unclaimed tokens once the clawback period starts
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: ["MerkleDistributor", base, mint, version]
 * - Token Vault: associated token account of the distributor
 * - Claim Status PDAs: ["ClaimStatus", claimant, distributor]
 *
 * Workflow:
 * 1. Admin creates the distributor and funds the vault
 * 2. Claimants call new_claim once, then claim_locked as tokens vest
 * 3. Anyone triggers the clawback after the clawback start
 * 4. Closable (test) distributors and claim statuses can be torn down by the admin
 */
#[program]
pub mod merkle_distributor {
    use super::*;

    /**
     * Creates a new merkle distributor
     *
     * @param ctx - Account context containing distributor, vault, mint and admin accounts
     * @param params - Root, caps, vesting schedule, activation, bonus and claim type
     *
     * Access Control: Anyone, the admin pays and the base key signs
     */
    pub fn new_distributor(ctx: Context<NewDistributor>, params: NewDistributorParams) -> Result<()> {
        handle_new_distributor(ctx, &params)
    }

    /**
     * Closes a closable distributor and its vault
     *
     * Remaining tokens go to the destination token account, rent to the admin.
     *
     * Access Control: Admin only
     */
    pub fn close_distributor(ctx: Context<CloseDistributor>) -> Result<()> {
        handle_close_distributor(ctx)
    }

    /**
     * Closes a ClaimStatus account created under a closable distributor
     *
     * Access Control: Admin only, rent returned to the claimant
     */
    pub fn close_claim_status(ctx: Context<CloseClaimStatus>) -> Result<()> {
        handle_close_claim_status(ctx)
    }

    /**
     * Moves the activation point
     *
     * @param activation_point - Slot or timestamp, per the distributor activation type
     *
     * Access Control: Admin only
     */
    pub fn set_activation_point(ctx: Context<SetActivationPoint>, activation_point: u64) -> Result<()> {
        handle_set_activation_point(ctx, activation_point)
    }

    /**
     * Sweeps the unclaimed vault balance to the clawback receiver
     *
     * Access Control: Anyone, once the clawback period has started
     */
    pub fn clawback(ctx: Context<Clawback>) -> Result<()> {
        handle_clawback(ctx)
    }

    /**
     * Replaces the clawback receiver token account
     *
     * Access Control: Admin only
     */
    pub fn set_clawback_receiver(ctx: Context<SetClawbackReceiver>) -> Result<()> {
        handle_set_clawback_receiver(ctx)
    }

    /**
     * Transfers the admin role
     *
     * Access Control: Admin only
     */
    pub fn set_admin(ctx: Context<SetAdmin>) -> Result<()> {
        handle_set_admin(ctx)
    }

    /**
     * Replaces the operator co-signing permissioned claims
     *
     * @param new_operator - New operator key
     *
     * Access Control: Admin only
     */
    pub fn set_operator(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
        handle_set_operator(ctx, new_operator)
    }

    /**
     * First claim with merkle proof verification
     *
     * Pays the unlocked amount and the bonus vested so far.
     *
     * @param amount_unlocked - Unlocked amount in the leaf
     * @param amount_locked - Locked amount in the leaf
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any claimant with a valid proof, plus the operator when permissioned
     */
    pub fn new_claim(
        ctx: Context<NewClaim>,
        amount_unlocked: u64,
        amount_locked: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_new_claim(ctx, amount_unlocked, amount_locked, proof)
    }

    /**
     * Withdraws the vested, not yet withdrawn, locked tokens
     *
     * Access Control: The claimant, plus the operator when permissioned
     */
    pub fn claim_locked(ctx: Context<ClaimLocked>) -> Result<()> {
        handle_claim_locked(ctx)
    }

    /**
     * First claim deposited into the claimant's max-lock voter escrow
     *
     * Access Control: The claimant, plus the operator when permissioned
     */
    pub fn new_claim_and_stake(
        ctx: Context<NewClaimAndStake>,
        amount_unlocked: u64,
        amount_locked: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_new_claim_and_stake(ctx, amount_unlocked, amount_locked, proof)
    }

    /**
     * Deposits the vested locked tokens into the claimant's voter escrow
     *
     * Access Control: The claimant, plus the operator when permissioned
     */
    pub fn claim_locked_and_stake(ctx: Context<ClaimLockedAndStake>) -> Result<()> {
        handle_claim_locked_and_stake(ctx)
    }
}
