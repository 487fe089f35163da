use anchor_lang::prelude::*;

use crate::error::*;
use crate::state::{ClaimStatus, MerkleDistributor};
use crate::utils::{compute_leaf, verify, ClaimableAmounts};

/// Who is claiming, through which instruction family, and when
#[derive(Clone, Copy, Debug)]
pub struct ClaimRequest {
    pub claimant: Pubkey,
    /// Operator that co-signed the transaction, if any
    pub operator: Option<Pubkey>,
    /// Claim-and-stake instruction family
    pub staking: bool,
    pub curr_slot: u64,
    pub curr_ts: i64,
}

/**
 * State transition of a first claim
 *
 * Runs every check of a first claim and applies its effects to the
 * distributor counters and the freshly created claim status. The caller moves
 * the returned amounts out of the vault within the same transaction.
 *
 * Order:
 * 1. Claim type and operator authorization
 * 2. Merkle proof of (claimant, unlocked, locked)
 * 3. Activation, expiry and vesting start
 * 4. Node and amount caps
 */
pub fn settle_new_claim(
    distributor: &mut MerkleDistributor,
    distributor_key: Pubkey,
    claim_status: &mut ClaimStatus,
    request: &ClaimRequest,
    amount_unlocked: u64,
    amount_locked: u64,
    proof: Vec<[u8; 32]>,
) -> Result<ClaimableAmounts> {
    distributor.authorize_claim(request.operator, request.staking)?;

    let leaf = compute_leaf(&request.claimant, amount_unlocked, amount_locked);
    require!(
        verify(proof, distributor.root, leaf),
        DistributorError::InvalidProof
    );

    let current_point = distributor.current_point(request.curr_slot, request.curr_ts)?;
    let claimable = ClaimableAmounts::for_new_claim(
        distributor,
        amount_unlocked,
        amount_locked,
        request.curr_ts,
        current_point,
    )?;

    distributor.accept_new_claim(amount_unlocked, amount_locked, claimable.bonus)?;
    claim_status.initialize(
        distributor_key,
        distributor,
        request.claimant,
        amount_unlocked,
        amount_locked,
        claimable.bonus,
    );
    distributor.record_claimed(claimable.base_amount()?, claimable.bonus)?;

    Ok(claimable)
}

/// State transition of a claim against an existing claim status
///
/// Nothing withdrawable is an error rather than a no-op.
pub fn settle_locked_claim(
    distributor: &mut MerkleDistributor,
    claim_status: &mut ClaimStatus,
    request: &ClaimRequest,
) -> Result<ClaimableAmounts> {
    distributor.authorize_claim(request.operator, request.staking)?;

    let current_point = distributor.current_point(request.curr_slot, request.curr_ts)?;
    let claimable = ClaimableAmounts::for_existing_claim(
        claim_status,
        distributor,
        request.curr_ts,
        current_point,
    )?;
    require!(
        claimable.locked > 0,
        DistributorError::InsufficientUnlockedTokens
    );

    claim_status.record_withdrawal(claimable.locked)?;
    distributor.record_claimed(claimable.locked, 0)?;

    Ok(claimable)
}
