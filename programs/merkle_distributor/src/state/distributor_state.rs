use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;

/// How `activation_point` is measured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationType {
    Slot,
    Timestamp,
}

impl TryFrom<u8> for ActivationType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ActivationType::Slot),
            1 => Ok(ActivationType::Timestamp),
            _ => err!(DistributorError::InvalidActivationType),
        }
    }
}

impl ActivationType {
    pub fn current_point(&self, curr_slot: u64, curr_ts: i64) -> Result<u64> {
        match self {
            ActivationType::Slot => Ok(curr_slot),
            ActivationType::Timestamp => {
                u64::try_from(curr_ts).map_err(|_| error!(DistributorError::TypeCastedError))
            }
        }
    }
}

/// Which claim instructions a distributor accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimType {
    Permissionless,
    Permissioned,
    PermissionlessWithStaking,
    PermissionedWithStaking,
}

impl TryFrom<u8> for ClaimType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ClaimType::Permissionless),
            1 => Ok(ClaimType::Permissioned),
            2 => Ok(ClaimType::PermissionlessWithStaking),
            3 => Ok(ClaimType::PermissionedWithStaking),
            _ => err!(DistributorError::InvalidClaimType),
        }
    }
}

impl ClaimType {
    /// Claims need the distributor operator as co-signer
    pub fn is_permissioned(&self) -> bool {
        matches!(self, ClaimType::Permissioned | ClaimType::PermissionedWithStaking)
    }

    /// Claims are deposited into the claimant's vote escrow
    pub fn is_staking(&self) -> bool {
        matches!(
            self,
            ClaimType::PermissionlessWithStaking | ClaimType::PermissionedWithStaking
        )
    }
}

/// Secondary pool paid on top of the merkle allocations
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AirdropBonus {
    /// Total bonus tokens in the pool
    pub total_bonus: u64,
    /// Duration over which the pool vests, in activation units (slots or seconds)
    pub vesting_duration: u64,
    /// Bonus tokens already paid out
    pub total_claimed_bonus: u64,
}

/**
 * Merkle distributor state account
 *
 * One account per airdrop round. Holds the merkle root committing to every
 * (claimant, unlocked, locked) allocation, the caps and timing of the round,
 * the authorities allowed to administer it and the aggregate counters updated
 * by every claim.
 *
 * Derivation: ["MerkleDistributor", base, mint, version]
 *
 * Lifecycle:
 * 1. Created by the admin in new_distributor
 * 2. Counters updated by every claim instruction
 * 3. Authorities and activation point updated by admin instructions
 * 4. Marked clawed back once the remaining vault balance is swept
 * 5. Closed by the admin only when created as closable
 *
 * Layout Notes:
 * - Field order and widths are the persisted format, flags are stored as u8
 * - padding_0 and padding_2 are zeroed and reserved
 */
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct MerkleDistributor {
    /// The 256-bit merkle root
    pub root: [u8; 32],

    /// Mint of the token to be distributed
    pub mint: Pubkey,

    /// Base key of the distributor
    pub base: Pubkey,

    /// Associated token account of the distributor holding the tokens
    pub token_vault: Pubkey,

    /// Token account receiving the clawback
    pub clawback_receiver: Pubkey,

    /// Admin wallet
    pub admin: Pubkey,

    /// Vote-escrow locker, for the staking claim types
    pub locker: Pubkey,

    /// Co-signer for the permissioned claim types
    pub operator: Pubkey,

    /// Version of the airdrop
    pub version: u64,

    /// Maximum number of tokens that can ever be claimed, bonus pool included
    pub max_total_claim: u64,

    /// Maximum number of claimants
    pub max_num_nodes: u64,

    /// Total amount of tokens that have been claimed
    pub total_amount_claimed: u64,

    /// Number of claimants that have claimed
    pub num_nodes_claimed: u64,

    /// Vesting start (Unix timestamp)
    pub start_ts: i64,

    /// Vesting end (Unix timestamp)
    pub end_ts: i64,

    /// Clawback start (Unix timestamp)
    pub clawback_start_ts: i64,

    /// Claims are accepted from this slot or timestamp
    pub activation_point: u64,

    /// 0 means slot, 1 means timestamp
    pub activation_type: u8,

    /// Raw ClaimType tag
    pub claim_type: u8,

    /// Bump seed
    pub bump: u8,

    /// Whether or not the distributor has been clawed back
    pub clawed_back: u8,

    /// Whether the admin can close this distributor, for testing purpose
    pub closable: u8,

    /// Padding 0
    pub padding_0: [u8; 3],

    pub airdrop_bonus: AirdropBonus,

    pub padding_2: [u128; 5],
}

impl MerkleDistributor {
    /// Space required for this account, 8-byte discriminator included
    pub const LEN: usize = 8 + MerkleDistributor::INIT_SPACE;

    pub fn activation_type(&self) -> Result<ActivationType> {
        ActivationType::try_from(self.activation_type)
            .map_err(|_| error!(DistributorError::TypeCastedError))
    }

    pub fn claim_type(&self) -> Result<ClaimType> {
        ClaimType::try_from(self.claim_type).map_err(|_| error!(DistributorError::TypeCastedError))
    }

    pub fn is_clawed_back(&self) -> bool {
        self.clawed_back != 0
    }

    pub fn is_closable(&self) -> bool {
        self.closable != 0
    }

    /// Current slot or timestamp, depending on the activation type
    pub fn current_point(&self, curr_slot: u64, curr_ts: i64) -> Result<u64> {
        self.activation_type()?.current_point(curr_slot, curr_ts)
    }

    /// Furthest an activation point may be set ahead of the current point
    pub fn max_activation_delay(activation_type: ActivationType) -> Result<u64> {
        match activation_type {
            ActivationType::Timestamp => Ok(MAX_ACTIVATION_DELAY_SECONDS),
            ActivationType::Slot => MAX_ACTIVATION_DELAY_SECONDS
                .checked_mul(1000)
                .and_then(|ms| ms.checked_div(MS_PER_SLOT))
                .ok_or_else(|| error!(DistributorError::ArithmeticError)),
        }
    }

    /// Rejects activation points beyond the allowed horizon
    pub fn validate_activation_point(
        activation_type: ActivationType,
        activation_point: u64,
        current_point: u64,
    ) -> Result<()> {
        let horizon = current_point
            .checked_add(Self::max_activation_delay(activation_type)?)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            activation_point <= horizon,
            DistributorError::StartTooFarInFuture
        );
        Ok(())
    }

    /// Claims are open once activated and until the distributor is clawed back
    pub fn validate_claim_window(&self, current_point: u64) -> Result<()> {
        require!(!self.is_clawed_back(), DistributorError::ClaimExpired);
        require!(
            current_point >= self.activation_point,
            DistributorError::ClaimingIsNotStarted
        );
        Ok(())
    }

    /// Checks that the claim instruction family matches the claim type and
    /// that the operator co-signed when the claim type requires it.
    /// An operator supplied to a permissionless distributor is ignored.
    pub fn authorize_claim(&self, operator: Option<Pubkey>, staking: bool) -> Result<()> {
        let claim_type = self.claim_type()?;
        require!(
            claim_type.is_staking() == staking,
            DistributorError::InvalidClaimType
        );

        if claim_type.is_permissioned() {
            let operator = operator.ok_or(DistributorError::InvalidOperator)?;
            require_keys_eq!(operator, self.operator, DistributorError::InvalidOperator);
        }
        Ok(())
    }

    /// Cap shared by the merkle allocations, bonus pool excluded
    pub fn max_total_claim_without_bonus(&self) -> Result<u64> {
        self.max_total_claim
            .checked_sub(self.airdrop_bonus.total_bonus)
            .ok_or_else(|| error!(DistributorError::ArithmeticError))
    }

    /// Registers a new claimant against the node and amount caps
    ///
    /// The whole entitlement of the claimant (unlocked, locked and bonus) is
    /// checked against the cap here, once. Later payouts to an admitted
    /// claimant are bounded by their own ClaimStatus, not by the cap.
    pub fn accept_new_claim(&mut self, amount_unlocked: u64, amount_locked: u64, bonus: u64) -> Result<()> {
        let num_nodes_claimed = self
            .num_nodes_claimed
            .checked_add(1)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            num_nodes_claimed <= self.max_num_nodes,
            DistributorError::MaxNodesExceeded
        );

        let entitlement = amount_unlocked
            .checked_add(amount_locked)
            .and_then(|amount| amount.checked_add(bonus))
            .ok_or(DistributorError::ArithmeticError)?;
        let projected_total = self
            .total_amount_claimed
            .checked_add(entitlement)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            projected_total <= self.max_total_claim,
            DistributorError::ExceededMaxClaim
        );

        self.num_nodes_claimed = num_nodes_claimed;
        Ok(())
    }

    /// Adds a payout to the aggregate counters
    pub fn record_claimed(&mut self, amount: u64, bonus: u64) -> Result<()> {
        let total_amount_claimed = self
            .total_amount_claimed
            .checked_add(amount)
            .and_then(|total| total.checked_add(bonus))
            .ok_or(DistributorError::ArithmeticError)?;

        let total_claimed_bonus = self
            .airdrop_bonus
            .total_claimed_bonus
            .checked_add(bonus)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            total_claimed_bonus <= self.airdrop_bonus.total_bonus,
            DistributorError::ExceededMaxClaim
        );

        self.total_amount_claimed = total_amount_claimed;
        self.airdrop_bonus.total_claimed_bonus = total_claimed_bonus;
        Ok(())
    }

    pub fn validate_clawback(&self, curr_ts: i64) -> Result<()> {
        require!(!self.is_clawed_back(), DistributorError::ClawbackAlreadyClaimed);
        require!(
            curr_ts >= self.clawback_start_ts,
            DistributorError::ClawbackBeforeStart
        );
        require!(curr_ts > self.end_ts, DistributorError::ClawbackDuringVesting);
        Ok(())
    }

    /// Moves the activation point, within the allowed horizon
    pub fn set_activation_point(&mut self, activation_point: u64, current_point: u64) -> Result<()> {
        Self::validate_activation_point(self.activation_type()?, activation_point, current_point)?;
        self.activation_point = activation_point;
        Ok(())
    }

    /// Replaces the clawback receiver, returning the previous one
    pub fn set_clawback_receiver(&mut self, new_clawback_receiver: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(
            self.clawback_receiver,
            new_clawback_receiver,
            DistributorError::SameClawbackReceiver
        );
        Ok(std::mem::replace(&mut self.clawback_receiver, new_clawback_receiver))
    }

    /// Replaces the admin, returning the previous one
    pub fn set_admin(&mut self, new_admin: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(self.admin, new_admin, DistributorError::SameAdmin);
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }

    /// Replaces the operator, returning the previous one.
    /// Permissioned distributors cannot fall back to the default key.
    pub fn set_operator(&mut self, new_operator: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(self.operator, new_operator, DistributorError::SameOperator);
        if self.claim_type()?.is_permissioned() {
            require_keys_neq!(new_operator, Pubkey::default(), DistributorError::InvalidOperator);
        }
        Ok(std::mem::replace(&mut self.operator, new_operator))
    }

    pub fn validate_close(&self) -> Result<()> {
        require!(self.is_closable(), DistributorError::CannotCloseDistributor);
        Ok(())
    }
}
