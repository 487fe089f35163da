use anchor_lang::prelude::*;

/// Event emitted when a claimant creates their claim status
#[event]
pub struct NewClaimEvent {
    /// Who claimed
    pub claimant: Pubkey,
    /// Unix timestamp of the claim
    pub timestamp: i64,
}

/// Event emitted when tokens leave the vault on behalf of a claimant
#[event]
pub struct ClaimedEvent {
    /// Who claimed
    pub claimant: Pubkey,
    /// Amount transferred or staked in this instruction
    pub amount: u64,
}

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Base key used in the PDA derivation
    pub base: Pubkey,
    /// Token mint address
    pub mint: Pubkey,
    /// Airdrop version
    pub version: u64,
    /// Admin of the distributor
    pub admin: Pubkey,
    /// Cap on tokens claimable, bonus pool included
    pub max_total_claim: u64,
    /// Cap on the number of claimants
    pub max_num_nodes: u64,
    /// Size of the bonus pool
    pub total_bonus: u64,
    /// Raw claim type tag
    pub claim_type: u8,
}

/// Event emitted when the activation point changes
#[event]
pub struct ActivationPointSet {
    pub distributor: Pubkey,
    pub activation_point: u64,
}

/// Event emitted when the clawback receiver changes
#[event]
pub struct ClawbackReceiverSet {
    pub distributor: Pubkey,
    pub old_clawback_receiver: Pubkey,
    pub new_clawback_receiver: Pubkey,
}

/// Event emitted when the admin changes
#[event]
pub struct AdminSet {
    pub distributor: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Event emitted when the operator changes
#[event]
pub struct OperatorSet {
    pub distributor: Pubkey,
    pub old_operator: Pubkey,
    pub new_operator: Pubkey,
}

/// Event emitted when unclaimed tokens are swept to the clawback receiver
#[event]
pub struct ClawedBack {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Token account that received the funds
    pub clawback_receiver: Pubkey,
    /// Amount of tokens moved out of the vault
    pub amount: u64,
}

/// Event emitted when a closable distributor is torn down
#[event]
pub struct DistributorClosed {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    /// Vault balance returned to the destination token account
    pub amount_returned: u64,
}

/// Event emitted when a closable ClaimStatus account is torn down
#[event]
pub struct ClaimStatusClosed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant that received the rent
    pub claimant: Pubkey,
    /// Locked amount withdrawn before closing
    pub locked_amount_withdrawn: u64,
}
