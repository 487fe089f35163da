use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing limits, PDA seeds, hashing prefixes and the identity of the
 * vote-escrow program used by the claim-and-stake instructions.
 */

/// ===== TIMING CONSTANTS =====

/// One day in seconds
/// - Minimum gap between the end of vesting and the start of clawback
#[constant]
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Maximum distance of an activation point from the current time (90 days)
/// - Checked when creating a distributor and in set_activation_point
/// - For slot activation the same horizon is converted with MS_PER_SLOT
#[constant]
pub const MAX_ACTIVATION_DELAY_SECONDS: u64 = 90 * 24 * 60 * 60;

/// Nominal slot duration used to convert the activation horizon into slots
#[constant]
pub const MS_PER_SLOT: u64 = 400;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["MerkleDistributor", base, mint, version]
/// - One distributor per (base, mint, version) combination
#[constant]
pub const DISTRIBUTOR_SEED: &str = "MerkleDistributor";

/// Seed for claim status PDA derivation
/// - Used in: ["ClaimStatus", claimant, distributor]
/// - The PDA makes a second first-claim collide on account creation
#[constant]
pub const CLAIM_STATUS_SEED: &str = "ClaimStatus";

/// ===== MERKLE TREE CONSTANTS =====

/// Prefix hashed in front of every leaf
pub const LEAF_PREFIX: &[u8] = &[0];

/// Prefix hashed in front of every intermediate node
pub const INTERMEDIATE_PREFIX: &[u8] = &[1];

/// ===== VOTE ESCROW CONSTANTS =====

/// Locked voter program that owns the locker and escrow accounts
pub const VOTER_PROGRAM_ID: Pubkey =
    anchor_lang::solana_program::pubkey!("voTpe3tHQ7AjQHMapgSue2HJFAh2cGsdokqN3XqmVSj");

/// Preimage of the voter program's increase_locked_amount instruction discriminator
pub const INCREASE_LOCKED_AMOUNT_PREIMAGE: &str = "global:increase_locked_amount";

/// Preimage of the voter program's Escrow account discriminator
pub const ESCROW_ACCOUNT_PREIMAGE: &str = "account:Escrow";
