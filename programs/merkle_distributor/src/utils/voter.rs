use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};

use crate::constants::*;
use crate::error::*;

/**
 * Leading fields of the locked voter Escrow account
 *
 * Only the prefix needed to validate a claim-and-stake deposit is decoded,
 * trailing fields of the account are left untouched.
 */
#[derive(AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EscrowPrefix {
    pub locker: Pubkey,
    pub owner: Pubkey,
    pub bump: u8,
    pub tokens: Pubkey,
    pub amount: u64,
    pub escrow_started_at: i64,
    pub escrow_ends_at: i64,
    pub vote_delegate: Pubkey,
    pub is_max_lock: bool,
}

impl EscrowPrefix {
    /// Decodes an escrow account owned by the voter program
    pub fn load(escrow: &AccountInfo) -> Result<Self> {
        require_keys_eq!(*escrow.owner, VOTER_PROGRAM_ID, DistributorError::OwnerMismatch);

        let data = escrow.try_borrow_data()?;
        Self::try_from_account_data(&data)
    }

    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        require!(
            data.len() > 8 && data[..8] == anchor_discriminator(ESCROW_ACCOUNT_PREIMAGE),
            DistributorError::TypeCastedError
        );
        let mut payload = &data[8..];
        Self::deserialize(&mut payload).map_err(|_| error!(DistributorError::TypeCastedError))
    }

    /// The escrow must belong to the distributor locker and the claimant,
    /// hold its tokens in `escrow_tokens`, and be locked for the maximum duration.
    pub fn validate(&self, locker: Pubkey, claimant: Pubkey, escrow_tokens: Pubkey) -> Result<()> {
        require_keys_eq!(self.locker, locker, DistributorError::InvalidLocker);
        require_keys_eq!(self.owner, claimant, DistributorError::OwnerMismatch);
        require_keys_eq!(self.tokens, escrow_tokens, DistributorError::OwnerMismatch);
        require!(self.is_max_lock, DistributorError::EscrowIsNotMaxLock);
        Ok(())
    }
}

/// First 8 bytes of sha256(preimage), the Anchor discriminator scheme
pub fn anchor_discriminator(preimage: &str) -> [u8; 8] {
    let digest = hash(preimage.as_bytes()).to_bytes();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

pub fn increase_locked_amount_data(amount: u64) -> Vec<u8> {
    let mut data = anchor_discriminator(INCREASE_LOCKED_AMOUNT_PREIMAGE).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

/// Deposits `amount` from the distributor vault into the claimant's escrow
/// through the voter program, the distributor PDA signing as payer.
pub fn increase_locked_amount<'a>(
    voter_program: AccountInfo<'a>,
    locker: AccountInfo<'a>,
    escrow: AccountInfo<'a>,
    escrow_tokens: AccountInfo<'a>,
    distributor: AccountInfo<'a>,
    token_vault: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let instruction = Instruction {
        program_id: voter_program.key(),
        accounts: vec![
            AccountMeta::new(locker.key(), false),
            AccountMeta::new(escrow.key(), false),
            AccountMeta::new(escrow_tokens.key(), false),
            AccountMeta::new_readonly(distributor.key(), true),
            AccountMeta::new(token_vault.key(), false),
            AccountMeta::new_readonly(token_program.key(), false),
        ],
        data: increase_locked_amount_data(amount),
    };

    invoke_signed(
        &instruction,
        &[
            locker,
            escrow,
            escrow_tokens,
            distributor,
            token_vault,
            token_program,
            voter_program,
        ],
        signer_seeds,
    )?;
    Ok(())
}
