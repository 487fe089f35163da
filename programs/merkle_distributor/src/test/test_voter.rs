#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use anchor_lang::solana_program::hash::hash;

    use crate::constants::*;
    use crate::error::DistributorError;
    use crate::test::{assert_distributor_error, test_key};
    use crate::utils::*;

    fn escrow_data(locker: Pubkey, owner: Pubkey, tokens: Pubkey, is_max_lock: bool) -> Vec<u8> {
        let mut data = anchor_discriminator(ESCROW_ACCOUNT_PREIMAGE).to_vec();
        data.extend_from_slice(locker.as_ref());
        data.extend_from_slice(owner.as_ref());
        data.push(254);
        data.extend_from_slice(tokens.as_ref());
        data.extend_from_slice(&5_000u64.to_le_bytes());
        data.extend_from_slice(&1_700_000_000i64.to_le_bytes());
        data.extend_from_slice(&1_800_000_000i64.to_le_bytes());
        data.extend_from_slice(owner.as_ref());
        data.push(u8::from(is_max_lock));
        // Trailing fields of the escrow are ignored
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    #[test]
    fn test_discriminators_follow_anchor_scheme() {
        let digest = hash(b"global:increase_locked_amount").to_bytes();
        let data = increase_locked_amount_data(42);

        assert_eq!(data.len(), 16);
        assert_eq!(&data[..8], &digest[..8]);
        assert_eq!(&data[8..], &42u64.to_le_bytes());
    }

    #[test]
    fn test_decode_escrow_prefix() {
        let (locker, owner, tokens) = (test_key(1), test_key(2), test_key(3));
        let escrow = EscrowPrefix::try_from_account_data(&escrow_data(locker, owner, tokens, true)).unwrap();

        assert_eq!(escrow.locker, locker);
        assert_eq!(escrow.owner, owner);
        assert_eq!(escrow.bump, 254);
        assert_eq!(escrow.tokens, tokens);
        assert_eq!(escrow.amount, 5_000);
        assert_eq!(escrow.vote_delegate, owner);
        assert!(escrow.is_max_lock);

        escrow.validate(locker, owner, tokens).unwrap();
    }

    #[test]
    fn test_reject_foreign_account_data() {
        let mut data = escrow_data(test_key(1), test_key(2), test_key(3), true);
        data[0] ^= 0xff;
        assert_distributor_error(
            EscrowPrefix::try_from_account_data(&data),
            DistributorError::TypeCastedError,
        );

        let short = anchor_discriminator(ESCROW_ACCOUNT_PREIMAGE).to_vec();
        assert_distributor_error(
            EscrowPrefix::try_from_account_data(&short),
            DistributorError::TypeCastedError,
        );
    }

    #[test]
    fn test_validate_escrow() {
        let (locker, owner, tokens) = (test_key(1), test_key(2), test_key(3));
        let escrow = EscrowPrefix::try_from_account_data(&escrow_data(locker, owner, tokens, true)).unwrap();

        assert_distributor_error(
            escrow.validate(test_key(9), owner, tokens),
            DistributorError::InvalidLocker,
        );
        assert_distributor_error(
            escrow.validate(locker, test_key(9), tokens),
            DistributorError::OwnerMismatch,
        );
        assert_distributor_error(
            escrow.validate(locker, owner, test_key(9)),
            DistributorError::OwnerMismatch,
        );

        let not_max_lock =
            EscrowPrefix::try_from_account_data(&escrow_data(locker, owner, tokens, false)).unwrap();
        assert_distributor_error(
            not_max_lock.validate(locker, owner, tokens),
            DistributorError::EscrowIsNotMaxLock,
        );
    }
}
