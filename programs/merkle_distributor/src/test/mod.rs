use anchor_lang::prelude::*;

use crate::error::DistributorError;

pub mod test_vesting;
pub mod test_params;
pub mod test_voter;

/// Fails unless `result` is the given program error
pub fn assert_distributor_error<T: std::fmt::Debug>(result: Result<T>, expected: DistributorError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(Error::AnchorError(anchor_error)) => {
            assert_eq!(
                anchor_error.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                anchor_error.error_name
            );
        }
        Err(err) => panic!("expected {:?}, got {:?}", expected, err),
    }
}

pub fn test_key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}
