#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::constants::*;
    use crate::error::DistributorError;
    use crate::instructions::NewDistributorParams;
    use crate::state::*;
    use crate::test::{assert_distributor_error, test_key};

    const NOW: i64 = 1_700_000_000;
    const SLOT: u64 = 250_000_000;

    fn valid_params() -> NewDistributorParams {
        NewDistributorParams {
            version: 0,
            root: [7; 32],
            total_claim: 1_000_000,
            max_num_nodes: 100,
            start_vesting_ts: NOW + 10,
            end_vesting_ts: NOW + 1_000,
            clawback_start_ts: NOW + 1_000 + SECONDS_PER_DAY,
            activation_point: (NOW + 10) as u64,
            activation_type: 1,
            closable: false,
            total_bonus: 0,
            bonus_vesting_duration: 0,
            claim_type: 0,
            operator: Pubkey::default(),
            locker: Pubkey::default(),
        }
    }

    #[test]
    fn test_valid_params() {
        valid_params().validate(SLOT, NOW).unwrap();

        // Vesting may start right now
        let params = NewDistributorParams {
            start_vesting_ts: NOW,
            ..valid_params()
        };
        params.validate(SLOT, NOW).unwrap();
    }

    #[test]
    fn test_vesting_window() {
        let params = NewDistributorParams {
            start_vesting_ts: NOW + 2_000,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::StartTimestampAfterEnd);

        let params = NewDistributorParams {
            start_vesting_ts: NOW - 1,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::TimestampsNotInFuture);
    }

    #[test]
    fn test_clawback_needs_one_day_after_vesting() {
        let params = NewDistributorParams {
            clawback_start_ts: NOW + 1_000 + SECONDS_PER_DAY - 1,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::InsufficientClawbackDelay);
    }

    #[test]
    fn test_activation_horizon() {
        let at_horizon = NewDistributorParams {
            activation_point: NOW as u64 + MAX_ACTIVATION_DELAY_SECONDS,
            ..valid_params()
        };
        at_horizon.validate(SLOT, NOW).unwrap();

        let too_far = NewDistributorParams {
            activation_point: NOW as u64 + MAX_ACTIVATION_DELAY_SECONDS + 1,
            ..valid_params()
        };
        assert_distributor_error(too_far.validate(SLOT, NOW), DistributorError::StartTooFarInFuture);

        // 90 days of 400ms slots
        let max_slots = MerkleDistributor::max_activation_delay(ActivationType::Slot).unwrap();
        assert_eq!(max_slots, 19_440_000);

        let slot_params = NewDistributorParams {
            activation_type: 0,
            activation_point: SLOT + max_slots,
            ..valid_params()
        };
        slot_params.validate(SLOT, NOW).unwrap();

        let slot_params = NewDistributorParams {
            activation_type: 0,
            activation_point: SLOT + max_slots + 1,
            ..valid_params()
        };
        assert_distributor_error(slot_params.validate(SLOT, NOW), DistributorError::StartTooFarInFuture);
    }

    #[test]
    fn test_unknown_tags() {
        let params = NewDistributorParams {
            activation_type: 2,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::InvalidActivationType);

        let params = NewDistributorParams {
            claim_type: 4,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::InvalidClaimType);
    }

    #[test]
    fn test_claim_type_requirements() {
        let params = NewDistributorParams {
            claim_type: 1,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::InvalidOperator);

        let params = NewDistributorParams {
            claim_type: 2,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::InvalidLocker);

        let params = NewDistributorParams {
            claim_type: 3,
            operator: test_key(1),
            locker: test_key(2),
            ..valid_params()
        };
        params.validate(SLOT, NOW).unwrap();
    }

    #[test]
    fn test_bonus_must_fit_in_total_claim() {
        let params = NewDistributorParams {
            total_bonus: 1_000_001,
            ..valid_params()
        };
        assert_distributor_error(params.validate(SLOT, NOW), DistributorError::ExceededMaxClaim);
    }

    #[test]
    fn test_account_sizes() {
        assert_eq!(MerkleDistributor::LEN, 448);
        assert_eq!(ClaimStatus::LEN, 160);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(u32::from(DistributorError::InsufficientUnlockedTokens), 6000);
        assert_eq!(u32::from(DistributorError::ClawbackBeforeStart), 6008);
        assert_eq!(u32::from(DistributorError::ClaimingIsNotStarted), 6018);
        assert_eq!(u32::from(DistributorError::EscrowIsNotMaxLock), 6027);
    }
}
