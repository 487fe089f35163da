use crate::state::{AirdropBonus, ClaimStatus, MerkleDistributor};

pub const T: i64 = 1_700_000_000;

/// Timestamp-activated, permissionless distributor vesting over [T, T + 1000]
pub fn sample_distributor(max_total_claim: u64, total_bonus: u64, bonus_vesting_duration: u64) -> MerkleDistributor {
    MerkleDistributor {
        max_total_claim,
        max_num_nodes: 10,
        start_ts: T,
        end_ts: T + 1000,
        clawback_start_ts: T + 1000 + 86_400,
        activation_point: T as u64,
        activation_type: 1,
        claim_type: 0,
        airdrop_bonus: AirdropBonus {
            total_bonus,
            vesting_duration: bonus_vesting_duration,
            total_claimed_bonus: 0,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistributorError;
    use crate::test::assert_distributor_error;
    use crate::utils::*;

    #[test]
    fn test_linear_vested_bounds() {
        assert_eq!(linear_vested(900, 0, 1000).unwrap(), 0);
        assert_eq!(linear_vested(900, 500, 1000).unwrap(), 450);
        assert_eq!(linear_vested(900, 1000, 1000).unwrap(), 900);
        assert_eq!(linear_vested(900, 5000, 1000).unwrap(), 900);
        // Zero duration vests at once
        assert_eq!(linear_vested(900, 0, 0).unwrap(), 900);
        // Rounds down
        assert_eq!(linear_vested(10, 1, 3).unwrap(), 3);
    }

    #[test]
    fn test_linear_vested_large_amounts_do_not_overflow() {
        let vested = linear_vested(u64::MAX, u64::MAX - 1, u64::MAX).unwrap();
        assert_eq!(vested, u64::MAX - 1);
    }

    #[test]
    fn test_locked_vested_schedule() {
        assert_eq!(locked_vested(900, T - 1, T, T + 1000).unwrap(), 0);
        assert_eq!(locked_vested(900, T, T, T + 1000).unwrap(), 0);
        assert_eq!(locked_vested(900, T + 500, T, T + 1000).unwrap(), 450);
        assert_eq!(locked_vested(900, T + 999, T, T + 1000).unwrap(), 899);
        assert_eq!(locked_vested(900, T + 1000, T, T + 1000).unwrap(), 900);
        // Cliff when start and end coincide
        assert_eq!(locked_vested(900, T, T, T).unwrap(), 900);
    }

    #[test]
    fn test_locked_vested_is_monotonic() {
        let mut previous = 0;
        for offset in (0..=1100).step_by(37) {
            let vested = locked_vested(12_345, T + offset, T, T + 1000).unwrap();
            assert!(vested >= previous);
            assert!(vested <= 12_345);
            previous = vested;
        }
    }

    #[test]
    fn test_amount_withdrawable_subtracts_withdrawn() {
        let mut claim_status = ClaimStatus {
            locked_amount: 900,
            ..Default::default()
        };
        assert_eq!(claim_status.amount_withdrawable(T + 500, T, T + 1000).unwrap(), 450);

        claim_status.record_withdrawal(450).unwrap();
        assert_eq!(claim_status.amount_withdrawable(T + 500, T, T + 1000).unwrap(), 0);
        assert_eq!(claim_status.amount_withdrawable(T + 1000, T, T + 1000).unwrap(), 450);

        assert_distributor_error(
            claim_status.record_withdrawal(451),
            DistributorError::ArithmeticError,
        );
        assert_eq!(claim_status.locked_amount_withdrawn, 450);
    }

    #[test]
    fn test_bonus_entitlement_is_pro_rata() {
        // 1000 tokens of allocations share a pool of 200
        let distributor = sample_distributor(1200, 200, 100);
        assert_eq!(bonus_entitlement(&distributor, 1000).unwrap(), 200);
        assert_eq!(bonus_entitlement(&distributor, 250).unwrap(), 50);
        assert_eq!(bonus_entitlement(&distributor, 3).unwrap(), 0);

        let no_bonus = sample_distributor(1000, 0, 0);
        assert_eq!(bonus_entitlement(&no_bonus, 1000).unwrap(), 0);
    }

    #[test]
    fn test_bonus_vests_from_activation_point() {
        let distributor = sample_distributor(1200, 200, 100);
        let activation = distributor.activation_point;

        assert_eq!(bonus_vested(&distributor, 200, activation).unwrap(), 0);
        assert_eq!(bonus_vested(&distributor, 200, activation + 50).unwrap(), 100);
        assert_eq!(bonus_vested(&distributor, 200, activation + 100).unwrap(), 200);
        assert_eq!(bonus_vested(&distributor, 200, activation + 1_000).unwrap(), 200);
    }

    #[test]
    fn test_new_claim_amounts() {
        let distributor = sample_distributor(1200, 200, 100);

        let claimable =
            ClaimableAmounts::for_new_claim(&distributor, 100, 900, T + 50, (T + 50) as u64).unwrap();
        assert_eq!(
            claimable,
            ClaimableAmounts {
                unlocked: 100,
                locked: 0,
                bonus: 100
            }
        );
        assert_eq!(claimable.base_amount().unwrap(), 100);
        assert_eq!(claimable.total().unwrap(), 200);
    }

    #[test]
    fn test_new_claim_before_vesting_start() {
        let mut distributor = sample_distributor(1000, 0, 0);
        // Activated early, but vesting has not started yet
        distributor.activation_point = (T - 100) as u64;

        assert_distributor_error(
            ClaimableAmounts::for_new_claim(&distributor, 100, 900, T - 1, (T - 1) as u64),
            DistributorError::ClaimingIsNotStarted,
        );
    }

    #[test]
    fn test_claims_expire_after_clawback() {
        let mut distributor = sample_distributor(1000, 0, 0);
        distributor.clawed_back = 1;

        assert_distributor_error(
            ClaimableAmounts::for_new_claim(&distributor, 100, 900, T + 10, (T + 10) as u64),
            DistributorError::ClaimExpired,
        );
        assert_distributor_error(
            ClaimableAmounts::for_existing_claim(&ClaimStatus::default(), &distributor, T + 10, (T + 10) as u64),
            DistributorError::ClaimExpired,
        );
    }
}
