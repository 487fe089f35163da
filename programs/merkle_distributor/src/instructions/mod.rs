pub mod new_distributor;
pub mod close_distributor;
pub mod close_claim_status;
pub mod set_activation_point;
pub mod clawback;
pub mod set_clawback_receiver;
pub mod set_admin;
pub mod set_operator;
pub mod new_claim;
pub mod claim_locked;
pub mod new_claim_and_stake;
pub mod claim_locked_and_stake;

pub use new_distributor::*;
pub use close_distributor::*;
pub use close_claim_status::*;
pub use set_activation_point::*;
pub use clawback::*;
pub use set_clawback_receiver::*;
pub use set_admin::*;
pub use set_operator::*;
pub use new_claim::*;
pub use claim_locked::*;
pub use new_claim_and_stake::*;
pub use claim_locked_and_stake::*;
