pub mod distributor_state;
pub mod claim_state;

pub use distributor_state::*;
pub use claim_state::*;
