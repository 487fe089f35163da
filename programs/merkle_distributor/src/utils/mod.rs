pub mod claim_settlement;
pub mod merkle_proof;
pub mod token;
pub mod vesting;
pub mod voter;

pub use claim_settlement::*;
pub use merkle_proof::*;
pub use token::*;
pub use vesting::*;
pub use voter::*;
