pub mod claim_tokens_v0;
pub mod clawback_v0;
pub mod initialize_distributor_v0;

pub use claim_tokens_v0::*;
pub use clawback_v0::*;
pub use initialize_distributor_v0::*;
