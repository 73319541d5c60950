pub mod address_finder;
pub mod instruction_builders;

pub use address_finder::AddressFinder;
pub use instruction_builders::{
    build_claim_tokens_v0_ix, build_clawback_v0_ix, build_initialize_distributor_v0_ix,
};
