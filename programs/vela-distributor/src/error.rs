use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid distributor parameters.")]
    InvalidParameters,
    /// Not constructed by a handler: a duplicate initialize fails inside the
    /// `init` constraint on the distributor PDA as account-already-in-use.
    /// Declared as the stable code clients map that failure onto.
    #[msg("A distributor already exists for this (mint, admin, version) key.")]
    AlreadyExists,
    #[msg("Invalid Merkle proof provided.")]
    InvalidProof,
    /// Not constructed by a handler: a replayed claim fails inside the `init`
    /// constraint on the claim-status PDA before the handler runs. Declared
    /// as the stable code clients map that failure onto.
    #[msg("Tokens for this leaf have already been claimed.")]
    AlreadyClaimed,
    #[msg("Claim would exceed the distributor's total-claim or node-count cap.")]
    CapExceeded,
    #[msg("Unauthorized access or mismatched authority.")]
    Unauthorized,
    #[msg("The distributor has been clawed back; no further claims are accepted.")]
    ClawedBack,
    #[msg("The distributor has already been clawed back.")]
    AlreadyClawedBack,
    #[msg("A calculation resulted in a numeric overflow.")]
    NumericOverflow,
}
