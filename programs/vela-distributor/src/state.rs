use anchor_lang::prelude::*;

use crate::constants::SUPPORTED_DISTRIBUTOR_VERSION;
use crate::error::ErrorCode;

#[account] // seed [DISTRIBUTOR_V0_SEED_PREFIX, mint, admin, version]
#[derive(InitSpace)]
pub struct DistributorV0 {
    /// Schema version of this distributor, checked on every operation.
    pub version: u8,

    /// Merkle root committing the full leaf set for this campaign.
    pub root: [u8; 32],

    /// The mint of the token being distributed.
    pub mint: Pubkey,

    /// ATA owned by this distributor that holds the undistributed tokens.
    pub token_vault: Pubkey,

    /// The admin (authority) pubkey for this distributor. Created the campaign,
    /// and is the only signer allowed to claw it back.
    pub admin: Pubkey,

    /// Hard cap: cumulative claimed amount may never exceed this.
    pub max_total_claim: u64,

    /// Hard cap: number of successful claims may never exceed this.
    pub max_num_nodes: u64,

    /// Cumulative amount transferred out by successful claims. Never decreases.
    pub total_amount_claimed: u64,

    /// Number of leaves claimed so far. Never decreases.
    pub num_nodes_claimed: u64,

    /// Unix timestamp at which vesting begins.
    pub start_vesting_ts: i64,

    /// Unix timestamp at which entitlements are fully vested.
    pub end_vesting_ts: i64,

    /// Once true, the campaign is terminal: no claims, no second clawback.
    pub clawed_back: bool,

    /// Bump seed for the Distributor PDA.
    pub bump: u8,
}

impl DistributorV0 {
    /// Eager validation of initialization parameters. Anything out of range is
    /// rejected before an account is written.
    pub fn validate_params(
        version: u8,
        max_total_claim: u64,
        max_num_nodes: u64,
        start_vesting_ts: i64,
        end_vesting_ts: i64,
    ) -> Result<()> {
        require!(
            version == SUPPORTED_DISTRIBUTOR_VERSION,
            ErrorCode::InvalidParameters
        );
        require!(max_total_claim > 0, ErrorCode::InvalidParameters);
        require!(max_num_nodes > 0, ErrorCode::InvalidParameters);
        require!(
            start_vesting_ts < end_vesting_ts,
            ErrorCode::InvalidParameters
        );
        Ok(())
    }

    /// Fails once the distributor has been clawed back.
    pub fn assert_open(&self) -> Result<()> {
        require!(!self.clawed_back, ErrorCode::ClawedBack);
        Ok(())
    }

    /// Registers one successful claim of `amount` against the caps.
    /// Both counters move together or not at all.
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.assert_open()?;

        let total_amount_claimed = self
            .total_amount_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::NumericOverflow)?;
        let num_nodes_claimed = self
            .num_nodes_claimed
            .checked_add(1)
            .ok_or(ErrorCode::NumericOverflow)?;

        require!(
            total_amount_claimed <= self.max_total_claim,
            ErrorCode::CapExceeded
        );
        require!(num_nodes_claimed <= self.max_num_nodes, ErrorCode::CapExceeded);

        self.total_amount_claimed = total_amount_claimed;
        self.num_nodes_claimed = num_nodes_claimed;
        Ok(())
    }

    /// Terminal transition. A second call fails; there is no way back.
    pub fn claw_back(&mut self) -> Result<()> {
        require!(!self.clawed_back, ErrorCode::AlreadyClawedBack);
        self.clawed_back = true;
        Ok(())
    }
}

#[account] // seed [CLAIM_STATUS_V0_SEED_PREFIX, distributor, claimant]
#[derive(InitSpace)]
pub struct ClaimStatusV0 {
    /// The claimant who received the tokens.
    pub claimant: Pubkey,

    /// Pubkey of the Distributor this claim was made against.
    pub distributor: Pubkey,

    /// Amount actually transferred: the vested portion at `claimed_at`.
    pub amount_claimed: u64,

    /// Timestamp of when the claim was successfully processed.
    pub claimed_at: i64,

    /// Bump seed for the ClaimStatus PDA.
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distributor(max_total_claim: u64, max_num_nodes: u64) -> DistributorV0 {
        DistributorV0 {
            version: SUPPORTED_DISTRIBUTOR_VERSION,
            root: [0; 32],
            mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            admin: Pubkey::new_unique(),
            max_total_claim,
            max_num_nodes,
            total_amount_claimed: 0,
            num_nodes_claimed: 0,
            start_vesting_ts: 100_000,
            end_vesting_ts: 200_000,
            clawed_back: false,
            bump: 255,
        }
    }

    #[test]
    fn test_validate_params_accepts_sane_input() {
        assert!(DistributorV0::validate_params(0, 1_000_000, 1, 100_000, 200_000).is_ok());
    }

    #[test]
    fn test_validate_params_rejections() {
        // unsupported version
        assert_eq!(
            DistributorV0::validate_params(1, 1, 1, 0, 1),
            Err(ErrorCode::InvalidParameters.into())
        );
        // zero caps
        assert_eq!(
            DistributorV0::validate_params(0, 0, 1, 0, 1),
            Err(ErrorCode::InvalidParameters.into())
        );
        assert_eq!(
            DistributorV0::validate_params(0, 1, 0, 0, 1),
            Err(ErrorCode::InvalidParameters.into())
        );
        // empty or inverted vesting window
        assert_eq!(
            DistributorV0::validate_params(0, 1, 1, 5, 5),
            Err(ErrorCode::InvalidParameters.into())
        );
        assert_eq!(
            DistributorV0::validate_params(0, 1, 1, 6, 5),
            Err(ErrorCode::InvalidParameters.into())
        );
    }

    #[test]
    fn test_record_claim_moves_both_counters() {
        let mut d = distributor(1_000, 10);
        d.record_claim(400).unwrap();
        assert_eq!(d.total_amount_claimed, 400);
        assert_eq!(d.num_nodes_claimed, 1);
        d.record_claim(600).unwrap();
        assert_eq!(d.total_amount_claimed, 1_000);
        assert_eq!(d.num_nodes_claimed, 2);
    }

    #[test]
    fn test_record_claim_enforces_amount_cap() {
        let mut d = distributor(1_000, 10);
        d.record_claim(999).unwrap();
        assert_eq!(d.record_claim(2), Err(ErrorCode::CapExceeded.into()));
        // Failed claim left state untouched.
        assert_eq!(d.total_amount_claimed, 999);
        assert_eq!(d.num_nodes_claimed, 1);
    }

    #[test]
    fn test_record_claim_enforces_node_cap() {
        let mut d = distributor(1_000_000, 1);
        d.record_claim(10).unwrap();
        assert_eq!(d.record_claim(10), Err(ErrorCode::CapExceeded.into()));
        assert_eq!(d.num_nodes_claimed, 1);
    }

    #[test]
    fn test_record_claim_overflow_is_an_error() {
        let mut d = distributor(u64::MAX, u64::MAX);
        d.total_amount_claimed = u64::MAX;
        assert_eq!(d.record_claim(1), Err(ErrorCode::NumericOverflow.into()));
    }

    #[test]
    fn test_claw_back_is_terminal() {
        let mut d = distributor(1_000, 10);
        d.claw_back().unwrap();
        assert!(d.clawed_back);
        assert_eq!(d.claw_back(), Err(ErrorCode::AlreadyClawedBack.into()));
        assert_eq!(d.record_claim(1), Err(ErrorCode::ClawedBack.into()));
        assert_eq!(d.assert_open(), Err(ErrorCode::ClawedBack.into()));
    }
}
