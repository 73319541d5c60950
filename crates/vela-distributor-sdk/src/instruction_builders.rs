use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData as _;
use anchor_spl::associated_token::get_associated_token_address;
use vela_distributor::ProofEntry;

use crate::AddressFinder;

pub fn build_initialize_distributor_v0_ix(
    address_finder: &AddressFinder,
    mint: Pubkey,
    admin: Pubkey,
    version: u8,
    root: [u8; 32],
    max_total_claim: u64,
    max_num_nodes: u64,
    start_vesting_ts: i64,
    end_vesting_ts: i64,
) -> Result<(
    Instruction,
    vela_distributor::accounts::InitializeDistributorV0,
    vela_distributor::instruction::InitializeDistributorV0,
)> {
    let (distributor, _) = address_finder.find_distributor_v0_address(&mint, &admin, version);
    let token_vault = address_finder.find_token_vault_address(&distributor, &mint);

    let ix_accounts = vela_distributor::accounts::InitializeDistributorV0 {
        distributor,
        mint,
        token_vault,
        admin,
        system_program: address_finder.system_program_id,
        associated_token_program: address_finder.associated_token_program_id,
        token_program: address_finder.token_program_id,
    };

    let ix_data = vela_distributor::instruction::InitializeDistributorV0 {
        version,
        root,
        max_total_claim,
        max_num_nodes,
        start_vesting_ts,
        end_vesting_ts,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_tokens_v0_ix(
    address_finder: &AddressFinder,
    mint: Pubkey,
    admin: Pubkey,
    version: u8,
    claimant: Pubkey,
    index: u64,
    amount: u64,
    proof: Vec<ProofEntry>,
) -> Result<(
    Instruction,
    vela_distributor::accounts::ClaimTokensV0,
    vela_distributor::instruction::ClaimTokensV0,
)> {
    let (distributor, _) = address_finder.find_distributor_v0_address(&mint, &admin, version);
    let token_vault = address_finder.find_token_vault_address(&distributor, &mint);
    let (claim_status, _) = address_finder.find_claim_status_v0_address(&distributor, &claimant);
    let claimant_token_account = get_associated_token_address(&claimant, &mint);

    let ix_accounts = vela_distributor::accounts::ClaimTokensV0 {
        distributor,
        claimant,
        mint,
        token_vault,
        claimant_token_account,
        claim_status,
        token_program: address_finder.token_program_id,
        associated_token_program: address_finder.associated_token_program_id,
        system_program: address_finder.system_program_id,
    };

    let ix_data = vela_distributor::instruction::ClaimTokensV0 {
        index,
        amount,
        proof,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_clawback_v0_ix(
    address_finder: &AddressFinder,
    mint: Pubkey,
    admin: Pubkey,
    version: u8,
    destination: Pubkey,
) -> Result<(
    Instruction,
    vela_distributor::accounts::ClawbackV0,
    vela_distributor::instruction::ClawbackV0,
)> {
    let (distributor, _) = address_finder.find_distributor_v0_address(&mint, &admin, version);
    let token_vault = address_finder.find_token_vault_address(&distributor, &mint);

    let ix_accounts = vela_distributor::accounts::ClawbackV0 {
        distributor,
        from: token_vault,
        to: destination,
        admin,
        token_program: address_finder.token_program_id,
    };

    let ix_data = vela_distributor::instruction::ClawbackV0 {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> AddressFinder {
        AddressFinder::default()
    }

    #[test]
    fn test_initialize_ix_targets_the_program() {
        let (ix, ix_accounts, _) = build_initialize_distributor_v0_ix(
            &finder(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            [0; 32],
            1_000_000,
            10,
            100_000,
            200_000,
        )
        .unwrap();

        assert_eq!(ix.program_id, finder().program_id);
        assert_eq!(ix.accounts.len(), 7);
        // Instruction data starts with the 8-byte anchor discriminator.
        assert!(ix.data.len() > 8);

        let (expected, _) = finder().find_distributor_v0_address(
            &ix_accounts.mint,
            &ix_accounts.admin,
            0,
        );
        assert_eq!(ix_accounts.distributor, expected);
    }

    #[test]
    fn test_claim_ix_wires_claimant_scoped_accounts() {
        let mint = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();

        let (ix, ix_accounts, ix_data) = build_claim_tokens_v0_ix(
            &finder(),
            mint,
            admin,
            0,
            claimant,
            3,
            1_000,
            vec![ProofEntry {
                sibling: [7; 32],
                is_left: true,
            }],
        )
        .unwrap();

        assert_eq!(ix.program_id, finder().program_id);
        assert_eq!(ix_data.index, 3);
        assert_eq!(
            ix_accounts.claimant_token_account,
            get_associated_token_address(&claimant, &mint)
        );
        let (expected_status, _) =
            finder().find_claim_status_v0_address(&ix_accounts.distributor, &claimant);
        assert_eq!(ix_accounts.claim_status, expected_status);
    }

    #[test]
    fn test_clawback_ix_sends_vault_to_destination() {
        let mint = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let destination = Pubkey::new_unique();

        let (_, ix_accounts, _) =
            build_clawback_v0_ix(&finder(), mint, admin, 0, destination).unwrap();

        assert_eq!(ix_accounts.to, destination);
        assert_eq!(
            ix_accounts.from,
            get_associated_token_address(&ix_accounts.distributor, &mint)
        );
        assert_eq!(ix_accounts.admin, admin);
    }
}
