//! Off-chain mirror of the seeds the program validates.
//!
//! The `seeds = [...]` constraints in `instructions` and these helpers share
//! the tags in `constants`, so a client deriving addresses here always lands
//! on the accounts the program will accept.

use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, VAULT_PDA_SEED};

/// Vault record PDA and its canonical bump for `(seed, owner)`.
pub fn find_vault_pda_address(seed: u64, owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_PDA_SEED, seed.to_le_bytes().as_ref(), owner.as_ref()],
        program_id,
    )
}

/// Custody PDA and its canonical bump for a given vault record.
pub fn find_custody_address(vault_pda: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_SEED, vault_pda.as_ref()], program_id)
}

/// Both addresses of one vault, derived against this program's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub vault_pda: Pubkey,
    pub vault_pda_bump: u8,
    pub vault: Pubkey,
    pub vault_bump: u8,
}

impl VaultAddresses {
    pub fn find(seed: u64, owner: &Pubkey) -> Self {
        let (vault_pda, vault_pda_bump) = find_vault_pda_address(seed, owner, &crate::ID);
        let (vault, vault_bump) = find_custody_address(&vault_pda, &crate::ID);
        Self {
            vault_pda,
            vault_pda_bump,
            vault,
            vault_bump,
        }
    }
}
