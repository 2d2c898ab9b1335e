use anchor_lang::prelude::*;

#[event]
pub struct VaultLocked {
    pub owner: Pubkey,
    pub vault_pda: Pubkey,
    pub vault: Pubkey,
    pub seed: u64,
    pub locked_amount: u64,
    pub unlock_at: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultWithdrawn {
    pub owner: Pubkey,
    pub vault_pda: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
