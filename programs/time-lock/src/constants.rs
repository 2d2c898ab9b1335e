use anchor_lang::prelude::*;

/// Domain tag of the vault record PDA: `["pda", seed_le, owner]`.
#[constant]
pub const VAULT_PDA_SEED: &[u8] = b"pda";

/// Domain tag of the custody PDA: `["vault", vault_pda]`.
#[constant]
pub const CUSTODY_SEED: &[u8] = b"vault";
