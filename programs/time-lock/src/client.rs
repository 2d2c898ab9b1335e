//! Instruction builders for Rust callers.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData};

use crate::pda::VaultAddresses;

/// Builds `lock_sol`, returning the instruction and the addresses it targets.
pub fn lock_instruction(
    user: &Pubkey,
    seed: u64,
    locked_amount: u64,
    unlock_at: u64,
) -> (Instruction, VaultAddresses) {
    let addresses = VaultAddresses::find(seed, user);
    let accounts = crate::accounts::LockSol {
        user: *user,
        vault_pda: addresses.vault_pda,
        vault: addresses.vault,
        system_program: system_program::ID,
    };
    let data = crate::instruction::LockSol {
        seed,
        locked_amount,
        unlock_at,
    };

    let ix = Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    };
    (ix, addresses)
}

/// Builds `withdraw_sol` for the vault `user` locked under `seed`.
pub fn withdraw_instruction(user: &Pubkey, seed: u64) -> Instruction {
    let addresses = VaultAddresses::find(seed, user);
    let accounts = crate::accounts::WithdrawSol {
        user: *user,
        vault_pda: addresses.vault_pda,
        vault: addresses.vault,
        system_program: system_program::ID,
    };

    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::WithdrawSol {}.data(),
    }
}
