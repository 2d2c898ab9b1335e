use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::constants::{CUSTODY_SEED, VAULT_PDA_SEED};
use crate::errors::TimeLockError;
use crate::events::VaultLocked;
use crate::state::VaultPda;

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct LockSol<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: created by the handler once the amount is accepted, so a
    /// rejected lock never touches it. The seeds pin it to (seed, signer).
    #[account(
        mut,
        seeds = [VAULT_PDA_SEED, seed.to_le_bytes().as_ref(), user.key().as_ref()],
        bump
    )]
    pub vault_pda: UncheckedAccount<'info>,

    /// Custody PDA. Stays system-owned with no data; only this program can
    /// sign for it.
    #[account(
        mut,
        seeds = [CUSTODY_SEED, vault_pda.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> LockSol<'info> {
    /// Allocates the record at its PDA, paid by `user`.
    ///
    /// An address that already holds lamports is topped up and claimed the
    /// way `init` does it. A live record is owned by this program, so the
    /// system program refuses it as already in use.
    fn create_vault_pda(&self, rent: &Rent, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        let vault_pda = self.vault_pda.to_account_info();
        let system_program = self.system_program.to_account_info();
        let space = VaultPda::LEN;
        let current_lamports = vault_pda.lamports();

        if current_lamports == 0 {
            let cpi_accounts = CreateAccount {
                from: self.user.to_account_info(),
                to: vault_pda,
            };
            let cpi_ctx = CpiContext::new_with_signer(system_program, cpi_accounts, signer_seeds);
            return create_account(cpi_ctx, rent.minimum_balance(space), space as u64, &crate::ID);
        }

        let required_lamports = rent
            .minimum_balance(space)
            .max(1)
            .saturating_sub(current_lamports);
        if required_lamports > 0 {
            let cpi_accounts = Transfer {
                from: self.user.to_account_info(),
                to: vault_pda.clone(),
            };
            let cpi_ctx = CpiContext::new(system_program.clone(), cpi_accounts);
            transfer(cpi_ctx, required_lamports)?;
        }

        let cpi_accounts = Allocate {
            account_to_allocate: vault_pda.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
        allocate(cpi_ctx, space as u64)?;

        let cpi_accounts = Assign {
            account_to_assign: vault_pda,
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program, cpi_accounts, signer_seeds);
        assign(cpi_ctx, &crate::ID)
    }
}

pub fn lock_sol(
    ctx: Context<LockSol>,
    seed: u64,
    locked_amount: u64,
    unlock_at: u64,
) -> Result<()> {
    let rent = Rent::get()?;
    check_lock_amount(locked_amount, &rent)?;

    let owner = ctx.accounts.user.key();
    let bump = ctx.bumps.vault_pda;
    let seed_bytes = seed.to_le_bytes();
    let bump_bytes = [bump];
    let signer_seeds: &[&[&[u8]]] =
        &[&[VAULT_PDA_SEED, seed_bytes.as_ref(), owner.as_ref(), &bump_bytes]];
    ctx.accounts.create_vault_pda(&rent, signer_seeds)?;

    // Insufficient lamports surface as the system program's own error.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
    transfer(cpi_ctx, locked_amount)?;

    let record = VaultPda {
        seed,
        owner,
        locked_amount,
        unlock_at,
        bump,
    };
    {
        let vault_pda = ctx.accounts.vault_pda.to_account_info();
        let mut data = vault_pda.try_borrow_mut_data()?;
        let dst: &mut [u8] = &mut data;
        let mut writer = std::io::Cursor::new(dst);
        record.try_serialize(&mut writer)?;
    }

    emit!(VaultLocked {
        owner,
        vault_pda: ctx.accounts.vault_pda.key(),
        vault: ctx.accounts.vault.key(),
        seed,
        locked_amount,
        unlock_at,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Locked {} lamports for {} until {}", locked_amount, owner, unlock_at);
    Ok(())
}

/// Rejects amounts the custody account could not hold on its own.
///
/// Zero is reported first so callers always see `LockingZeroSolError` for it.
pub fn check_lock_amount(locked_amount: u64, rent: &Rent) -> Result<()> {
    require!(locked_amount > 0, TimeLockError::LockingZeroSolError);
    require!(
        locked_amount >= rent.minimum_balance(0),
        TimeLockError::LockBelowRentExemption
    );
    Ok(())
}
