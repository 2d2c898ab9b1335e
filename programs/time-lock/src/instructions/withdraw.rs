use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{CUSTODY_SEED, VAULT_PDA_SEED};
use crate::errors::TimeLockError;
use crate::events::VaultWithdrawn;
use crate::state::VaultPda;

#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// The signer's key is part of the seeds: a record locked by someone else
    /// derives to a different address and fails the seeds constraint.
    #[account(
        mut,
        seeds = [VAULT_PDA_SEED, vault_pda.seed.to_le_bytes().as_ref(), user.key().as_ref()],
        bump = vault_pda.bump,
        close = user
    )]
    pub vault_pda: Account<'info, VaultPda>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, vault_pda.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn withdraw_sol(ctx: Context<WithdrawSol>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let record = &ctx.accounts.vault_pda;

    require!(record.is_unlocked(now), TimeLockError::UnlockTimeNotReached);

    // Drain the custody account completely; with no lamports and no data the
    // runtime drops it at the end of the transaction.
    let amount = ctx.accounts.vault.lamports();
    let vault_pda_key = record.key();
    let bump = [ctx.bumps.vault];
    let signer_seeds: &[&[&[u8]]] = &[&[CUSTODY_SEED, vault_pda_key.as_ref(), &bump]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    transfer(cpi_ctx, amount)?;

    emit!(VaultWithdrawn {
        owner: record.owner,
        vault_pda: vault_pda_key,
        vault: ctx.accounts.vault.key(),
        amount,
        timestamp: now,
    });

    // vault_pda is closed to the owner by the `close` constraint on exit.
    msg!("Withdrew {} lamports to {}", amount, record.owner);
    Ok(())
}
