use anchor_lang::prelude::*;

declare_id!("5tipBFGtz7pnUBpqHcnc8x3tutQQtz3diadAkjLkBowU");

pub mod client;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod time_lock {
    use super::*;

    /// Lock `locked_amount` lamports in a custody PDA until `unlock_at`.
    ///
    /// The vault record is derived from `seed` and the signer, so the same
    /// seed can be reused by different owners without collision.
    pub fn lock_sol(
        ctx: Context<LockSol>,
        seed: u64,
        locked_amount: u64,
        unlock_at: u64,
    ) -> Result<()> {
        instructions::lock_sol(ctx, seed, locked_amount, unlock_at)
    }

    /// Release the whole custody balance to the owner and close the record.
    pub fn withdraw_sol(ctx: Context<WithdrawSol>) -> Result<()> {
        instructions::withdraw_sol(ctx)
    }
}
