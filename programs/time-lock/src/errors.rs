use anchor_lang::prelude::*;

#[error_code]
pub enum TimeLockError {
    #[msg("Cannot lock zero lamports")]
    LockingZeroSolError,
    #[msg("Unlock time has not been reached yet")]
    UnlockTimeNotReached,
    #[msg("Locked amount is below the rent-exempt minimum of the custody account")]
    LockBelowRentExemption,
}
