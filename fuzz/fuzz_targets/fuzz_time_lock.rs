#![no_main]

use anchor_lang::prelude::*;
use libfuzzer_sys::fuzz_target;
use time_lock::{check_lock_amount, VaultPda};

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }

    let amount = u64::from_le_bytes(data[0..8].try_into().unwrap_or([0; 8]));
    let unlock_at = u64::from_le_bytes(data[8..16].try_into().unwrap_or([0; 8]));
    let now = i64::from_le_bytes(data[16..24].try_into().unwrap_or([0; 8]));

    // Lock guard: non-zero and able to keep the custody account alive.
    let rent = Rent::default();
    let accepted = check_lock_amount(amount, &rent).is_ok();
    assert_eq!(accepted, amount > 0 && amount >= rent.minimum_balance(0));

    // Withdraw guard: open exactly when the clock has reached unlock_at.
    let record = VaultPda {
        seed: 0,
        owner: Pubkey::default(),
        locked_amount: amount,
        unlock_at,
        bump: 0,
    };
    let expected = now >= 0 && now as u64 >= unlock_at;
    assert_eq!(record.is_unlocked(now), expected);
    assert_eq!(record.seconds_until_unlock(now) == 0, expected);
});
