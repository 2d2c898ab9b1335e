use anchor_lang::prelude::*;

/// Metadata of one locked deposit.
///
/// PDA seeds: `[b"pda", seed.to_le_bytes(), owner]`. The lamports themselves
/// live in the custody PDA `[b"vault", vault_pda]`, which carries no data.
///
/// Memory layout (after the 8-byte discriminator):
/// [0..8]    seed: u64
/// [8..40]   owner: Pubkey
/// [40..48]  locked_amount: u64
/// [48..56]  unlock_at: u64
/// [56]      bump: u8
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VaultPda {
    /// Caller-chosen seed; lets one owner hold several vaults.
    pub seed: u64,
    /// Depositor. Also baked into the PDA seeds.
    pub owner: Pubkey,
    /// Lamports held by the custody account.
    pub locked_amount: u64,
    /// Unix timestamp (seconds) from which withdrawal is allowed.
    pub unlock_at: u64,
    /// Canonical bump of this record's address.
    pub bump: u8,
}

impl VaultPda {
    pub const LEN: usize = 8 + 8 + 32 + 8 + 8 + 1; // discriminator + seed + pubkey + u64 + u64 + u8

    /// Seconds left before withdrawal opens; zero once unlocked.
    ///
    /// A negative clock is treated as lying before every possible `unlock_at`.
    pub fn seconds_until_unlock(&self, now: i64) -> u64 {
        match u64::try_from(now) {
            Ok(now) => self.unlock_at.saturating_sub(now),
            Err(_) => self.unlock_at.saturating_add(now.unsigned_abs()),
        }
    }

    pub fn is_unlocked(&self, now: i64) -> bool {
        self.seconds_until_unlock(now) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> VaultPda {
        VaultPda {
            seed: 1,
            owner: Pubkey::new_from_array([7u8; 32]),
            locked_amount: 500_000_000,
            unlock_at: 1_700_000_003,
            bump: 254,
        }
    }

    /// The serialized account must match the documented fixed layout.
    #[test]
    fn test_vault_pda_layout() {
        let record = sample_record();

        let mut buffer = Vec::new();
        record.try_serialize(&mut buffer).unwrap();

        assert_eq!(buffer.len(), VaultPda::LEN);
        assert_eq!(&buffer[..8], VaultPda::DISCRIMINATOR);
        assert_eq!(&buffer[8..16], &1u64.to_le_bytes());
        assert_eq!(&buffer[16..48], &[7u8; 32]);
        assert_eq!(&buffer[48..56], &500_000_000u64.to_le_bytes());
        assert_eq!(&buffer[56..64], &1_700_000_003u64.to_le_bytes());
        assert_eq!(buffer[64], 254);
    }

    #[test]
    fn test_vault_pda_roundtrip() {
        let record = sample_record();

        let mut buffer = Vec::new();
        record.try_serialize(&mut buffer).unwrap();

        let decoded = VaultPda::try_deserialize(&mut buffer.as_slice()).unwrap();
        assert_eq!(decoded, record);
    }

    /// A record with a foreign discriminator (e.g. a closed, zeroed account) is rejected.
    #[test]
    fn test_vault_pda_rejects_wrong_discriminator() {
        let mut buffer = Vec::new();
        sample_record().try_serialize(&mut buffer).unwrap();
        buffer[..8].fill(0);

        assert!(VaultPda::try_deserialize(&mut buffer.as_slice()).is_err());
    }

    #[test]
    fn test_vault_pda_rejects_short_data() {
        let mut buffer = Vec::new();
        sample_record().try_serialize(&mut buffer).unwrap();
        buffer.truncate(40);

        assert!(VaultPda::try_deserialize(&mut buffer.as_slice()).is_err());
    }

    #[test]
    fn test_locked_before_unlock_time() {
        let record = sample_record();

        assert!(!record.is_unlocked(1_700_000_000));
        assert_eq!(record.seconds_until_unlock(1_700_000_000), 3);
        assert!(!record.is_unlocked(1_700_000_002));
    }

    #[test]
    fn test_unlocked_at_and_after_unlock_time() {
        let record = sample_record();

        assert!(record.is_unlocked(1_700_000_003));
        assert!(record.is_unlocked(1_700_000_004));
        assert!(record.is_unlocked(i64::MAX));
        assert_eq!(record.seconds_until_unlock(1_800_000_000), 0);
    }

    #[test]
    fn test_zero_unlock_time_opens_immediately() {
        let record = VaultPda { unlock_at: 0, ..sample_record() };

        assert!(record.is_unlocked(0));
        assert!(record.is_unlocked(1_700_000_000));
    }

    #[test]
    fn test_negative_clock_is_never_unlocked() {
        let record = VaultPda { unlock_at: 0, ..sample_record() };

        assert!(!record.is_unlocked(-1));
        assert_eq!(record.seconds_until_unlock(-5), 5);

        let far = VaultPda { unlock_at: u64::MAX, ..sample_record() };
        assert!(!far.is_unlocked(i64::MIN));
        assert_eq!(far.seconds_until_unlock(i64::MIN), u64::MAX);
    }
}
