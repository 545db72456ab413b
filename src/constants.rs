use anchor_lang::prelude::*;

/// Seed of the per-wallet stream registry PDA.
pub const STREAM_LIST_SEED: &[u8] = b"streamlist";

/// Token address the program stores for native-asset streams (32 ASCII
/// spaces, no real mint).
pub const NATIVE_STREAM_SENTINEL: Pubkey = Pubkey::new_from_array([b' '; 32]);

// Interval cadences with a canonical label
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 604_800;
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
