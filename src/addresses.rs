//! Deterministic address derivations for the program's accounts. The
//! scheme itself belongs to the program; these wrappers only surface the
//! addresses callers need to fetch, parameterized by the configured
//! program id.

use anchor_spl::associated_token::get_associated_token_address;
use solana_program::pubkey::Pubkey;

use crate::constants::STREAM_LIST_SEED;

/// Address of the stream account seeded by its id and the sender.
pub fn stream_address(program_id: &Pubkey, stream_id: &str, sender: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[stream_id.as_bytes(), sender.as_ref()], program_id)
}

/// Address of a wallet's stream registry.
pub fn stream_list_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STREAM_LIST_SEED, owner.as_ref()], program_id)
}

/// Associated token account a token stream escrows its funds in.
pub fn stream_token_address(stream: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(stream, mint)
}
