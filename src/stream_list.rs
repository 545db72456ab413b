use anchor_lang::prelude::*;
use tracing::trace;

use crate::enums::StreamRole;
use crate::errors::ErrorCode;
use crate::utils::decode_account;

/// One stream a wallet takes part in, from the wallet's registry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct StreamEntry {
    pub stream: Pubkey,
    pub is_sender: bool,
}

impl StreamEntry {
    pub fn role(&self) -> StreamRole {
        if self.is_sender {
            StreamRole::Creator
        } else {
            StreamRole::Receiver
        }
    }
}

/// Per-wallet stream registry account: a running id counter and the
/// streams the wallet created or receives from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct StreamList {
    pub last_stream_id: u32,
    pub items: Vec<StreamEntry>,
}

impl StreamList {
    pub const DISCRIMINATOR: [u8; 8] = [200, 188, 42, 225, 169, 247, 126, 157];

    /// Decodes a fetched account payload (discriminator + borsh data).
    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        let list: StreamList = decode_account(data, Self::DISCRIMINATOR)?;
        trace!(streams = list.items.len(), "decoded stream list");
        Ok(list)
    }

    /// Id the next created stream takes; seeds its address derivation.
    pub fn next_stream_id(&self) -> Result<u32> {
        let next = self
            .last_stream_id
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;
        Ok(next)
    }
}
