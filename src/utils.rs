use anchor_lang::prelude::*;
use chrono::{DateTime, Datelike, Timelike};

use crate::errors::ErrorCode;

/// Verifies the 8-byte discriminator and borsh-decodes the rest.
///
/// Accounts are allocated with fixed space, so trailing zero padding
/// after the encoded payload is expected and tolerated.
pub(crate) fn decode_account<T: AnchorDeserialize>(data: &[u8], discriminator: [u8; 8]) -> Result<T> {
    if data.len() < 8 {
        return Err(ErrorCode::AccountDataTooSmall.into());
    }
    if data[..8] != discriminator[..] {
        return Err(ErrorCode::DiscriminatorMismatch.into());
    }
    T::deserialize(&mut &data[8..]).map_err(|_| ErrorCode::InvalidAccountData.into())
}

/// `D/M/YYYY H:M:S` in UTC, unpadded components.
pub fn format_timestamp(timestamp: u64) -> String {
    match DateTime::from_timestamp(timestamp as i64, 0) {
        Some(utc) => format!(
            "{}/{}/{} {}:{}:{}",
            utc.day(),
            utc.month(),
            utc.year(),
            utc.hour(),
            utc.minute(),
            utc.second()
        ),
        None => timestamp.to_string(),
    }
}

/// Two-decimal display string for a token amount.
pub fn ui_amount_string(amount: u64, decimals: u8) -> String {
    format!("{:.2}", spl_token::amount_to_ui_amount(amount, decimals))
}
