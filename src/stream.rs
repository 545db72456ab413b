use anchor_lang::prelude::*;
use std::convert::TryFrom;
use tracing::trace;

use crate::constants::NATIVE_STREAM_SENTINEL;
use crate::enums::*;
use crate::errors::ErrorCode;
use crate::utils::decode_account;

/// Decoded stream account, as laid out by the streaming program.
///
/// Field order matches the on-chain borsh encoding and must not change.
/// A snapshot is immutable for the duration of one evaluation; every
/// derivation takes the evaluation time as an explicit parameter so that
/// repeated calls with the same inputs yield the same result.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct StreamAccount {
    pub stream_id: String,
    pub title: String,
    pub recipient: Pubkey,
    pub sender: Pubkey,
    pub token_mint: Pubkey,
    /// Unix seconds the stream account was created.
    pub created_at: u64,
    /// Inclusive lower bound of the streaming window, Unix seconds.
    pub start_time: u64,
    /// Upper bound of the streaming window, Unix seconds.
    pub stop_time: u64,
    /// Funds deposited and not yet withdrawn.
    pub remaining_balance: u64,
    /// Total amount ever funded into the stream (grows on reload).
    pub deposit: u64,
    /// Total amount withdrawn by the recipient so far.
    pub withdrawn: u64,
    /// Amount released up front once the stream starts.
    pub cliff_amount: u64,
    /// Release cadence in seconds.
    pub interval: u64,
    /// Amount released per completed interval.
    pub rate: u64,
    /// Seconds of the window left when the stream was last paused.
    pub time_left: u64,
    /// Withdrawal watermark taken when the stream was paused.
    pub paused_amount: u64,
    pub bump: u8,
    pub cancel_by: ActionAuthority,
    pub pause_by: ActionAuthority,
    pub resume_by: ActionAuthority,
    pub withdraw_by: ActionAuthority,
    pub edit_by: ActionAuthority,
    pub is_cliff_percent: bool,
    pub is_paused: bool,
    pub is_cancelled: bool,
    pub is_infinite: bool,
}

/// Payout split a cancellation at a given time would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub to_recipient: u64,
    pub to_sender: u64,
}

impl StreamAccount {
    pub const DISCRIMINATOR: [u8; 8] = [243, 60, 164, 106, 199, 192, 110, 53];

    /// Decodes a fetched account payload (discriminator + borsh data).
    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        let stream: StreamAccount = decode_account(data, Self::DISCRIMINATOR)?;
        trace!(stream_id = %stream.stream_id, "decoded stream account");
        Ok(stream)
    }

    /// Estimates the amount eligible for withdrawal at `now`.
    ///
    /// At or after `stop_time` the whole remaining balance is claimable.
    /// Before that, one `rate` becomes eligible per completed `interval`
    /// since `start_time` (nothing before the first interval completes,
    /// including when the stream has not started), and the amount
    /// already withdrawn (`deposit - remaining_balance`) is deducted
    /// from the cumulative entitlement.
    ///
    /// The result is not clamped to `[0, remaining_balance]`: after an
    /// out-of-band withdrawal it can be negative, and with a rate that
    /// outpaces the deposit it can exceed the remaining balance. Callers
    /// must tolerate both. The authoritative accounting is enforced by
    /// the program on withdrawal; this estimate feeds displays only.
    pub fn withdrawable_amount(&self, now: u64) -> Result<i64> {
        if self.interval == 0 {
            return Err(ErrorCode::InvalidInterval.into());
        }

        if now >= self.stop_time {
            let matured = i64::try_from(self.remaining_balance).map_err(|_| ErrorCode::Overflow)?;
            return Ok(matured);
        }

        let delta = now as i128 - self.start_time as i128;
        if delta < self.interval as i128 {
            return Ok(0);
        }

        let elapsed_intervals = delta / self.interval as i128;
        let mut ready = elapsed_intervals
            .checked_mul(self.rate as i128)
            .ok_or(ErrorCode::Overflow)?;

        if self.deposit > self.remaining_balance {
            ready -= (self.deposit - self.remaining_balance) as i128;
        }

        let ready = i64::try_from(ready).map_err(|_| ErrorCode::Overflow)?;
        Ok(ready)
    }

    /// Classifies the stream at `now`. First match wins: the pause and
    /// cancel overrides outrank the temporal states.
    pub fn status(&self, now: u64) -> StreamStatus {
        if self.is_paused {
            return StreamStatus::Paused;
        }
        if self.is_cancelled {
            return StreamStatus::Cancelled;
        }
        if now > self.stop_time {
            return StreamStatus::Ended;
        }
        if now < self.start_time {
            return StreamStatus::Scheduled;
        }
        StreamStatus::Active
    }

    /// Amount the program itself would pay out to the recipient at `now`:
    /// interval accrual plus the pause credit (or the cliff when the
    /// stream was never paused), minus prior withdrawals, and the whole
    /// remaining balance once the window has matured.
    pub fn accrued_amount(&self, now: u64) -> Result<u64> {
        if self.interval == 0 {
            return Err(ErrorCode::InvalidInterval.into());
        }
        if now >= self.stop_time {
            return Ok(self.remaining_balance);
        }
        if now < self.start_time {
            return Ok(0);
        }

        let delta = now
            .checked_sub(self.start_time)
            .ok_or(ErrorCode::Overflow)?;
        let elapsed_intervals = delta
            .checked_div(self.interval)
            .ok_or(ErrorCode::Overflow)?;
        let mut accrued = elapsed_intervals
            .checked_mul(self.rate)
            .ok_or(ErrorCode::Overflow)?;

        accrued = if self.paused_amount > 0 {
            accrued.checked_add(self.paused_amount)
        } else {
            accrued.checked_add(self.cliff_amount)
        }
        .ok_or(ErrorCode::Overflow)?;

        if self.withdrawn > 0 {
            accrued = accrued
                .checked_sub(self.withdrawn)
                .ok_or(ErrorCode::Overflow)?;
        }

        Ok(accrued)
    }

    /// The split a cancellation at `now` would produce: before start or
    /// while paused the whole remaining balance returns to the sender;
    /// otherwise the recipient receives the accrued amount and the sender
    /// the rest.
    pub fn settlement_preview(&self, now: u64) -> Result<Settlement> {
        if now < self.start_time || self.is_paused {
            return Ok(Settlement {
                to_recipient: 0,
                to_sender: self.remaining_balance,
            });
        }

        let to_recipient = self.accrued_amount(now)?;
        let to_sender = self.remaining_balance
            .checked_sub(to_recipient)
            .ok_or(ErrorCode::Overflow)?;

        Ok(Settlement {
            to_recipient,
            to_sender,
        })
    }

    /// The mint a token stream pays in, or `None` for native streams
    /// (the program stores a blank sentinel instead of a mint there).
    pub fn mint(&self) -> Option<Pubkey> {
        if self.token_mint == NATIVE_STREAM_SENTINEL {
            None
        } else {
            Some(self.token_mint)
        }
    }

    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start_time
    }

    /// Whether the window has matured, i.e. the whole remaining balance
    /// is claimable.
    pub fn is_mature(&self, now: u64) -> bool {
        now >= self.stop_time
    }

    pub fn seconds_since_start(&self, now: u64) -> Option<u64> {
        now.checked_sub(self.start_time)
    }
}
