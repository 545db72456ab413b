use anchor_lang::prelude::*;
use tracing::debug;

use crate::enums::*;
use crate::stream::StreamAccount;
use crate::utils::{format_timestamp, ui_amount_string};

/// Fully-materialized per-stream row for a dashboard or report.
///
/// Recomputed on each query from a fetched snapshot and never persisted;
/// `ready_for_withdrawal` carries the raw estimator result, including its
/// out-of-range cases.
#[derive(Debug, Clone)]
pub struct StreamView {
    pub address: Pubkey,
    pub stream_id: String,
    pub title: String,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    /// `None` for native-asset streams.
    pub mint: Option<Pubkey>,
    pub remaining_balance: u64,
    pub remaining_balance_display: String,
    pub ready_for_withdrawal: i64,
    pub status: StreamStatus,
    pub is_infinite: bool,
    /// Canonical cadence label, or the raw seconds count.
    pub interval: String,
    pub cancel_by: ActionAuthority,
    pub pause_by: ActionAuthority,
    pub withdraw_by: ActionAuthority,
    pub starts_at: String,
    pub ends_at: String,
    pub role: StreamRole,
}

impl StreamView {
    /// Builds the row for one stream. `decimals` scales the balance
    /// display and comes from the stream's mint (9 for native streams).
    pub fn derive(
        address: Pubkey,
        stream: &StreamAccount,
        role: StreamRole,
        now: u64,
        decimals: u8,
    ) -> Result<StreamView> {
        let ready_for_withdrawal = stream.withdrawable_amount(now)?;
        let status = stream.status(now);
        let interval = match IntervalUnit::from_seconds(stream.interval) {
            Some(unit) => unit.to_string(),
            None => stream.interval.to_string(),
        };

        debug!(
            stream = %address,
            status = %status,
            ready_for_withdrawal,
            "derived stream view"
        );

        Ok(StreamView {
            address,
            stream_id: stream.stream_id.clone(),
            title: stream.title.clone(),
            sender: stream.sender,
            recipient: stream.recipient,
            mint: stream.mint(),
            remaining_balance: stream.remaining_balance,
            remaining_balance_display: ui_amount_string(stream.remaining_balance, decimals),
            ready_for_withdrawal,
            status,
            is_infinite: stream.is_infinite,
            interval,
            cancel_by: stream.cancel_by,
            pause_by: stream.pause_by,
            withdraw_by: stream.withdraw_by,
            starts_at: format_timestamp(stream.start_time),
            ends_at: format_timestamp(stream.stop_time),
            role,
        })
    }
}
