use anchor_lang::prelude::*;
use std::fmt;

use crate::constants::*;

/// Lifecycle state of a stream at a given evaluation time.
///
/// The pause and cancel flags are administrative overrides set by the
/// program; they take precedence over the temporal states even when the
/// streaming window has already ended or not yet begun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Paused,
    Cancelled,
    Ended,
    Scheduled,
    Active,
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StreamStatus::Paused => "Paused",
            StreamStatus::Cancelled => "Cancelled",
            StreamStatus::Ended => "Ended",
            StreamStatus::Scheduled => "Scheduled",
            StreamStatus::Active => "Active",
        };
        f.write_str(name)
    }
}

/// Who may perform a given administrative action on a stream.
///
/// Variant order is fixed by the on-chain encoding.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionAuthority {
    Sender,
    Recipient,
    Both,
    Neither,
}

impl ActionAuthority {
    pub fn permits(&self, role: StreamRole) -> bool {
        match (self, role) {
            (ActionAuthority::Both, _) => true,
            (ActionAuthority::Sender, StreamRole::Creator) => true,
            (ActionAuthority::Recipient, StreamRole::Receiver) => true,
            _ => false,
        }
    }
}

/// The wallet's side of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    Creator,
    Receiver,
}

/// Canonical release cadences.
///
/// `from_seconds` is an exact integer lookup; any other cadence has no
/// canonical unit and callers render the raw seconds count instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    PerSecond,
    PerMinute,
    PerHour,
    PerDay,
    PerWeek,
    PerMonth,
    PerYear,
}

impl IntervalUnit {
    pub fn from_seconds(seconds: u64) -> Option<IntervalUnit> {
        match seconds {
            1 => Some(IntervalUnit::PerSecond),
            SECONDS_PER_MINUTE => Some(IntervalUnit::PerMinute),
            SECONDS_PER_HOUR => Some(IntervalUnit::PerHour),
            SECONDS_PER_DAY => Some(IntervalUnit::PerDay),
            SECONDS_PER_WEEK => Some(IntervalUnit::PerWeek),
            SECONDS_PER_MONTH => Some(IntervalUnit::PerMonth),
            SECONDS_PER_YEAR => Some(IntervalUnit::PerYear),
            _ => None,
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            IntervalUnit::PerSecond => 1,
            IntervalUnit::PerMinute => SECONDS_PER_MINUTE,
            IntervalUnit::PerHour => SECONDS_PER_HOUR,
            IntervalUnit::PerDay => SECONDS_PER_DAY,
            IntervalUnit::PerWeek => SECONDS_PER_WEEK,
            IntervalUnit::PerMonth => SECONDS_PER_MONTH,
            IntervalUnit::PerYear => SECONDS_PER_YEAR,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            IntervalUnit::PerSecond => "Per Second",
            IntervalUnit::PerMinute => "Per Minute",
            IntervalUnit::PerHour => "Per Hour",
            IntervalUnit::PerDay => "Per Day",
            IntervalUnit::PerWeek => "Per Week",
            IntervalUnit::PerMonth => "Per Month",
            IntervalUnit::PerYear => "Per Year",
        };
        f.write_str(label)
    }
}
