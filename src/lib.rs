//! Read-side client core for an interval-based payment streaming
//! program.
//!
//! The streaming program releases a fixed `rate` every `interval`
//! seconds from a sender to a recipient, in the native asset or an SPL
//! token. This crate decodes the program's accounts into typed state
//! and derives everything a dashboard needs from an already-fetched
//! snapshot: the withdrawable amount, the lifecycle status, cadence
//! labels, cancel-settlement previews, and fully-materialized view
//! rows.
//!
//! All derivations are pure and synchronous over immutable snapshots;
//! the evaluation time is always an explicit parameter, never sampled
//! internally. Fetching accounts, building transactions, and signing
//! stay with the caller.

pub mod addresses;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod stream;
pub mod stream_list;
pub mod utils;
pub mod views;

pub use crate::config::{ClusterConfig, CommitmentLevel};
pub use crate::enums::{ActionAuthority, IntervalUnit, StreamRole, StreamStatus};
pub use crate::errors::ErrorCode;
pub use crate::stream::{Settlement, StreamAccount};
pub use crate::stream_list::{StreamEntry, StreamList};
pub use crate::views::StreamView;
