use anchor_lang::prelude::*;

/// Commitment level to request from the cluster when fetching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentLevel {
    Processed,
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }
}

impl Default for CommitmentLevel {
    fn default() -> Self {
        CommitmentLevel::Processed
    }
}

/// Where and what to talk to. The program address is always injected by
/// the caller; nothing in this crate hardcodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub url: String,
    pub commitment: CommitmentLevel,
    pub program_id: Pubkey,
}

impl ClusterConfig {
    pub fn new(url: impl Into<String>, program_id: Pubkey) -> Self {
        ClusterConfig {
            url: url.into(),
            commitment: CommitmentLevel::default(),
            program_id,
        }
    }

    pub fn devnet(program_id: Pubkey) -> Self {
        Self::new("https://api.devnet.solana.com", program_id)
    }

    pub fn mainnet(program_id: Pubkey) -> Self {
        Self::new("https://api.mainnet-beta.solana.com", program_id)
    }

    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = commitment;
        self
    }
}
