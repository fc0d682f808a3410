//! Events module for the Counter program
//!
//! Events emitted on every state change so off-chain consumers can follow
//! the counter without polling the account.

use anchor_lang::prelude::*;

/// Event emitted when the counter account is created
///
/// # Fields
/// * `counter` - The address of the counter account
/// * `payer` - The account that paid for creation
/// * `initial_value` - The value after creation (always 0)
/// * `timestamp` - Unix timestamp of the creation
#[event]
pub struct CounterInitialized {
    pub counter: Pubkey,
    pub payer: Pubkey,
    pub initial_value: u32,
    pub timestamp: i64,
}

/// Event emitted when the counter is increased
#[event]
pub struct CounterIncreased {
    /// The counter account that was increased
    pub counter: Pubkey,
    /// The value before increasing
    pub previous_value: u32,
    /// The value after increasing
    pub new_value: u32,
    /// Timestamp when the increase occurred
    pub timestamp: i64,
}
