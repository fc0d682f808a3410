//! Errors module for the Counter program
//!
//! This module contains all custom error definitions used by the Counter program.
//! Anchor numbers them from 6000 in declaration order.

use anchor_lang::prelude::*;

/// Custom error codes for the Counter program
#[error_code]
pub enum CounterError {
    /// The counter account already exists
    ///
    /// This error occurs when:
    /// - `initialize` is called a second time
    /// - The counter address is owned by a program or already holds data
    #[msg("Counter already exists")]
    AlreadyExists,

    /// The counter account has not been created yet
    ///
    /// This error occurs when:
    /// - `increase` or `get_value` is called before `initialize`
    /// - The account at the counter address is not owned by this program
    #[msg("Counter not initialized")]
    NotInitialized,

    /// The payer cannot cover the rent-exempt balance of the counter account
    #[msg("Insufficient funds to create the counter")]
    InsufficientFunds,

    /// The counter is already at its maximum value
    #[msg("Counter overflow")]
    Overflow,
}
