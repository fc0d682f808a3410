//! Increase instruction for the Counter program

use anchor_lang::prelude::*;
use crate::events::CounterIncreased;
use crate::state::{Counter, COUNTER_SEED};

/// Increase the counter value by 1
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Errors
/// * `NotInitialized` - If the counter has not been created
/// * `Overflow` - If the counter is at `u32::MAX`
///
/// # Events
/// * `CounterIncreased` - Emitted with the previous and new values
pub fn increase(ctx: Context<Increase>) -> Result<()> {
    let counter_info = ctx.accounts.counter.to_account_info();
    let mut counter = Counter::load(&counter_info)?;

    let previous_value = counter.value;
    let new_value = counter.increase()?;
    counter.store(&counter_info)?;

    let clock = Clock::get()?;
    emit!(CounterIncreased {
        counter: counter_info.key(),
        previous_value,
        new_value,
        timestamp: clock.unix_timestamp,
    });

    msg!("Counter increased from {} to {}", previous_value, new_value);
    Ok(())
}

#[derive(Accounts)]
pub struct Increase<'info> {
    /// CHECK: Address is pinned by the seeds; `Counter::load` checks owner and layout
    #[account(
        mut,
        seeds = [COUNTER_SEED],
        bump
    )]
    pub counter: UncheckedAccount<'info>,
}
