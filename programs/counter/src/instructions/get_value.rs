//! Get value instruction for the Counter program

use anchor_lang::prelude::*;
use crate::state::{Counter, COUNTER_SEED};

/// Get the current counter value
///
/// Read-only; the value is returned to the caller as program return data.
pub fn get_value(ctx: Context<GetValue>) -> Result<u32> {
    let counter = Counter::load(&ctx.accounts.counter.to_account_info())?;
    Ok(counter.value)
}

#[derive(Accounts)]
pub struct GetValue<'info> {
    /// CHECK: Address is pinned by the seeds; `Counter::load` checks owner and layout
    #[account(seeds = [COUNTER_SEED], bump)]
    pub counter: UncheckedAccount<'info>,
}
