//! Initialize instruction for the Counter program

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use crate::errors::CounterError;
use crate::events::CounterInitialized;
use crate::state::{Counter, COUNTER_SEED};

/// Create the counter account and set its value to zero
///
/// The account is created by the handler rather than through an `init`
/// constraint so that an existing counter and an underfunded payer are
/// reported as `AlreadyExists` and `InsufficientFunds`.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterInitialized` - Emitted when the counter is created
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let counter_info = ctx.accounts.counter.to_account_info();
    require!(Counter::is_vacant(&counter_info), CounterError::AlreadyExists);

    let rent = Rent::get()?;
    let current_lamports = counter_info.lamports();
    let required_lamports = rent
        .minimum_balance(Counter::SPACE)
        .saturating_sub(current_lamports);
    require!(
        payer_can_fund(ctx.accounts.user.lamports(), required_lamports, &rent),
        CounterError::InsufficientFunds
    );

    create_counter_account(&ctx, current_lamports, required_lamports)?;

    let counter = Counter::default();
    counter.store(&counter_info)?;

    let clock = Clock::get()?;
    emit!(CounterInitialized {
        counter: counter_info.key(),
        payer: ctx.accounts.user.key(),
        initial_value: counter.value,
        timestamp: clock.unix_timestamp,
    });

    msg!("Counter initialized with value 0 at {}", counter_info.key());
    Ok(())
}

/// Whether a payer holding `balance` can hand over `required` lamports
///
/// The runtime rejects a payment that leaves the payer with a nonzero
/// balance below the rent-exempt minimum of an empty account, so that case
/// counts as insufficient too.
fn payer_can_fund(balance: u64, required: u64, rent: &Rent) -> bool {
    match balance.checked_sub(required) {
        Some(0) => true,
        Some(remaining) => remaining >= rent.minimum_balance(0),
        None => false,
    }
}

/// Allocate the counter PDA and assign it to this program
///
/// Mirrors Anchor's `init`: an address that already holds lamports cannot
/// go through `create_account`, so it is topped up, allocated and assigned
/// in separate steps.
fn create_counter_account(
    ctx: &Context<Initialize>,
    current_lamports: u64,
    required_lamports: u64,
) -> Result<()> {
    let cpi_program = ctx.accounts.system_program.to_account_info();
    let user = ctx.accounts.user.to_account_info();
    let counter = ctx.accounts.counter.to_account_info();
    let bump = [ctx.bumps.counter];
    let signer_seeds: &[&[&[u8]]] = &[&[COUNTER_SEED, &bump]];

    if current_lamports == 0 {
        let cpi_accounts = CreateAccount {
            from: user,
            to: counter,
        };
        system_program::create_account(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
            required_lamports,
            Counter::SPACE as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    if required_lamports > 0 {
        let cpi_accounts = Transfer {
            from: user,
            to: counter.clone(),
        };
        system_program::transfer(
            CpiContext::new(cpi_program.clone(), cpi_accounts),
            required_lamports,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            cpi_program.clone(),
            Allocate {
                account_to_allocate: counter.clone(),
            },
            signer_seeds,
        ),
        Counter::SPACE as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            cpi_program,
            Assign {
                account_to_assign: counter,
            },
            signer_seeds,
        ),
        &crate::ID,
    )?;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The counter account, created by the handler
    /// CHECK: Address is pinned by the seeds; ownership and emptiness are checked in the handler
    #[account(
        mut,
        seeds = [COUNTER_SEED],
        bump
    )]
    pub counter: UncheckedAccount<'info>,

    /// Pays the rent for the counter account
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payer_can_spend_entire_balance() {
        let rent = Rent::default();
        let required = rent.minimum_balance(Counter::SPACE);
        assert!(payer_can_fund(required, required, &rent));
    }

    #[test]
    fn payer_short_of_required_cannot_fund() {
        let rent = Rent::default();
        let required = rent.minimum_balance(Counter::SPACE);
        assert!(!payer_can_fund(required - 1, required, &rent));
        assert!(!payer_can_fund(0, required, &rent));
    }

    #[test]
    fn payer_left_below_rent_exemption_cannot_fund() {
        let rent = Rent::default();
        let required = rent.minimum_balance(Counter::SPACE);
        assert!(!payer_can_fund(required + 100, required, &rent));
        assert!(payer_can_fund(
            required + rent.minimum_balance(0),
            required,
            &rent
        ));
    }

    #[test]
    fn nothing_required_is_always_fundable() {
        assert!(payer_can_fund(0, 0, &Rent::default()));
    }
}
