// Import the cooldown window
use crate::consts::YIELD_CHECK_INTERVAL;
// Import error handling
use crate::err::VaultError;
// Import the rebalance fee helper
use crate::models::fees;
// Import the vault state model
use crate::models::vault::VaultState;
// Import the protocol yield registry
use crate::models::yields::{self, YieldQuote};
// Import Anchor lang prelude
use anchor_lang::prelude::*;

// Handler function for the permissionless yield crank
//
// Gated to one effective run per cooldown window; within the window the
// call returns Ok without touching state so crankers can fire blindly.
//
// # Arguments
// * `ctx` - The context containing the vault state account
pub fn handle(ctx: Context<CheckYields>) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;
    let now = Clock::get()?.unix_timestamp;

    // Silent no-op inside the cooldown window
    if now - vault_state.last_yield_check < YIELD_CHECK_INTERVAL {
        return Ok(());
    }

    let quotes = yields::current_yields();
    let best = yields::best_quote(quotes).ok_or_else(|| error!(VaultError::NoYieldData))?;

    // Only move funds for a strictly better yield
    if best.apy_bps > vault_state.current_best_yield {
        rebalance(vault_state, &best, now)?;
    }

    vault_state.last_yield_check = now;

    Ok(())
}

/// Moves the vault's position to `quote`, charging the rebalance fee and
/// emitting a `RebalanceEvent` with the post-fee balance.
fn rebalance(vault_state: &mut VaultState, quote: &YieldQuote, now: i64) -> Result<()> {
    msg!(
        "rebalancing funds to {} with yield of {} bps",
        quote.protocol,
        quote.apy_bps
    );

    let transfer_fee = fees::get_rebalance_fee_amount(vault_state.total_deposits)?;
    vault_state.total_deposits = vault_state
        .total_deposits
        .checked_sub(transfer_fee)
        .ok_or_else(|| error!(VaultError::MathOverflow))?;

    vault_state.current_best_yield = quote.apy_bps;
    vault_state.current_best_protocol = quote.protocol.to_string();

    emit!(RebalanceEvent {
        timestamp: now,
        new_protocol: quote.protocol.to_string(),
        new_yield: quote.apy_bps,
        total_balance: vault_state.total_deposits,
    });

    msg!(
        "transfer_fee: {}\n total_balance: {}",
        transfer_fee,
        vault_state.total_deposits
    );

    Ok(())
}

// Account validation struct for the yield crank
//
// Deliberately permissionless: anyone may crank, the cooldown window and
// the strictly-better-yield gate bound how often state can change.
#[derive(Accounts)]
pub struct CheckYields<'info> {
    #[account(mut, seeds = [VaultState::VAULT_PREFIX], bump)]
    pub vault_state: Account<'info, VaultState>,
}

#[event]
pub struct RebalanceEvent {
    pub timestamp: i64,
    pub new_protocol: String,
    pub new_yield: u64,
    pub total_balance: u64,
}
