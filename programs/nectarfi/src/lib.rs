mod consts;
mod endpoints;
mod err;
mod libraries;
mod models;

use crate::endpoints::*;
use anchor_lang::prelude::*;

declare_id!("NECTMRLbg1N5H66peinv7Yfau8183Y8RPSoAEHc8ErE");

/// # NectarFi Yield Vault Program
///
/// A yield-aggregating USDC vault on Solana featuring:
/// - Pro-rata NCT share minting against pooled deposits
/// - Proportional redemption back to USDC at any time
/// - A permissionless yield crank with a five-minute cooldown
/// - Automatic rebalancing toward the best quoted protocol yield
#[program]
pub mod nectarfi {
    use super::*;

    // ===== Vault Lifecycle =====

    /// Creates the vault state account and the NCT share mint
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handle(ctx)
    }

    // ===== User Operations =====

    /// Deposit USDC into the vault and receive freshly minted NCT shares
    ///
    /// # Arguments
    /// * `amount` - Amount of USDC (raw units) to deposit
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        deposit::handle(ctx, amount)
    }

    /// Burn NCT shares and withdraw the proportional USDC
    ///
    /// # Arguments
    /// * `nct_amount` - Amount of NCT shares to redeem
    pub fn withdraw(ctx: Context<Withdraw>, nct_amount: u64) -> Result<()> {
        withdraw::handle(ctx, nct_amount)
    }

    // ===== Yield Automation =====

    /// Permissionless crank: refresh the protocol yield table and rebalance
    /// the vault when a strictly better yield is available
    ///
    /// Rate limited to one effective run per cooldown window; calls inside
    /// the window are silent no-ops.
    pub fn check_yields(ctx: Context<CheckYields>) -> Result<()> {
        check_yields::handle(ctx)
    }
}
