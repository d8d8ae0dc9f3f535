use crate::consts::NCT_DECIMALS;
use crate::models::vault::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

/// Handles one-time creation of the vault
///
/// Creates the vault state PDA and the NCT share mint, then writes the
/// documented initial state: no deposits, no best yield, no protocol.
///
/// # Arguments
/// * `ctx` - The context containing all required accounts
///
/// # Returns
/// * `Result<()>` - Result indicating success or containing error
pub fn handle(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.init(now, ctx.accounts.nct_mint.key());

    msg!(
        "vault initialized\n nct_mint: {}\n timestamp: {}",
        vault_state.nct_mint,
        vault_state.last_yield_check
    );

    Ok(())
}

/// Account validation struct for vault creation
///
/// # Account Requirements
/// * `vault_state` - The vault state PDA, created here
/// * `user` - The payer funding both new accounts
/// * `nct_mint` - The share mint, created here with the vault as authority
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = user,
        space = 8 + VaultState::INIT_SPACE,
        seeds = [VaultState::VAULT_PREFIX],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        mint::decimals = NCT_DECIMALS,
        mint::authority = vault_state,
    )]
    pub nct_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}
