use crate::err::{self, VaultError};
use crate::models::vault::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

impl<'info> Withdraw<'info> {
    /// Creates a CPI context for burning the user's NCT shares
    fn burn_shares_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Burn<'info>> {
        let cpi_accounts = Burn {
            mint: self.nct_mint.to_account_info(),
            from: self.user_nct_account.to_account_info(),
            authority: self.user.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }

    /// Creates a CPI context for paying USDC out of the vault
    fn payout_usdc_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.vault_token_account.to_account_info(),
            to: self.user_token_account.to_account_info(),
            authority: self.vault_state.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Handles redemption of NCT shares for USDC
///
/// Burns `nct_amount` shares from the user and pays out the proportional
/// slice of the vault's USDC, rounding down.
///
/// # Arguments
/// * `ctx` - The context containing all required accounts
/// * `nct_amount` - The amount of NCT shares to redeem
///
/// # Errors
/// * `VaultError::NoZeroTokens` - If attempting to redeem 0 shares
/// * `VaultError::InsufficientBalance` - If the user holds fewer shares
/// * `VaultError::NoShareSupply` - If no shares are outstanding
/// * `VaultError::MathOverflow` - If the payout math overflows
pub fn handle(ctx: Context<Withdraw>, nct_amount: u64) -> Result<()> {
    let accs = ctx.accounts;

    if nct_amount == 0 {
        return Err(error!(VaultError::NoZeroTokens));
    }

    if nct_amount > accs.user_nct_account.amount {
        return Err(error!(VaultError::InsufficientBalance));
    }

    // Payout math uses the supply as it stands before the burn
    let usdc_to_return = accs
        .vault_state
        .redeem_amount(nct_amount, accs.nct_mint.supply)?;

    // Burn NCT shares
    token::burn(accs.burn_shares_ctx(), nct_amount)?;

    // Create signer seeds for the vault PDA
    let vault_seeds: &[&[u8]] = &[VaultState::VAULT_PREFIX, &[ctx.bumps.vault_state]];

    // Transfer USDC from vault to user
    token::transfer(
        accs.payout_usdc_ctx().with_signer(&[vault_seeds]),
        usdc_to_return,
    )?;

    // Update total deposits
    let vault_state = &mut accs.vault_state;
    vault_state.total_deposits = vault_state
        .total_deposits
        .checked_sub(usdc_to_return)
        .ok_or_else(|| error!(VaultError::MathOverflow))?;

    msg!(
        "shares_burned: {}\n returned: {}\n total_deposits: {}",
        nct_amount,
        usdc_to_return,
        vault_state.total_deposits
    );

    Ok(())
}

/// Account validation struct for redeeming NCT shares
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [VaultState::VAULT_PREFIX], bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = user_token_account.mint == usdc_mint.key()
            @ err::acc("Invalid payout mint"),
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = usdc_mint,
        associated_token::authority = vault_state
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub usdc_mint: Account<'info, Mint>,

    #[account(mut, address = vault_state.nct_mint @ err::acc("Invalid share mint"))]
    pub nct_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = user_nct_account.mint == vault_state.nct_mint
            @ err::acc("Invalid share account mint"),
        constraint = user_nct_account.owner == user.key()
    )]
    pub user_nct_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
