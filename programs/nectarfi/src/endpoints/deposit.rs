use crate::err::{self, VaultError};
use crate::models::vault::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

impl<'info> Deposit<'info> {
    /// Creates a CPI context for transferring USDC from user to vault
    fn deposit_usdc_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.vault_token_account.to_account_info(),
            authority: self.user.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }

    /// Creates a CPI context for minting NCT shares to the user
    fn mint_shares_ctx(&self) -> CpiContext<'_, '_, '_, 'info, MintTo<'info>> {
        let cpi_accounts = MintTo {
            mint: self.nct_mint.to_account_info(),
            to: self.user_nct_account.to_account_info(),
            authority: self.vault_state.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Handles a USDC deposit into the vault
///
/// Moves `amount` USDC from the user into the vault's token account and
/// mints NCT shares pro rata against the supply outstanding before this
/// deposit. The first deposit into an empty vault mints 1:1.
///
/// # Arguments
/// * `ctx` - The context containing all required accounts
/// * `amount` - The amount of USDC (raw units) to deposit
///
/// # Errors
/// * `VaultError::NoZeroTokens` - If attempting to deposit 0 tokens
/// * `VaultError::InsufficientBalance` - If the user holds less than `amount`
/// * `VaultError::MathOverflow` - If the share or total math overflows
pub fn handle(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let accs = ctx.accounts;

    // Validate that the input amount is not zero
    if amount == 0 {
        return Err(error!(VaultError::NoZeroTokens));
    }

    // Check if user has sufficient USDC
    if amount > accs.user_token_account.amount {
        return Err(error!(VaultError::InsufficientBalance));
    }

    // Transfer USDC from user to vault
    token::transfer(accs.deposit_usdc_ctx(), amount)?;

    // Share math uses the supply and total as they were before this deposit
    let nct_to_mint = accs
        .vault_state
        .shares_to_mint(amount, accs.nct_mint.supply)?;

    // Create signer seeds for the vault PDA
    let vault_seeds: &[&[u8]] = &[VaultState::VAULT_PREFIX, &[ctx.bumps.vault_state]];

    // Mint new NCT shares to the user
    token::mint_to(
        accs.mint_shares_ctx().with_signer(&[vault_seeds]),
        nct_to_mint,
    )?;

    // Update total deposits
    let vault_state = &mut accs.vault_state;
    vault_state.total_deposits = vault_state
        .total_deposits
        .checked_add(amount)
        .ok_or_else(|| error!(VaultError::MathOverflow))?;

    msg!(
        "deposited: {}\n shares_minted: {}\n total_deposits: {}",
        amount,
        nct_to_mint,
        vault_state.total_deposits
    );

    Ok(())
}

/// Account validation struct for depositing USDC
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [VaultState::VAULT_PREFIX], bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = user_token_account.mint == usdc_mint.key()
            @ err::acc("Invalid deposit mint"),
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
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
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_validation() {
        let amount = 0; // This should fail

        assert_eq!(amount, 0);
        println!("✅ Zero amount validation test passed!");
    }

    #[test]
    fn test_balance_comparison() {
        let user_balance = 50;
        let amount = 100; // Try to deposit more than balance

        assert!(amount > user_balance);
        println!("✅ Insufficient balance validation test passed!");
    }

    #[test]
    fn test_deposit_updates_total() {
        let mut vault = VaultState {
            last_yield_check: 0,
            current_best_yield: 0,
            total_deposits: 1_000_000,
            current_best_protocol: "None".to_string(),
            nct_mint: Pubkey::new_unique(),
        };
        let amount = 250_000;

        // Update total like the handler does
        vault.total_deposits = vault.total_deposits.checked_add(amount).unwrap();

        assert_eq!(vault.total_deposits, 1_250_000);
        println!("✅ Total deposits update test passed!");
    }

    #[test]
    fn test_total_overflow_is_detected() {
        let vault_total = u64::MAX;
        let amount = 1u64;

        // checked_add must refuse instead of wrapping
        assert_eq!(vault_total.checked_add(amount), None);
        println!("✅ Deposit overflow detection test passed!");
    }

    #[test]
    fn test_share_math_before_state_update() {
        // Shares must be computed against pre-deposit totals: a 100 USDC
        // deposit into a 100 USDC / 100 share vault mints exactly 100,
        // not 50 (which the post-update total would produce).
        let vault = VaultState {
            last_yield_check: 0,
            current_best_yield: 0,
            total_deposits: 100,
            current_best_protocol: "None".to_string(),
            nct_mint: Pubkey::new_unique(),
        };

        let shares = vault.shares_to_mint(100, 100).unwrap();

        assert_eq!(shares, 100);
        println!("✅ Pre-update share math test passed!");
    }

    #[test]
    fn test_vault_signer_pda_derivation() {
        let (_, bump) = Pubkey::find_program_address(&[VaultState::VAULT_PREFIX], &crate::ID);

        assert!(bump <= 255);
        println!("✅ PDA derivation test passed! Bump: {}", bump);
    }
}
